use optparse::{OptionParser, Requirement};

fn main() {
    let mut parser = OptionParser::new("copy", "Copy a file.")
        .add_option('h', "help", Requirement::Optional, None, "Show this help message.")
        .add_option('v', "verbose", Requirement::Optional, None, "Explain what is being done.")
        .add_option_required_value('m', "mode", Requirement::Optional, Some("644"), "Permission bits of the copy.")
        .add_positional("source", Requirement::Required, None, "The file to copy.")
        .add_positional("target", Requirement::Optional, Some("."), "Where to copy it.");

    parser.parse();

    if parser.is_option_filled("help") {
        println!("{}", parser.help());
        return;
    }

    let source = parser.get_option_value("source").unwrap_or_default();
    let target = parser.get_option_value("target").unwrap_or_default();
    let mode = parser.get_option_value("mode").unwrap_or_default();

    if parser.is_option_filled("verbose") {
        println!("'{source}' -> '{target}' (mode {mode})");
    }
}

use std::env;

use optparse::{DuplicatePolicy, OptionParser, ParseError, Requirement};

fn main() {
    let mut parser = OptionParser::new("listing", "List the entries of a directory.")
        .duplicate_policy(DuplicatePolicy::Skip)
        .add_option('h', "help", Requirement::Optional, None, "Show this help message.")
        .add_option('a', "all", Requirement::Optional, None, "Include hidden entries.")
        .add_option_required_value('s', "sort", Requirement::Required, None, "One of: name, size.")
        // Skipped: 'a' is already taken.
        .add_option('a', "almost-all", Requirement::Optional, None, "")
        .add_positional("directory", Requirement::Optional, Some("."), "The directory to list.");

    // Quote a directory with spaces in it, as in: listing -s name "'My Documents'"
    let fragments: Vec<String> = env::args().skip(1).collect();

    match parser.parse_fragments(&fragments) {
        Ok(()) => {
            let directory = parser.get_option_value("directory").unwrap_or_default();
            let sort = parser.get_option_value("sort").unwrap_or_default();
            let all = parser.is_option_filled("all");
            println!("Listing '{directory}' sorted by {sort} (all: {all}).");
        }
        Err(ParseError::MissingOptionsHelp(help)) => {
            println!("{help}");
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

#[macro_use]
extern crate assert_matches;

use optparse::tokens::{tokenize, unquote};
use optparse::{
    ConfigError, DuplicatePolicy, OptionParser, ParseError, Quote, QuoteError, Requirement,
};
use rstest::rstest;

fn archive() -> OptionParser {
    OptionParser::new("archive", "Pack files into an archive.")
        .add_option('h', "help", Requirement::Optional, None, "Show this help message.")
        .add_option('v', "verbose", Requirement::Optional, None, "Explain what is being done.")
        .add_option_required_value('o', "output", Requirement::Required, None, "The archive to write.")
        .add_option_required_value('l', "level", Requirement::Optional, Some("6"), "Compression level.")
        .add_positional("input", Requirement::Required, None, "The directory to pack.")
        .add_positional("exclude", Requirement::Optional, None, "A pattern to leave out.")
}

#[test]
fn builder_compiles() {
    OptionParser::new("organization", "");
}

#[test]
fn archive_full() {
    // Setup
    let mut parser = archive();

    // Execute
    parser
        .parse_arguments("-v --output out.tar -l 9 'my files' \"*.tmp\"")
        .unwrap();

    // Verify
    assert!(parser.is_option_filled("verbose"));
    assert_eq!(parser.get_option_value("verbose"), Some(""));
    assert_eq!(parser.get_option_value("output"), Some("out.tar"));
    assert_eq!(parser.get_option_value("level"), Some("9"));
    assert_eq!(parser.get_option_value("input"), Some("my files"));
    assert_eq!(parser.get_option_value("exclude"), Some("*.tmp"));
}

#[test]
fn archive_defaults() {
    // Setup
    let mut parser = archive();

    // Execute
    parser.parse_fragments(&["src", "-o", "out.tar"]).unwrap();

    // Verify
    assert_eq!(parser.get_option_value("level"), Some("6"));
    assert_eq!(parser.get_option_value("exclude"), None);
    assert!(!parser.is_option_filled("verbose"));

    assert_eq!(parser.get_option("level"), None);

    let output = parser.get_option("output").unwrap();
    assert!(output.is_filled());
    assert_eq!(output.name(), "output");
    assert_eq!(output.value(), "out.tar");
    assert_eq!(output.effective_value(), Some("out.tar"));
}

#[test]
fn archive_quoted_option_value_is_raw() {
    // Setup
    let mut parser = archive();

    // Execute
    parser
        .parse_fragments(&["-o", "'my", "archive.tar'", "src"])
        .unwrap();

    // Verify
    let output = parser.get_option_value("output").unwrap();
    assert_eq!(output, "'my archive.tar'");
    assert_eq!(unquote(output), "my archive.tar");
}

#[test]
fn archive_missing() {
    // Setup
    let mut parser = archive();

    // Execute
    let error = parser.parse_arguments("-v").unwrap_err();

    // Verify
    assert_matches!(error, ParseError::MissingOptions { command, missing, help } => {
        assert_eq!(command, "archive");
        assert_eq!(missing, vec!["output".to_string(), "input".to_string()]);
        assert!(help.starts_with("Command: archive - Pack files into an archive."));
    });
}

#[rstest]
#[case("-h")]
#[case("--help")]
#[case("-v --help")]
fn archive_help(#[case] line: &str) {
    // Setup
    let mut parser = archive();

    // Execute
    let error = parser.parse_arguments(line).unwrap_err();

    // Verify
    assert_eq!(error.help(), Some(parser.help().as_str()));
    assert_matches!(error, ParseError::MissingOptionsHelp(_));
}

#[test]
fn archive_help_text() {
    // Setup
    let parser = archive();

    // Verify
    assert_eq!(
        parser.help(),
        r#"Command: archive - Pack files into an archive.
Usage: archive [options] "input" [exclude]

Parameters:
    input            The directory to pack.
    exclude          A pattern to leave out.

Required options:
    -o, --output     The archive to write. (value required)

Optional options:
    -h, --help       Show this help message.
    -l, --level      Compression level. (value required)
    -v, --verbose    Explain what is being done."#
    );
}

#[rstest]
#[case("-o out.tar src -x", "Command: archive unexpected option -x")]
#[case("-o out.tar src --nope", "Command: archive unexpected option --nope")]
#[case("src -o", "Command: archive - value: o(output) is required!")]
#[case("src -o -v", "Command: archive - value: o(output) is required!")]
#[case("-o out.tar a b c", "Unknown attribute: \"c\" for command: archive")]
fn archive_errors(#[case] line: &str, #[case] expected: &str) {
    // Setup
    let mut parser = archive();

    // Execute
    let error = parser.parse_arguments(line).unwrap_err();

    // Verify
    assert_eq!(error.to_string(), expected);
    assert_eq!(parser.get_option("input"), None);
}

#[rstest]
#[case("-o 'out.tar src", Quote::Single)]
#[case("-o \"out.tar src", Quote::Double)]
fn archive_unterminated(#[case] line: &str, #[case] quote: Quote) {
    // Setup
    let mut parser = archive();

    // Execute
    let error = parser.parse_arguments(line).unwrap_err();

    // Verify
    assert_eq!(
        error,
        ParseError::OverlappingBrackets(QuoteError::Unterminated(quote))
    );
}

#[test]
fn archive_reparse() {
    // Setup
    let mut parser = archive();
    parser.parse_arguments("-v -o a.tar src").unwrap();
    assert!(parser.is_option_filled("verbose"));

    // Execute
    parser.parse_arguments("-o b.tar src").unwrap();

    // Verify
    assert!(!parser.is_option_filled("verbose"));
    assert_eq!(parser.get_option_value("output"), Some("b.tar"));
    parser.reset();
    assert!(!parser.is_option_filled("output"));
}

#[test]
fn required_parameters() {
    // Execute
    let parser = archive();

    // Verify
    assert_eq!(parser.required_parameters(), vec!["output", "input"]);
}

#[test]
fn duplicates_rejected() {
    // Execute
    let mut parser = archive().add_option('v', "version", Requirement::Optional, None, "");

    // Verify
    assert_matches!(parser.validate(), Err(ConfigError::Duplicate { .. }));
    assert_matches!(
        parser.parse_arguments("-o a.tar src"),
        Err(ParseError::Config(ConfigError::Duplicate { .. }))
    );
}

#[test]
fn duplicates_skipped() {
    // Setup
    let mut parser = OptionParser::new("program", "")
        .duplicate_policy(DuplicatePolicy::Skip)
        .add_option('v', "verbose", Requirement::Optional, None, "")
        .add_option('v', "version", Requirement::Optional, None, "");

    // Execute
    parser.validate().unwrap();
    parser.parse_arguments("-v").unwrap();

    // Verify
    assert!(parser.is_option_filled("verbose"));
    assert!(parser.spec("version").is_none());
}

#[test]
fn tokenize_public() {
    assert_eq!(
        tokenize(&["a\\ b", "'c", "d'"]).unwrap(),
        vec!["a\\ b", "'c d'"]
    );
    assert_eq!(
        tokenize(&["'a\"b'"]),
        Err(QuoteError::Overlap {
            open: Quote::Single,
            found: Quote::Double,
        })
    );
}

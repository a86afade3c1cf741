use thiserror::Error;

use crate::matcher::MatchError;
use crate::tokens::QuoteError;

/// A registration mistake, detected while the parser is being declared.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Two registrations share a short name or a long name.
    #[error("Config error: '{rejected}' conflicts with the existing '{existing}'.")]
    Duplicate {
        /// The registration which was kept.
        existing: String,
        /// The registration which was refused.
        rejected: String,
    },

    /// A short or long name which could never be referenced from the command line.
    #[error("Config error: invalid name '{0}'.")]
    InvalidName(String),
}

/// The ways a parse may fail.
///
/// Every kind aborts the parse on first detection.
/// Callers typically branch on [`ParseError::MissingOptionsHelp`] to show the help message, and report everything else as an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Quote regions interleave, or a quote region is never closed.
    #[error("Parse error: {0}")]
    OverlappingBrackets(#[from] QuoteError),

    /// An option-shaped token names no registered option.
    #[error("Command: {command} unexpected option {token}")]
    UnexpectedOption {
        /// The command name.
        command: String,
        /// The offending token, as written.
        token: String,
    },

    /// A value-required option is last, or is followed by another option-shaped token.
    #[error("Command: {command} - value: {short}({long}) is required!")]
    MissingOptionValue {
        /// The command name.
        command: String,
        /// The option's short name.
        short: char,
        /// The option's long name.
        long: String,
    },

    /// More positional tokens than declared positional parameters.
    #[error("Unknown attribute: \"{token}\" for command: {command}")]
    UnknownAttribute {
        /// The command name.
        command: String,
        /// The first surplus positional value.
        token: String,
    },

    /// Required options or positionals were not filled.
    #[error("Missing options for command: {command} - {}\n{help}", .missing.join(", "))]
    MissingOptions {
        /// The command name.
        command: String,
        /// Long names of the unfilled required specs, in declaration order.
        missing: Vec<String>,
        /// The generated help message.
        help: String,
    },

    /// Required items were not filled, but the help switch (`-h`/`--help`) was present.
    /// Carries the generated help message.
    #[error("{0}")]
    MissingOptionsHelp(String),

    /// The parser was declared with a conflicting or invalid registration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ParseError {
    /// Attach the command context to a matcher failure.
    pub(crate) fn from_match(
        error: MatchError,
        command: &str,
        help: impl FnOnce() -> String,
    ) -> Self {
        let command = command.to_string();

        match error {
            MatchError::UnexpectedOption(token) => ParseError::UnexpectedOption { command, token },
            MatchError::MissingOptionValue { short, long } => {
                ParseError::MissingOptionValue {
                    command,
                    short,
                    long,
                }
            }
            MatchError::UnknownAttribute(token) => ParseError::UnknownAttribute { command, token },
            MatchError::MissingOptions(missing) => ParseError::MissingOptions {
                command,
                missing,
                help: help(),
            },
            MatchError::HelpRequested => ParseError::MissingOptionsHelp(help()),
        }
    }

    /// The help message, for the kinds which carry one.
    pub fn help(&self) -> Option<&str> {
        match self {
            ParseError::MissingOptions { help, .. } | ParseError::MissingOptionsHelp(help) => {
                Some(help.as_str())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Quote;
    use crate::test::assert_contains;

    #[test]
    fn config_error_display() {
        let error = ConfigError::Duplicate {
            existing: "-a, --alpha".to_string(),
            rejected: "-a, --other".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Config error: '-a, --other' conflicts with the existing '-a, --alpha'."
        );
        assert_eq!(
            ParseError::from(error.clone()).to_string(),
            error.to_string()
        );
    }

    #[test]
    fn overlapping_display() {
        let error = ParseError::from(QuoteError::Unterminated(Quote::Double));
        assert_eq!(
            error.to_string(),
            "Parse error: double quote (\") is never closed."
        );
        assert_eq!(error.help(), None);
    }

    #[test]
    fn from_match_unexpected() {
        let error = ParseError::from_match(
            MatchError::UnexpectedOption("--nope".to_string()),
            "program",
            || unreachable!("help is not needed"),
        );
        assert_eq!(error.to_string(), "Command: program unexpected option --nope");
    }

    #[test]
    fn from_match_missing_value() {
        let error = ParseError::from_match(
            MatchError::MissingOptionValue {
                short: 'c',
                long: "config".to_string(),
            },
            "program",
            || unreachable!("help is not needed"),
        );
        assert_eq!(
            error.to_string(),
            "Command: program - value: c(config) is required!"
        );
    }

    #[test]
    fn from_match_unknown_attribute() {
        let error = ParseError::from_match(
            MatchError::UnknownAttribute("extra".to_string()),
            "program",
            || unreachable!("help is not needed"),
        );
        assert_eq!(
            error.to_string(),
            "Unknown attribute: \"extra\" for command: program"
        );
    }

    #[test]
    fn from_match_missing_options() {
        let error = ParseError::from_match(
            MatchError::MissingOptions(vec!["path".to_string(), "parameter".to_string()]),
            "program",
            || "the help".to_string(),
        );
        assert_contains!(
            error.to_string(),
            "Missing options for command: program - path, parameter\nthe help"
        );
        assert_eq!(error.help(), Some("the help"));
    }

    #[test]
    fn from_match_help() {
        let error = ParseError::from_match(MatchError::HelpRequested, "program", || {
            "the help".to_string()
        });
        assert_eq!(error, ParseError::MissingOptionsHelp("the help".to_string()));
        assert_eq!(error.to_string(), "the help");
    }
}

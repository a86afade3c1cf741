use std::env;
use terminal_size::{terminal_size, Width};

use crate::api::OptionParser;
use crate::parser::base::ParseError;
use crate::parser::interface::{ConsoleInterface, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

impl OptionParser {
    fn invoke(
        &mut self,
        tokens: &[&str],
        terminal_width: Option<usize>,
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<(), i32> {
        match self.parse_fragments(tokens) {
            Ok(()) => Ok(()),
            Err(ParseError::MissingOptionsHelp(_)) => {
                user_interface.print(self.printer(terminal_width).render());
                Err(0)
            }
            Err(error) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Parse of {tokens:?} failed: {error:?}.");
                }
                user_interface.print_error(error);
                Err(1)
            }
        }
    }

    /// Run the option parser against the input tokens, reporting to the console.
    ///
    /// Each token is one raw argument fragment (as the shell delivered it).
    /// On success, query the outcome with the accessors ([`OptionParser::get_option_value`], etc).
    ///
    /// If the parse fails, the error is printed to stderr and this returns with `Err(1)`.
    ///
    /// If required options are missing while the help switch (`-h` or `--help`) is present, the help message is printed to stdout and this returns with `Err(0)`.
    /// The help message is wrapped to the width of the terminal, when there is one.
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<(), i32> {
        let terminal_width = if let Some((Width(width), _)) = terminal_size() {
            Some(width as usize)
        } else {
            None
        };

        self.invoke(tokens, terminal_width, &ConsoleInterface::default())
    }

    /// Run the option parser against the Cli [`env::args`].
    ///
    /// If the parse fails, the error is printed to stderr and the program exits with error code `1` (via `std::process::exit`).
    ///
    /// If required options are missing while the help switch (`-h` or `--help`) is present, the help message is printed and the program exits with error code `0`.
    pub fn parse(&mut self) {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(()) => {}
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        };
    }
}

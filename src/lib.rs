//! `optparse` is a declarative option parser for command line tools.
//!
//! Declare the named options (`-v`/`--verbose`) and positional parameters of a command, parse the raw argument fragments, then query what was bound.
//! `optparse` prioritizes the following concerns:
//! * *Shell-like quoting*:
//! The argument fragments are rejoined and rescanned, so a quoted region (`'..'` or `".."`) is one token even when it arrived split across fragments.
//! A backslash escapes a quote or a space.
//! * *Required vs. optional*:
//! Both named options and positional parameters may be required.
//! A parse fails, listing every unfilled required item, when any of them are missing.
//! * *Values as strings*:
//! Bound values are handed back verbatim; converting them is left to the program.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/copy.rs")]
//! ```
//!
//! ```console
//! $ copy -h
//! Command: copy - Copy a file.
//! Usage: copy [options] "source" [target]
//!
//! Parameters:
//!     source           The file to copy.
//!     target           Where to copy it.
//!
//! Optional options:
//!     -h, --help       Show this help message.
//!     -m, --mode       Permission bits of the copy. (value required)
//!     -v, --verbose    Explain what is being done.
//!
//! $ copy -v "'my file.txt'" backup/
//! 'my file.txt' -> 'backup/' (mode 644)
//!
//! $ copy -m
//! Command: copy - value: m(mode) is required!
//! ```
//!
//! # Tokens
//! The raw fragments are joined with single spaces and scanned once, left to right (see [`tokens::tokenize`]).
//! * A space outside of a quoted region ends the current token.
//! * An opening quote ends the current token; the quoted region, markers included, becomes its own token.
//! * A backslash is always kept, but an odd run of backslashes disarms the quote or space which follows.
//! * Quote regions never nest: a quote of the other kind inside an open region is a [`QuoteError::Overlap`].
//!
//! ```
//! use optparse::tokens::tokenize;
//!
//! assert_eq!(
//!     tokenize(&["-m", "'hello", "world'", "a\\ b"]).unwrap(),
//!     vec!["-m", "'hello world'", "a\\ b"],
//! );
//! ```
//!
//! # Binding
//! Binding happens in two passes over the tokens.
//! 1. Option-shaped tokens (starting with `-`) are resolved against the named options.
//! `--name` looks up a long name, `-x..` looks up the short name `x`.
//! A value-required option consumes the next token, which must not itself be option-shaped.
//! 2. The remaining tokens are assigned to the positional parameters: the required ones first (in declaration order), then the optional ones.
//! Quoted positional values are unquoted; named option values are kept as written.
//!
//! Either pass stops on its first error (see [`ParseError`]).
//! After both passes, any unfilled required item fails the parse with [`ParseError::MissingOptions`].
//! When the help switch (`-h` or `--help`) is present, this becomes [`ParseError::MissingOptionsHelp`] instead, carrying the help message.
//!
//! ```
//! use optparse::{OptionParser, ParseError, Requirement};
//!
//! let mut parser = OptionParser::new("program", "")
//!     .add_option('h', "help", Requirement::Optional, None, "")
//!     .add_positional("path", Requirement::Required, None, "");
//!
//! let error = parser.parse_arguments("-h").unwrap_err();
//! assert_eq!(error, ParseError::MissingOptionsHelp(parser.help()));
//! ```
//!
//! ### Defaults
//! A declared default is reported by [`OptionParser::get_option_value`] and [`Binding::effective_value`] whenever its option or positional is not filled.
//! Defaults are never validated or converted.
//!
//! ### Duplicates
//! Registering two specs which share a short name or a long name is a [`ConfigError`].
//! With [`DuplicatePolicy::Reject`] (the default) the error is reported by [`OptionParser::validate`] and by every parse.
//! With [`DuplicatePolicy::Skip`] the later registration is dropped.
//!
//! ### Features
//! * `tracing_debug`: emit `tracing` debug events while tokenizing, binding and registering.
//! * `unit_test`: enables `OptionParser::test_bind`, for testing code which reads from an `OptionParser`.
#![deny(missing_docs)]
pub use optparse_builder::*;

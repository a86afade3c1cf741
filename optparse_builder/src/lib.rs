//! Builder module for `optparse`.
//! See [documentation root](https://docs.rs/optparse/latest/optparse/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
pub mod tokens;

pub use api::*;
pub use model::*;
pub use parser::{ConfigError, ParseError};
pub use tokens::{Quote, QuoteError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

use std::collections::HashMap;
use thiserror::Error;

use crate::api::{Binding, OptionSpec};
use crate::constant::*;
use crate::matcher::Registry;
use crate::tokens::{is_option, unquote};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Bindings of the specs matched during one parse, keyed by long name.
pub(crate) type Bindings = HashMap<String, Binding>;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MatchError {
    #[error("Option '{0}' does not exist.")]
    UnexpectedOption(String),

    #[error("Option '{long}' requires a value.")]
    MissingOptionValue { short: char, long: String },

    #[error("No more positional parameters to match '{0}' against.")]
    UnknownAttribute(String),

    #[error("Required parameters not provided: {}.", .0.join(", "))]
    MissingOptions(Vec<String>),

    #[error("Help requested.")]
    HelpRequested,
}

/// Assigns logical tokens to the specs of a [`Registry`].
///
/// Named options are resolved in a single left-to-right pass; whatever is left over is then assigned to the positional specs.
/// Required positionals are always served before optional ones.
pub(crate) struct Binder<'r> {
    registry: &'r Registry,
}

impl<'r> Binder<'r> {
    pub(crate) fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    pub(crate) fn bind(&self, tokens: &[String]) -> Result<Bindings, MatchError> {
        let help = tokens.iter().any(|token| is_help(token));

        #[cfg(feature = "tracing_debug")]
        {
            if help {
                debug!("Help switch found.");
            }
        }

        let mut still_required = self.registry.required_names();
        let mut bindings = Bindings::default();
        // 1. Named options, consuming their values as we go.
        let leftovers = self.bind_named(tokens, &mut bindings, &mut still_required)?;
        // 2. Positionals, from whatever remains.
        self.bind_positional(leftovers, &mut bindings, &mut still_required)?;

        if still_required.is_empty() {
            Ok(bindings)
        } else if help {
            Err(MatchError::HelpRequested)
        } else {
            Err(MatchError::MissingOptions(
                still_required.into_iter().map(str::to_string).collect(),
            ))
        }
    }

    fn bind_named<'t>(
        &self,
        tokens: &'t [String],
        bindings: &mut Bindings,
        still_required: &mut Vec<&'r str>,
    ) -> Result<Vec<&'t str>, MatchError> {
        let mut leftovers = Vec::default();
        let mut index = 0;

        while index < tokens.len() {
            let token = tokens[index].as_str();

            if !is_option(token) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Leaving '{token}' for the positionals.");
                }
                leftovers.push(unquote(token));
                index += 1;
                continue;
            }

            let spec = self
                .resolve(token)
                .ok_or_else(|| MatchError::UnexpectedOption(token.to_string()))?;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Resolved '{token}' to option '{}'.", spec.long());
            }

            let binding = bindings
                .entry(spec.long().to_string())
                .or_insert_with(|| Binding::unfilled(spec));
            binding.fill();

            if spec.takes_value() {
                match tokens.get(index + 1) {
                    Some(value) if !is_option(value) => {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Binding value '{value}' to option '{}'.", spec.long());
                        }
                        binding.set_value(value.as_str());
                        index += 1;
                    }
                    _ => {
                        return Err(MatchError::MissingOptionValue {
                            short: spec
                                .short()
                                .expect("internal error - named options always have a short name"),
                            long: spec.long().to_string(),
                        });
                    }
                }
            }

            if spec.is_required() {
                still_required.retain(|name| *name != spec.long());
            }

            index += 1;
        }

        Ok(leftovers)
    }

    fn bind_positional(
        &self,
        leftovers: Vec<&str>,
        bindings: &mut Bindings,
        still_required: &mut Vec<&'r str>,
    ) -> Result<(), MatchError> {
        let mut required = self.registry.required_positionals();
        let mut optional = self.registry.optional_positionals();

        for value in leftovers {
            let spec = required
                .next()
                .or_else(|| optional.next())
                .ok_or_else(|| MatchError::UnknownAttribute(value.to_string()))?;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Binding '{value}' to positional '{}'.", spec.long());
            }

            let mut binding = Binding::unfilled(spec);
            binding.fill();
            binding.set_value(value);
            bindings.insert(spec.long().to_string(), binding);

            if spec.is_required() {
                still_required.retain(|name| *name != spec.long());
            }
        }

        Ok(())
    }

    fn resolve(&self, token: &str) -> Option<&'r OptionSpec> {
        match token.strip_prefix("--") {
            Some(long) => self.registry.by_long(long),
            None => token
                .strip_prefix('-')
                .and_then(|rest| rest.chars().next())
                .and_then(|short| self.registry.by_short(short)),
        }
    }
}

fn is_help(token: &str) -> bool {
    match token.strip_prefix("--") {
        Some(name) => name == HELP_NAME,
        None => {
            let mut chars = token.chars();
            chars.next() == Some('-') && chars.next() == Some(HELP_SHORT) && chars.next().is_none()
        }
    }
}

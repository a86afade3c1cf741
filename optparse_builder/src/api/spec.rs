use std::cmp::Ordering;

use crate::model::{Requirement, ValueKind};

/// The immutable declaration of a named option or a positional (path-or-expression) parameter.
///
/// Identity is the pair (short name, long name): a registry never holds two specs sharing either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    short: Option<char>,
    long: String,
    requirement: Requirement,
    default_value: Option<String>,
    description: String,
    value_kind: ValueKind,
    position: Option<usize>,
}

impl OptionSpec {
    pub(crate) fn named(
        short: char,
        long: impl Into<String>,
        requirement: Requirement,
        default_value: Option<&str>,
        description: impl Into<String>,
        value_kind: ValueKind,
    ) -> Self {
        Self {
            short: Some(short),
            long: long.into(),
            requirement,
            default_value: default_value.map(str::to_string),
            description: description.into(),
            value_kind,
            position: None,
        }
    }

    pub(crate) fn positional(
        long: impl Into<String>,
        requirement: Requirement,
        default_value: Option<&str>,
        description: impl Into<String>,
        position: usize,
    ) -> Self {
        Self {
            short: None,
            long: long.into(),
            requirement,
            default_value: default_value.map(str::to_string),
            description: description.into(),
            value_kind: ValueKind::ValueRequired,
            position: Some(position),
        }
    }

    /// The single character name (`-x`); positional specs have none.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// The long name (`--xyz`), also the lookup key for every accessor.
    pub fn long(&self) -> &str {
        &self.long
    }

    /// Whether the spec must be filled by every parse.
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    /// Shorthand for `requirement() == Requirement::Required`.
    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }

    /// The value reported when the spec is not filled.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// The help description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Positional specs always report [`ValueKind::ValueRequired`].
    pub fn value_kind(&self) -> ValueKind {
        self.value_kind
    }

    /// Whether a named option consumes the following token.
    pub fn takes_value(&self) -> bool {
        self.value_kind == ValueKind::ValueRequired
    }

    /// The declaration order amongst the positional specs, or `None` for named options.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Whether the spec is filled by position rather than by name.
    pub fn is_positional(&self) -> bool {
        self.position.is_some()
    }

    /// Whether the two specs share a short name or a long name.
    pub(crate) fn conflicts_with(&self, other: &OptionSpec) -> bool {
        let short_clash = match (self.short, other.short) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };

        short_clash || self.long == other.long
    }

    /// Help display order: optional before required, then by short name, then by long name.
    pub(crate) fn display_cmp(&self, other: &OptionSpec) -> Ordering {
        self.requirement
            .cmp(&other.requirement)
            .then_with(|| self.short.cmp(&other.short))
            .then_with(|| self.long.cmp(&other.long))
    }
}

/// The runtime state of one spec during a parse: matched or not, and the raw value observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    name: String,
    filled: bool,
    value: String,
    default_value: Option<String>,
}

impl Binding {
    pub(crate) fn unfilled(spec: &OptionSpec) -> Self {
        Self {
            name: spec.long().to_string(),
            filled: false,
            value: String::default(),
            default_value: spec.default_value.clone(),
        }
    }

    pub(crate) fn fill(&mut self) {
        self.filled = true;
    }

    pub(crate) fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// The long name of the bound spec.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the spec was matched during the last parse.
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// The raw value exactly as bound, without any default fallback.
    /// Flags bind the empty string.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The bound value when filled, otherwise the spec's default.
    pub fn effective_value(&self) -> Option<&str> {
        if self.filled {
            Some(&self.value)
        } else {
            self.default_value.as_deref()
        }
    }
}

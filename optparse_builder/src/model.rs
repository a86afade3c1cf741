/// Whether a parse must fill an option/positional for it to succeed.
///
/// Ordered so that `Optional` sorts before `Required` (the help display order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Requirement {
    /// The parse succeeds without this option; its default applies.
    Optional,
    /// The parse fails with [`ParseError::MissingOptions`](crate::ParseError::MissingOptions) when this option is not filled.
    Required,
}

/// Whether a named option consumes the token which follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A flag: `-v` or `--verbose`.
    NoValue,
    /// An option with a value: `-o out.txt` or `--output out.txt`.
    ValueRequired,
}

/// What to do when a registration shares its short or long name with an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Record a [`ConfigError`](crate::ConfigError), reported by `validate` and every parse.
    #[default]
    Reject,
    /// Silently drop the later registration; the first one wins.
    Skip,
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

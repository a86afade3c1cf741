/// Tokens which request the help message, regardless of what the registry declares.
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_NAME: &str = "help";

/// Extra columns between the longest option name and the description column.
pub(crate) const NAME_MARGIN: usize = 4;
pub(crate) const MAIN_INDENT: usize = 4;

pub(crate) const VALUE_REQUIRED_NOTE: &str = "(value required)";

use crate::api::{Binding, OptionSpec};
use crate::matcher::{Binder, Bindings, Registry};
use crate::model::{DuplicatePolicy, Requirement, ValueKind};
use crate::parser::{ConfigError, ParseError, Printer};
use crate::tokens::{split_line, tokenize};

/// The option parser for one command.
///
/// Declare options and positional (path-or-expression) parameters with the fluent `add_*` methods, then parse.
/// Each parse starts from a fresh set of bindings; query them afterwards through the accessors.
///
/// Parsing takes `&mut self`, so a parser cannot be shared between concurrent parses.
/// Use one parser per thread (or per parse) if that is needed.
///
/// ### Example
/// ```
/// # use optparse_builder as optparse;
/// use optparse::{OptionParser, Requirement};
///
/// let mut parser = OptionParser::new("copy", "Copy a file.")
///     .add_option('v', "verbose", Requirement::Optional, Some("false"), "Explain what is being done")
///     .add_option_required_value('m', "mode", Requirement::Optional, Some("644"), "Permission bits")
///     .add_positional("source", Requirement::Required, None, "Source path")
///     .add_positional("target", Requirement::Optional, Some("."), "Target path");
///
/// parser.parse_arguments("-m 600 'my file.txt'").unwrap();
///
/// assert_eq!(parser.get_option_value("mode"), Some("600"));
/// assert_eq!(parser.get_option_value("source"), Some("my file.txt"));
/// assert_eq!(parser.get_option_value("target"), Some("."));
/// assert!(!parser.is_option_filled("verbose"));
/// ```
#[derive(Debug)]
pub struct OptionParser {
    command: String,
    description: String,
    registry: Registry,
    bindings: Bindings,
    deferred_error: Option<ConfigError>,
}

impl OptionParser {
    /// Create an option parser for the command `command`.
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
            registry: Registry::new(DuplicatePolicy::default()),
            bindings: Bindings::default(),
            deferred_error: None,
        }
    }

    /// Choose how conflicting registrations are handled.
    /// Applies to registrations made after this call.
    ///
    /// ### Example
    /// ```
    /// # use optparse_builder as optparse;
    /// use optparse::{DuplicatePolicy, OptionParser, Requirement};
    ///
    /// let parser = OptionParser::new("program", "")
    ///     .duplicate_policy(DuplicatePolicy::Skip)
    ///     .add_option('v', "verbose", Requirement::Optional, None, "First wins")
    ///     .add_option('v', "version", Requirement::Optional, None, "Silently dropped");
    ///
    /// assert!(parser.validate().is_ok());
    /// assert!(parser.spec("version").is_none());
    /// ```
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.registry.set_policy(policy);
        self
    }

    /// Add a flag: an option which takes no value.
    pub fn add_option(
        self,
        short: char,
        long: impl Into<String>,
        requirement: Requirement,
        default_value: Option<&str>,
        description: impl Into<String>,
    ) -> Self {
        self.add_option_kind(
            short,
            long,
            requirement,
            default_value,
            description,
            ValueKind::NoValue,
        )
    }

    /// Add an option which consumes the following token as its value.
    pub fn add_option_required_value(
        self,
        short: char,
        long: impl Into<String>,
        requirement: Requirement,
        default_value: Option<&str>,
        description: impl Into<String>,
    ) -> Self {
        self.add_option_kind(
            short,
            long,
            requirement,
            default_value,
            description,
            ValueKind::ValueRequired,
        )
    }

    /// Add an option of the given [`ValueKind`].
    ///
    /// The option is referenced on the command line as `-short` or `--long`.
    pub fn add_option_kind(
        mut self,
        short: char,
        long: impl Into<String>,
        requirement: Requirement,
        default_value: Option<&str>,
        description: impl Into<String>,
        value_kind: ValueKind,
    ) -> Self {
        let long = long.into();

        if !valid_short(short) {
            self.defer(ConfigError::InvalidName(short.to_string()));
        } else if !valid_long(&long) {
            self.defer(ConfigError::InvalidName(long));
        } else {
            let spec = OptionSpec::named(
                short,
                long,
                requirement,
                default_value,
                description,
                value_kind,
            );
            self.register(spec);
        }

        self
    }

    /// Add a positional (path-or-expression) parameter.
    ///
    /// Positional values are assigned in declaration order, but every required positional is served before any optional one.
    ///
    /// ### Example
    /// ```
    /// # use optparse_builder as optparse;
    /// use optparse::{OptionParser, Requirement};
    ///
    /// let mut parser = OptionParser::new("program", "")
    ///     .add_positional("extra", Requirement::Optional, Some("none"), "")
    ///     .add_positional("path", Requirement::Required, None, "");
    ///
    /// parser.parse_arguments("a").unwrap();
    /// assert_eq!(parser.get_option_value("path"), Some("a"));
    /// assert_eq!(parser.get_option_value("extra"), Some("none"));
    ///
    /// parser.parse_arguments("a b").unwrap();
    /// assert_eq!(parser.get_option_value("extra"), Some("b"));
    /// ```
    pub fn add_positional(
        mut self,
        long: impl Into<String>,
        requirement: Requirement,
        default_value: Option<&str>,
        description: impl Into<String>,
    ) -> Self {
        let long = long.into();

        if valid_long(&long) {
            let position = self.registry.positional_count();
            let spec =
                OptionSpec::positional(long, requirement, default_value, description, position);
            self.register(spec);
        } else {
            self.defer(ConfigError::InvalidName(long));
        }

        self
    }

    fn register(&mut self, spec: OptionSpec) {
        if let Err(error) = self.registry.insert(spec) {
            self.defer(error);
        }
    }

    fn defer(&mut self, error: ConfigError) {
        // Only the first configuration mistake is reported.
        if self.deferred_error.is_none() {
            self.deferred_error.replace(error);
        }
    }

    /// Check the registrations made so far.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.deferred_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    /// Parse a raw argument line.
    ///
    /// The line is split on spaces (dropping empty pieces) and then tokenized, so quoted values may contain spaces.
    pub fn parse_arguments(&mut self, arguments: &str) -> Result<(), ParseError> {
        self.parse_fragments(split_line(arguments).as_slice())
    }

    /// Parse a pre-split argument sequence, such as `std::env::args().skip(1)`.
    ///
    /// Fragments are rejoined with single spaces before tokenizing, so quoting may span fragments.
    /// On error the bindings are left empty.
    pub fn parse_fragments<S: AsRef<str>>(&mut self, fragments: &[S]) -> Result<(), ParseError> {
        self.bindings.clear();
        self.validate()?;
        let tokens = tokenize(fragments)?;
        let bindings = Binder::new(&self.registry)
            .bind(&tokens)
            .map_err(|error| ParseError::from_match(error, &self.command, || self.help()))?;
        self.bindings = bindings;
        Ok(())
    }

    /// Drop the bindings of the previous parse.
    pub fn reset(&mut self) {
        self.bindings.clear();
    }

    /// The binding of an option or positional filled during the last parse, by long name (`name` or `--name`).
    /// Unfilled and unknown names give `None`.
    pub fn get_option(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(long_name(name))
    }

    /// The effective value of an option or positional, by long name (`name` or `--name`): the bound value if filled, otherwise its default.
    /// Unknown names give `None`.
    pub fn get_option_value(&self, name: &str) -> Option<&str> {
        let name = long_name(name);

        match self.bindings.get(name) {
            Some(binding) => binding.effective_value(),
            None => self
                .registry
                .get(name)
                .and_then(OptionSpec::default_value),
        }
    }

    /// Whether an option or positional was filled during the last parse, by long name (`name` or `--name`).
    pub fn is_option_filled(&self, name: &str) -> bool {
        self.bindings
            .get(long_name(name))
            .map(Binding::is_filled)
            .unwrap_or(false)
    }

    /// The declaration of an option or positional, by long name (`name` or `--name`).
    pub fn spec(&self, name: &str) -> Option<&OptionSpec> {
        self.registry.get(long_name(name))
    }

    /// Long names of every required option and positional, in declaration order.
    pub fn required_parameters(&self) -> Vec<&str> {
        self.registry.required_names()
    }

    /// The command name.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The generated help message.
    pub fn help(&self) -> String {
        self.printer(None).render()
    }

    pub(crate) fn printer(&self, terminal_width: Option<usize>) -> Printer<'_> {
        Printer::new(
            &self.command,
            &self.description,
            &self.registry,
            terminal_width,
        )
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Bind a value without parsing, for testing code which reads from an [`OptionParser`].
    ///
    /// ### Example
    /// ```
    /// # use optparse_builder as optparse;
    /// use optparse::{OptionParser, Requirement};
    ///
    /// // Function under test.
    /// fn describe(parser: &OptionParser) -> String {
    ///     format!("mode={}", parser.get_option_value("mode").unwrap_or("?"))
    /// }
    ///
    /// let mut parser = OptionParser::new("program", "")
    ///     .add_option_required_value('m', "mode", Requirement::Optional, None, "");
    /// parser.test_bind("mode", "fast").unwrap();
    /// assert_eq!(describe(&parser), "mode=fast");
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn test_bind(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let spec = self
            .registry
            .get(name)
            .ok_or_else(|| ConfigError::InvalidName(name.to_string()))?;
        let mut binding = Binding::unfilled(spec);
        binding.fill();
        binding.set_value(value);
        self.bindings.insert(name.to_string(), binding);
        Ok(())
    }
}

// Accessors take the long name with or without its `--` prefix.
fn long_name(name: &str) -> &str {
    name.strip_prefix("--").unwrap_or(name)
}

fn valid_short(short: char) -> bool {
    short != '-' && !short.is_whitespace() && short != '\'' && short != '"'
}

fn valid_long(long: &str) -> bool {
    !long.is_empty()
        && !long.starts_with('-')
        && !long.contains(|c: char| c.is_whitespace() || c == '\'' || c == '"')
}

use crate::api::OptionSpec;
use crate::model::{DuplicatePolicy, Requirement};
use crate::parser::ConfigError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The declared specs of one command.
///
/// Holds two distinct orderings: declaration order (which drives positional assignment), and the display order used by help.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    specs: Vec<OptionSpec>,
    required_positionals: Vec<usize>,
    optional_positionals: Vec<usize>,
    policy: DuplicatePolicy,
}

impl Registry {
    pub(crate) fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub(crate) fn set_policy(&mut self, policy: DuplicatePolicy) {
        self.policy = policy;
    }

    /// The number of positional specs declared so far, which is also the next position.
    pub(crate) fn positional_count(&self) -> usize {
        self.required_positionals.len() + self.optional_positionals.len()
    }

    /// Register a spec.
    /// Returns `Ok(false)` when the spec was skipped under [`DuplicatePolicy::Skip`].
    pub(crate) fn insert(&mut self, spec: OptionSpec) -> Result<bool, ConfigError> {
        if let Some(existing) = self.specs.iter().find(|s| s.conflicts_with(&spec)) {
            return match self.policy {
                DuplicatePolicy::Reject => Err(ConfigError::Duplicate {
                    existing: describe(existing),
                    rejected: describe(&spec),
                }),
                DuplicatePolicy::Skip => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Skipping '{}': conflicts with '{}'.", spec.long(), existing.long());
                    }
                    Ok(false)
                }
            };
        }

        if spec.is_positional() {
            let index = self.specs.len();
            match spec.requirement() {
                Requirement::Required => self.required_positionals.push(index),
                Requirement::Optional => self.optional_positionals.push(index),
            }
        }

        self.specs.push(spec);
        Ok(true)
    }

    /// All specs, in declaration order.
    pub(crate) fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    /// Find a spec (named or positional) by its long name.
    pub(crate) fn get(&self, long: &str) -> Option<&OptionSpec> {
        self.specs.iter().find(|s| s.long() == long)
    }

    /// Find a named option by its long name.
    pub(crate) fn by_long(&self, long: &str) -> Option<&OptionSpec> {
        self.named().find(|s| s.long() == long)
    }

    /// Find a named option by its short name.
    pub(crate) fn by_short(&self, short: char) -> Option<&OptionSpec> {
        self.named().find(|s| s.short() == Some(short))
    }

    /// Named options, in declaration order.
    pub(crate) fn named(&self) -> impl Iterator<Item = &OptionSpec> {
        self.specs.iter().filter(|s| !s.is_positional())
    }

    pub(crate) fn required_positionals(&self) -> impl Iterator<Item = &OptionSpec> {
        self.required_positionals.iter().map(move |i| &self.specs[*i])
    }

    pub(crate) fn optional_positionals(&self) -> impl Iterator<Item = &OptionSpec> {
        self.optional_positionals.iter().map(move |i| &self.specs[*i])
    }

    /// Long names of every required spec, in declaration order.
    pub(crate) fn required_names(&self) -> Vec<&str> {
        self.specs
            .iter()
            .filter(|s| s.is_required())
            .map(OptionSpec::long)
            .collect()
    }

    /// Named options, in help display order.
    pub(crate) fn display_order(&self) -> Vec<&OptionSpec> {
        let mut named: Vec<&OptionSpec> = self.named().collect();
        named.sort_by(|a, b| a.display_cmp(b));
        named
    }

    /// Length of the longest named option's long name.
    pub(crate) fn longest_name(&self) -> usize {
        self.named().map(|s| s.long().len()).max().unwrap_or(0)
    }
}

fn describe(spec: &OptionSpec) -> String {
    match spec.short() {
        Some(short) => format!("-{short}, --{}", spec.long()),
        None => spec.long().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ValueKind;
    use rstest::rstest;

    fn named(short: char, long: &str, requirement: Requirement) -> OptionSpec {
        OptionSpec::named(short, long, requirement, None, "", ValueKind::NoValue)
    }

    fn positional(long: &str, requirement: Requirement, position: usize) -> OptionSpec {
        OptionSpec::positional(long, requirement, None, "", position)
    }

    #[test]
    fn registry_empty() {
        let registry = Registry::default();
        assert!(registry.specs().is_empty());
        assert_eq!(registry.positional_count(), 0);
        assert!(registry.required_names().is_empty());
        assert_eq!(registry.longest_name(), 0);
    }

    #[test]
    fn registry_lookup() {
        // Execute
        let mut registry = Registry::default();
        assert!(registry.insert(named('v', "verbose", Requirement::Optional)).unwrap());
        assert!(registry.insert(positional("path", Requirement::Required, 0)).unwrap());

        // Verify
        assert_eq!(registry.by_long("verbose").unwrap().short(), Some('v'));
        assert_eq!(registry.by_short('v').unwrap().long(), "verbose");
        assert_eq!(registry.by_long("path"), None);
        assert_eq!(registry.get("path").unwrap().position(), Some(0));
        assert_eq!(registry.by_short('x'), None);
        assert_eq!(registry.get("missing"), None);
    }

    #[test]
    fn registry_positional_orders() {
        // Execute
        let mut registry = Registry::default();
        registry.insert(positional("opt1", Requirement::Optional, 0)).unwrap();
        registry.insert(positional("req1", Requirement::Required, 1)).unwrap();
        registry.insert(named('f', "flag", Requirement::Required)).unwrap();
        registry.insert(positional("opt2", Requirement::Optional, 2)).unwrap();
        registry.insert(positional("req2", Requirement::Required, 3)).unwrap();

        // Verify
        let required: Vec<&str> = registry.required_positionals().map(|s| s.long()).collect();
        let optional: Vec<&str> = registry.optional_positionals().map(|s| s.long()).collect();
        assert_eq!(required, vec!["req1", "req2"]);
        assert_eq!(optional, vec!["opt1", "opt2"]);
        assert_eq!(registry.positional_count(), 4);
        assert_eq!(registry.required_names(), vec!["req1", "flag", "req2"]);
    }

    #[rstest]
    #[case(named('a', "alpha", Requirement::Optional), named('a', "other", Requirement::Optional))]
    #[case(named('a', "alpha", Requirement::Optional), named('b', "alpha", Requirement::Required))]
    #[case(named('a', "alpha", Requirement::Optional), positional("alpha", Requirement::Optional, 0))]
    #[case(positional("alpha", Requirement::Required, 0), positional("alpha", Requirement::Optional, 1))]
    fn registry_reject(#[case] first: OptionSpec, #[case] second: OptionSpec) {
        // Setup
        let mut registry = Registry::new(DuplicatePolicy::Reject);
        registry.insert(first).unwrap();

        // Execute
        let error = registry.insert(second).unwrap_err();

        // Verify
        assert_matches!(error, ConfigError::Duplicate { .. });
        assert_eq!(registry.specs().len(), 1);
    }

    #[rstest]
    #[case(named('a', "alpha", Requirement::Optional), named('a', "other", Requirement::Required))]
    #[case(positional("alpha", Requirement::Optional, 0), positional("alpha", Requirement::Required, 1))]
    fn registry_skip(#[case] first: OptionSpec, #[case] second: OptionSpec) {
        // Setup
        let mut registry = Registry::new(DuplicatePolicy::Skip);
        registry.insert(first.clone()).unwrap();

        // Verify
        assert!(!registry.insert(second).unwrap());
        assert_eq!(registry.specs(), &[first]);
        assert!(registry.required_names().is_empty());
        assert_eq!(registry.required_positionals().count(), 0);
    }

    #[test]
    fn registry_display_order() {
        // Execute
        let mut registry = Registry::default();
        registry.insert(named('p', "parameter", Requirement::Required)).unwrap();
        registry.insert(positional("path", Requirement::Required, 0)).unwrap();
        registry.insert(named('h', "help", Requirement::Optional)).unwrap();
        registry.insert(named('f', "parameter2", Requirement::Optional)).unwrap();

        // Verify
        let names: Vec<&str> = registry.display_order().iter().map(|s| s.long()).collect();
        assert_eq!(names, vec!["parameter2", "help", "parameter"]);
        assert_eq!(registry.longest_name(), "parameter2".len());
    }
}

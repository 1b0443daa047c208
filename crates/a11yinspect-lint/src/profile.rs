//! Rule levels and the named configuration profiles derived from them.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;
use strum::EnumIter;

use crate::ConfigError;
use crate::Rule;
use crate::Variant;

/// The level a rule runs at.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RuleLevel {
    /// The rule does not run.
    Off,
    /// The rule's diagnostics are warnings.
    Warn,
    /// The rule's diagnostics are errors.
    Error,
}

/// A mapping of registered rule name to level.
pub type RuleLevels = IndexMap<String, RuleLevel>;

/// A named preset of rule levels.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Profile {
    /// Advisory rules warn and every other rule errors.
    #[default]
    Recommended,
    /// Every rule errors.
    Strict,
    /// Only the blocking rules run.
    ErrorsOnly,
    /// Only the advisory rules run, as warnings.
    WarningsOnly,
}

impl Profile {
    /// Parses a profile from its name.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Self::from_str(name).map_err(|_| ConfigError::UnknownProfile(name.to_string()))
    }

    /// Gets the level of a registered rule name under this profile.
    ///
    /// Advisory rules are the ones whose name ends in `-warning`.
    pub fn level(&self, name: &str) -> RuleLevel {
        let advisory = name.ends_with(Variant::Warning.suffix());
        match (self, advisory) {
            (Self::Recommended, true) => RuleLevel::Warn,
            (Self::Recommended, false) => RuleLevel::Error,
            (Self::Strict, _) => RuleLevel::Error,
            (Self::ErrorsOnly, true) => RuleLevel::Off,
            (Self::ErrorsOnly, false) => RuleLevel::Error,
            (Self::WarningsOnly, true) => RuleLevel::Warn,
            (Self::WarningsOnly, false) => RuleLevel::Off,
        }
    }

    /// Derives the level of every registered rule name.
    ///
    /// The result has exactly one entry per registered name, including the
    /// names the profile turns off.
    pub fn levels(&self, rules: &[Box<dyn Rule>]) -> RuleLevels {
        registered_names(rules)
            .map(|name| {
                let level = self.level(&name);
                (name, level)
            })
            .collect()
    }

    /// Derives the profile in the shape a host linter consumes: every
    /// registered name prefixed with `<prefix>/`.
    pub fn plugin_config(&self, prefix: &str, rules: &[Box<dyn Rule>]) -> RuleLevels {
        self.levels(rules)
            .into_iter()
            .map(|(name, level)| (format!("{prefix}/{name}"), level))
            .collect()
    }
}

/// Iterates every registered rule name, family by family.
pub fn registered_names(rules: &[Box<dyn Rule>]) -> impl Iterator<Item = String> + '_ {
    rules
        .iter()
        .flat_map(|rule| rule.variants().iter().map(move |v| v.name(rule.id())))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Config;
    use crate::rules;

    #[test]
    fn strict_errors_everything() {
        let rules = rules(&Config::default());
        let levels = Profile::Strict.levels(&rules);
        assert_eq!(levels.len(), registered_names(&rules).count());
        assert!(levels.values().all(|l| *l == RuleLevel::Error));
    }

    #[test]
    fn recommended_splits_by_suffix() {
        let rules = rules(&Config::default());
        let levels = Profile::Recommended.levels(&rules);
        assert_eq!(levels["img-element"], RuleLevel::Error);
        assert_eq!(levels["img-element-error"], RuleLevel::Error);
        assert_eq!(levels["img-element-warning"], RuleLevel::Warn);
        assert_eq!(levels["label-element-warning"], RuleLevel::Warn);
        assert_eq!(levels["iframe-element-warning"], RuleLevel::Warn);
        assert!(!levels.contains_key("iframe-element"));
        for (name, level) in &levels {
            assert_eq!(
                *level == RuleLevel::Warn,
                name.ends_with("-warning"),
                "unexpected level for `{name}`"
            );
        }
    }

    #[test]
    fn filtered_profiles() {
        assert_eq!(Profile::ErrorsOnly.level("skip-link-warning"), RuleLevel::Off);
        assert_eq!(Profile::ErrorsOnly.level("lang-element-error"), RuleLevel::Error);
        assert_eq!(Profile::WarningsOnly.level("skip-link-warning"), RuleLevel::Warn);
        assert_eq!(Profile::WarningsOnly.level("a-element"), RuleLevel::Off);
    }

    #[test]
    fn plugin_config_prefixes_names() {
        let rules = rules(&Config::default());
        let config = Profile::Strict.plugin_config("a11yinspect", &rules);
        assert_eq!(config["a11yinspect/duplicate-id-error"], RuleLevel::Error);
        assert!(config.keys().all(|k| k.starts_with("a11yinspect/")));
    }

    #[test]
    fn parses_profile_names() {
        assert_eq!(
            Profile::from_name("errors-only").expect("should parse"),
            Profile::ErrorsOnly
        );
        assert!(matches!(
            Profile::from_name("lenient"),
            Err(ConfigError::UnknownProfile(name)) if name == "lenient"
        ));
        assert_eq!(Profile::WarningsOnly.to_string(), "warnings-only");
    }
}

//! Implementation of the configuration module.

use std::path::Path;

use a11yinspect_lint::Profile;
use a11yinspect_lint::RuleLevels;
use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use crate::diagnostics::Mode;

/// Represents the configuration for the a11yinspect CLI tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct Config {
    /// Configuration for the `check` command.
    pub check: CheckConfig,
    /// The rule thresholds.
    pub lint: a11yinspect_lint::Config,
    /// Common configuration options for all commands.
    pub common: CommonConfig,
}

/// Represents shared configuration options for a11yinspect commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct CommonConfig {
    /// Disables color output.
    pub no_color: bool,
    /// The report mode.
    pub report_mode: Mode,
}

/// Represents the configuration for the a11yinspect `check` command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct CheckConfig {
    /// The profile the rule levels are derived from.
    pub profile: Profile,
    /// Registered rule names to except from running.
    pub except: Vec<String>,
    /// Causes the command to fail if any warnings are reported.
    pub deny_warnings: bool,
    /// Levels that override the ones derived from the profile.
    pub rules: RuleLevels,
}

impl Config {
    /// Reads a configuration file from the specified path.
    pub fn read_config(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).with_context(|| {
            format!(
                "failed to read config file `{path}`",
                path = path.display()
            )
        })?;
        toml::from_str(&text).with_context(|| {
            format!(
                "failed to parse config file `{path}`",
                path = path.display()
            )
        })
    }

    /// Reads the configuration file at the given path, if any.
    ///
    /// Without a path the default configuration is used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read_config(path),
            None => Ok(Self::default()),
        }
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use a11yinspect_lint::RuleLevel;
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn reads_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[check]
profile = "strict"
except = ["skip-link"]

[check.rules]
"img-element-warning" = "off"

[lint]
max_title_length = 80

[common]
report_mode = "one-line"
"#,
        )
        .unwrap();

        let config = Config::read_config(file.path()).unwrap();
        assert_eq!(config.check.profile, Profile::Strict);
        assert_eq!(config.check.except, ["skip-link"]);
        assert_eq!(config.check.rules["img-element-warning"], RuleLevel::Off);
        assert!(!config.check.deny_warnings);
        assert_eq!(config.lint.max_title_length, 80);
        assert_eq!(config.lint.max_alt_text_length, 150);
        assert_eq!(config.common.report_mode, Mode::OneLine);
    }

    #[test]
    fn rejects_unknown_fields() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[check]\nshellcheck = true\n").unwrap();
        assert!(Config::read_config(file.path()).is_err());
    }

    #[test]
    fn default_round_trips_through_toml() {
        let text = Config::default().to_toml().unwrap();
        let config: Config = toml::from_str(&text).unwrap();
        assert_eq!(config, Config::default());
    }
}

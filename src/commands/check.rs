//! Implementation of the `check` subcommand.

use std::path::Path;
use std::path::PathBuf;

use a11yinspect_ast::Diagnostic;
use a11yinspect_ast::Document;
use a11yinspect_lint::Linter;
use a11yinspect_lint::Profile;
use a11yinspect_lint::Rule;
use a11yinspect_lint::RuleLevel;
use a11yinspect_lint::RuleLevels;
use a11yinspect_lint::rules;
use clap::Parser;
use clap::builder::PossibleValuesParser;
use strum::IntoEnumIterator;
use tracing::info;

use super::explain::ALL_RULE_NAMES;
use crate::config::Config;
use crate::diagnostics::DiagnosticCounts;
use crate::diagnostics::Mode;
use crate::diagnostics::emit_diagnostics;

/// Arguments for the `check` subcommand.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct CheckArgs {
    /// The serialized trees to check.
    #[clap(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// The profile the rule levels are derived from.
    ///
    /// Defaults to the profile of the config file, which defaults to
    /// `recommended`.
    #[arg(long, value_name = "PROFILE",
        value_parser = PossibleValuesParser::new(Profile::iter().map(|p| p.to_string())),
    )]
    pub profile: Option<String>,

    /// Excepts (ignores) a registered rule.
    ///
    /// Repeat the flag multiple times to except multiple rules. This is
    /// additive with exceptions found in config files.
    #[clap(short, long, value_name = "RULE",
        value_parser = PossibleValuesParser::new(ALL_RULE_NAMES.iter()),
        ignore_case = true,
        action = clap::ArgAction::Append,
        num_args = 1,
        hide_possible_values = true,
    )]
    pub except: Vec<String>,

    /// Causes the command to fail if warnings were reported.
    #[clap(long)]
    pub deny_warnings: bool,

    /// Disables color output.
    #[arg(long)]
    pub no_color: bool,

    /// The report mode.
    #[arg(short = 'm', long, value_name = "MODE")]
    pub report_mode: Option<Mode>,
}

impl CheckArgs {
    /// Applies the configuration from the given config file to the command line
    /// arguments.
    pub fn apply(mut self, config: &Config) -> Self {
        self.except = self
            .except
            .into_iter()
            .chain(config.check.except.iter().cloned())
            .collect();
        self.deny_warnings = self.deny_warnings || config.check.deny_warnings;
        self.no_color = self.no_color || config.common.no_color;
        if self.report_mode.is_none() {
            self.report_mode = Some(config.common.report_mode);
        }
        if self.profile.is_none() {
            self.profile = Some(config.check.profile.to_string());
        }

        self
    }
}

/// Derives the levels the rules run at.
///
/// The profile's levels are overridden by the config file's levels, and
/// excepted rules are turned off.
pub fn rule_levels(
    profile: Profile,
    overrides: &RuleLevels,
    except: &[String],
    rules: &[Box<dyn Rule>],
) -> RuleLevels {
    let mut levels = profile.levels(rules);
    for (name, level) in overrides {
        levels.insert(name.clone(), *level);
    }

    for name in except {
        levels.insert(name.to_lowercase(), RuleLevel::Off);
    }

    levels
}

/// Loads and lints a single serialized tree.
pub fn lint_file(linter: &Linter, path: &Path) -> anyhow::Result<(Document, Vec<Diagnostic>)> {
    info!(path = %path.display(), "checking document");
    let document = Document::load(path)?;
    let diagnostics = linter.lint(&document);
    Ok((document, diagnostics))
}

/// Checks the given files, emitting their diagnostics.
///
/// Returns the counts of the emitted diagnostics.
pub fn check_files(args: &CheckArgs, config: &Config) -> anyhow::Result<DiagnosticCounts> {
    let profile = match &args.profile {
        Some(name) => Profile::from_name(name)?,
        None => config.check.profile,
    };

    let rules = rules(&config.lint);
    let levels = rule_levels(profile, &config.check.rules, &args.except, &rules);
    let linter = Linter::new(rules).with_levels(levels);

    let mut counts = DiagnosticCounts::default();
    for path in &args.files {
        let (document, diagnostics) = lint_file(&linter, path)?;
        for diagnostic in &diagnostics {
            counts.add(diagnostic);
        }

        emit_diagnostics(
            &document,
            &diagnostics,
            args.report_mode.unwrap_or_default(),
            args.no_color,
        )?;
    }

    Ok(counts)
}

/// Runs the `check` command.
pub fn check(args: CheckArgs, config: Config) -> anyhow::Result<()> {
    let args = args.apply(&config);
    let counts = check_files(&args, &config)?;

    if let Some(e) = counts.verify_no_errors() {
        return Err(e);
    }

    if args.deny_warnings
        && let Some(e) = counts.verify_no_warnings(true)
    {
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use a11yinspect_lint::Config as LintConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn config_is_additive() {
        let mut config = Config::default();
        config.check.except = vec!["skip-link-warning".to_string()];
        config.check.deny_warnings = true;
        config.check.profile = Profile::Strict;
        config.common.report_mode = Mode::OneLine;

        let args = CheckArgs {
            files: vec![PathBuf::from("page.json")],
            profile: Some("errors-only".to_string()),
            except: vec!["img-element".to_string()],
            deny_warnings: false,
            no_color: true,
            report_mode: None,
        }
        .apply(&config);

        assert_eq!(args.except, ["img-element", "skip-link-warning"]);
        assert!(args.deny_warnings);
        assert!(args.no_color);
        assert_eq!(args.report_mode, Some(Mode::OneLine));
        assert_eq!(args.profile.as_deref(), Some("errors-only"));
    }

    #[test]
    fn except_wins_over_overrides() {
        let rules = rules(&LintConfig::default());
        let mut overrides = RuleLevels::new();
        overrides.insert("img-element-warning".to_string(), RuleLevel::Error);
        overrides.insert("a-element".to_string(), RuleLevel::Warn);

        let levels = rule_levels(
            Profile::Recommended,
            &overrides,
            &["A-Element".to_string()],
            &rules,
        );
        assert_eq!(levels["img-element-warning"], RuleLevel::Error);
        assert_eq!(levels["img-element"], RuleLevel::Error);
        assert_eq!(levels["a-element"], RuleLevel::Off);
        assert_eq!(levels["skip-link-warning"], RuleLevel::Warn);
    }
}

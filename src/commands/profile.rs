//! Implementation of the `profile` subcommand.

use a11yinspect_lint::Config;
use a11yinspect_lint::Profile;
use a11yinspect_lint::rules;
use anyhow::Context;
use clap::Parser;
use clap::builder::PossibleValuesParser;
use strum::IntoEnumIterator;

/// Arguments for the `profile` subcommand.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// The name of the profile.
    #[arg(value_parser = PossibleValuesParser::new(Profile::iter().map(|p| p.to_string())))]
    pub name: String,

    /// Prefixes every rule name with `<PREFIX>/`, the shape a host linter
    /// consumes its plugin rules in.
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,
}

/// Renders the rule levels of a profile as JSON.
pub fn render(args: &Args) -> anyhow::Result<String> {
    let profile = Profile::from_name(&args.name)?;
    let rules = rules(&Config::default());
    let levels = match &args.prefix {
        Some(prefix) => profile.plugin_config(prefix, &rules),
        None => profile.levels(&rules),
    };

    serde_json::to_string_pretty(&levels).context("failed to serialize profile")
}

/// Runs the `profile` command.
pub fn profile(args: Args) -> anyhow::Result<()> {
    println!("{}", render(&args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use a11yinspect_lint::RuleLevels;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_prefixed_levels() {
        let json = render(&Args {
            name: "errors-only".to_string(),
            prefix: Some("a11yinspect".to_string()),
        })
        .unwrap();
        let levels: RuleLevels = serde_json::from_str(&json).unwrap();
        assert_eq!(
            levels["a11yinspect/img-element-warning"].to_string(),
            "off"
        );
        assert_eq!(levels["a11yinspect/img-element"].to_string(), "error");
    }

    #[test]
    fn renders_plain_levels() {
        let json = render(&Args {
            name: "recommended".to_string(),
            prefix: None,
        })
        .unwrap();
        assert!(json.contains(r#""skip-link-warning": "warn""#));
    }

    #[test]
    fn unknown_profiles_fail() {
        let err = render(&Args {
            name: "lenient".to_string(),
            prefix: None,
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "unknown profile `lenient`");
    }
}

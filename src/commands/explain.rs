//! Implementation of the `explain` subcommand.

use std::sync::LazyLock;

use a11yinspect_lint::Config;
use a11yinspect_lint::Rule;
use a11yinspect_lint::registered_names;
use a11yinspect_lint::rules;
use clap::Parser;
use colored::Colorize;

/// Every registered rule name.
pub static ALL_RULE_NAMES: LazyLock<Vec<String>> =
    LazyLock::new(|| registered_names(&rules(&Config::default())).collect());

/// Arguments for the `explain` subcommand.
#[derive(Parser, Debug)]
#[command(author, version, about, after_help = list_all_rules())]
pub struct Args {
    /// The name of the rule to explain.
    ///
    /// Either a rule family or one of its registered variants (for example
    /// `img-element` or `img-element-warning`).
    #[arg(required = true)]
    pub rule_name: String,
}

/// Lists every registered rule name.
pub fn list_all_rules() -> String {
    let mut result = "Available rules:".to_owned();
    for name in ALL_RULE_NAMES.iter() {
        result.push_str(&format!("\n  - {name}"));
    }
    result
}

/// Finds the rule family a name refers to.
fn find_rule<'a>(rules: &'a [Box<dyn Rule>], name: &str) -> Option<&'a dyn Rule> {
    let name = name.to_lowercase();
    rules
        .iter()
        .find(|rule| {
            rule.id() == name
                || rule
                    .variants()
                    .iter()
                    .any(|variant| variant.name(rule.id()) == name)
        })
        .map(|rule| rule.as_ref())
}

/// Renders the explanation of a rule family.
pub fn pretty_print_rule(rule: &dyn Rule) -> String {
    let mut result = format!("{}", rule.id().bold().underline());
    result = format!("{}\n{}", result, rule.description());
    result = format!("{}\n{}", result, format!("{}", rule.tags()).yellow());
    result = format!("{}\n\n{}", result, rule.explanation());

    let names = rule
        .variants()
        .iter()
        .map(|v| v.name(rule.id()))
        .collect::<Vec<_>>();
    result = format!("{}\n\n{} {}", result, "Registered as:".bold(), names.join(", "));

    result = format!("{}\n{}", result, "Messages:".bold());
    for message in rule.messages() {
        result = format!("{}\n  - {}", result, message.key());
    }

    if !rule.related_rules().is_empty() {
        result = format!(
            "{}\n{} {}",
            result,
            "Related rules:".bold(),
            rule.related_rules().join(", ")
        );
    }

    match rule.url() {
        Some(url) => format!("{}\n{}", result, url.underline().blue()),
        None => result,
    }
}

/// Runs the `explain` command.
pub fn explain(args: Args) -> anyhow::Result<()> {
    let rules = rules(&Config::default());
    match find_rule(&rules, &args.rule_name) {
        Some(rule) => {
            println!("{}", pretty_print_rule(rule));
        }
        None => {
            println!("{}", list_all_rules());
            anyhow::bail!("no rule found with the name `{}`", args.rule_name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_rules_by_any_registered_name() {
        let rules = rules(&Config::default());
        assert_eq!(
            find_rule(&rules, "img-element").map(|r| r.id()),
            Some("img-element")
        );
        assert_eq!(
            find_rule(&rules, "IMG-ELEMENT-WARNING").map(|r| r.id()),
            Some("img-element")
        );
        assert_eq!(
            find_rule(&rules, "skip-link-warning").map(|r| r.id()),
            Some("skip-link")
        );
        assert_eq!(
            find_rule(&rules, "label-element-warning").map(|r| r.id()),
            Some("label-element")
        );
        assert!(find_rule(&rules, "skip-link-error").is_none());
    }

    #[test]
    fn unknown_rules_fail() {
        let err = explain(Args {
            rule_name: "no-such-rule".to_string(),
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "no rule found with the name `no-such-rule`");
    }

    #[test]
    fn explanation_lists_messages() {
        colored::control::set_override(false);
        let rules = rules(&Config::default());
        let rule = find_rule(&rules, "skip-link").expect("rule should exist");
        let text = pretty_print_rule(rule);
        assert!(text.starts_with("skip-link\n"));
        for message in rule.messages() {
            assert!(text.contains(&format!("  - {}", message.key())));
        }
    }
}

//! Implementation of the linter.

use std::collections::HashSet;

use a11yinspect_ast::Diagnostic;
use a11yinspect_ast::Document;
use a11yinspect_ast::Location;
use a11yinspect_ast::Severity;
use indexmap::IndexMap;
use tracing::debug;
use tracing::trace;
use tracing::warn;

use crate::Config;
use crate::Context;
use crate::DocumentState;
use crate::Rule;
use crate::RuleLevel;
use crate::RuleLevels;
use crate::Variant;
use crate::default_severity;
use crate::rules;

/// A rule family together with the variants that run for a document.
struct ActiveRule<'a> {
    /// The rule family.
    rule: &'a dyn Rule,
    /// The running variants and their configured levels.
    ///
    /// A variant without a level keeps the default severity of its messages.
    variants: Vec<(Variant, Option<RuleLevel>)>,
}

/// Runs lint rules over a document.
///
/// By default, the linter runs every variant of every rule and each
/// diagnostic keeps the severity its message declares.
///
/// When given rule levels, only the variants mapped to `warn` or `error` run
/// and their diagnostics take the mapped severity.
#[allow(missing_debug_implementations)]
pub struct Linter {
    /// The map of rule family identifier to rule.
    rules: IndexMap<&'static str, Box<dyn Rule>>,
    /// The configured levels, if any.
    levels: Option<RuleLevels>,
}

impl Linter {
    /// Creates a new linter with the given rules.
    pub fn new(rules: impl IntoIterator<Item = Box<dyn Rule>>) -> Self {
        Self {
            rules: rules.into_iter().map(|r| (r.id(), r)).collect(),
            levels: None,
        }
    }

    /// Creates a new linter with the default rules built from the given
    /// configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(rules(config))
    }

    /// Sets the rule levels of the linter.
    ///
    /// Names that are not registered are ignored.
    pub fn with_levels(mut self, levels: RuleLevels) -> Self {
        let known: HashSet<String> = self
            .rules
            .values()
            .flat_map(|r| r.variants().iter().map(move |v| v.name(r.id())))
            .collect();

        for name in levels.keys().filter(|n| !known.contains(*n)) {
            warn!(rule = %name, "ignoring level for unknown rule");
        }

        self.levels = Some(levels);
        self
    }

    /// Gets the rules of the linter.
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.values().map(|r| r.as_ref())
    }

    /// Gets a rule family by its identifier.
    pub fn rule(&self, id: &str) -> Option<&dyn Rule> {
        self.rules.get(id).map(|r| r.as_ref())
    }

    /// Gets the rule families with at least one running variant.
    fn active_rules(&self) -> Vec<ActiveRule<'_>> {
        self.rules
            .values()
            .filter_map(|rule| {
                let variants: Vec<_> = rule
                    .variants()
                    .iter()
                    .filter_map(|variant| match &self.levels {
                        None => Some((*variant, None)),
                        Some(levels) => match levels.get(&variant.name(rule.id())) {
                            Some(RuleLevel::Off) | None => None,
                            Some(level) => Some((*variant, Some(*level))),
                        },
                    })
                    .collect();

                if variants.is_empty() {
                    None
                } else {
                    Some(ActiveRule {
                        rule: rule.as_ref(),
                        variants,
                    })
                }
            })
            .collect()
    }

    /// Lints a document.
    ///
    /// The document is traversed once in document order. Each element is
    /// observed by the document state before any rule checks it, and every
    /// rule is finalized after the traversal. The diagnostics are returned in
    /// document order.
    pub fn lint(&self, document: &Document) -> Vec<Diagnostic> {
        let active = self.active_rules();
        debug!(
            path = document.path().unwrap_or("<unknown>"),
            rules = active.len(),
            "linting document"
        );

        let mut state = DocumentState::default();
        let mut diagnostics = Vec::new();
        for element in document.elements() {
            trace!(element = %document.describe(element.location()), "visiting element");
            state.observe(&element);

            for active in active.iter().filter(|a| a.rule.applies_to(&element)) {
                let mut cx = Context::new(document, &state);
                active.rule.check(&mut cx, &element);
                emit(document, active, cx.into_reports(), &mut diagnostics);
            }
        }

        for active in &active {
            let mut cx = Context::new(document, &state);
            active.rule.finalize(&mut cx);
            emit(document, active, cx.into_reports(), &mut diagnostics);
        }

        diagnostics.sort_by_key(|d| d.location());
        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Renders a rule's reports as diagnostics for each of its running variants.
fn emit(
    document: &Document,
    active: &ActiveRule<'_>,
    reports: Vec<(&'static str, Location)>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let rule = active.rule;
    for (key, location) in reports {
        let Some(message) = rule.messages().iter().find(|m| m.key() == key) else {
            debug!(rule = rule.id(), key, "skipping report of an undeclared message");
            continue;
        };

        for (variant, level) in &active.variants {
            let Some(text) = message.text(*variant) else {
                continue;
            };

            let severity = match level {
                Some(RuleLevel::Error) => Severity::Error,
                Some(RuleLevel::Warn) => Severity::Warning,
                Some(RuleLevel::Off) | None => default_severity(text),
            };

            let mut diagnostic = Diagnostic::error(rule.render(key, text))
                .with_severity(severity)
                .with_rule(variant.name(rule.id()))
                .with_key(key)
                .with_location(location);

            if let Some(span) = document.span_of(location) {
                diagnostic = diagnostic.with_highlight(span);
            }

            diagnostics.push(diagnostic);
        }
    }
}

#[cfg(test)]
mod tests {
    use a11yinspect_ast::builder::document;
    use a11yinspect_ast::builder::element;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Profile;

    /// Collects the rule and key of each diagnostic.
    fn keys(diagnostics: &[Diagnostic]) -> Vec<(&str, &str)> {
        diagnostics
            .iter()
            .map(|d| (d.rule().unwrap_or_default(), d.key().unwrap_or_default()))
            .collect()
    }

    #[test]
    fn variants_emit_their_own_messages() {
        let doc = document([element("img").attr("src", "x.png")]);
        let linter = Linter::new(
            rules(&Config::default())
                .into_iter()
                .filter(|r| r.id() == "img-element"),
        );
        let diagnostics = linter.lint(&doc);
        assert_eq!(
            keys(&diagnostics),
            [
                ("img-element", "imgMissingAltNoAria"),
                ("img-element-error", "imgMissingAltNoAria"),
            ]
        );
        assert!(diagnostics.iter().all(|d| d.severity() == Severity::Error));
        assert_eq!(
            diagnostics[1].message(),
            "❌ [Critical] img missing alt attribute and has no aria-label or aria-labelledby (1.1.1 A)"
        );
    }

    #[test]
    fn levels_select_and_override() {
        let doc = document([element("img").attr("role", "presentation")]);
        let mut levels = RuleLevels::new();
        levels.insert("img-element-warning".to_string(), RuleLevel::Error);
        levels.insert("img-element".to_string(), RuleLevel::Off);
        levels.insert("no-such-rule".to_string(), RuleLevel::Warn);

        let diagnostics = Linter::default().with_levels(levels).lint(&doc);
        assert_eq!(keys(&diagnostics), [("img-element-warning", "imgDecorative")]);
        assert_eq!(diagnostics[0].severity(), Severity::Error);
    }

    #[test]
    fn default_severity_comes_from_the_message() {
        let doc = document([element("img").attr("role", "presentation")]);
        let linter = Linter::new(
            rules(&Config::default())
                .into_iter()
                .filter(|r| r.id() == "img-element"),
        );
        let diagnostics = linter.lint(&doc);
        assert_eq!(
            keys(&diagnostics),
            [
                ("img-element", "imgDecorative"),
                ("img-element-warning", "imgDecorative"),
            ]
        );
        assert!(diagnostics.iter().all(|d| d.severity() == Severity::Note));
    }

    #[test]
    fn decorative_elements_need_no_name() {
        const NAME_REQUIRED: &[&str] = &[
            "linkAccessibleName",
            "buttonAccessibleName",
            "headingEmpty",
            "headingOnlyImageNoAlt",
            "svgMissingName",
            "svgMissingRole",
            "svgShouldHaveRoleImg",
            "labelTextContent",
            "iframeMissingTitle",
            "imgMissingAlt",
            "imgMissingAltNoAria",
            "canvasMissingDescription",
            "canvasMissingRoleImg",
            "embedMissingAccessibleName",
            "objectMissingFallbackContent",
            "formMissingAccessibleName",
            "inputMissingAssociatedLabel",
            "selectMissingAssociatedLabel",
            "textareaMissingAssociatedLabel",
            "meterMissingAccessibleName",
            "outputMissingAccessibleName",
            "progressMissingAccessibleName",
            "sectionHaveAccessibleName",
        ];

        let markers = [("role", "presentation"), ("role", "none"), ("aria-hidden", "true")];
        let tags = [
            ("a", Some(("href", "/x"))),
            ("button", Some(("type", "button"))),
            ("h2", None),
            ("svg", None),
            ("label", Some(("htmlFor", "email"))),
            ("iframe", Some(("src", "/map"))),
            ("img", Some(("src", "x.png"))),
            ("canvas", None),
            ("embed", Some(("type", "video/mp4"))),
            ("object", Some(("type", "image/svg+xml"))),
            ("form", None),
            ("input", Some(("type", "text"))),
            ("select", None),
            ("textarea", None),
            ("meter", None),
            ("output", None),
            ("progress", None),
            ("section", None),
        ];

        let doc = document(tags.iter().flat_map(|(tag, base)| {
            markers.iter().map(move |(name, value)| {
                let element = element(tag).attr(name, *value);
                match base {
                    Some((attr, value)) => element.attr(attr, *value),
                    None => element,
                }
            })
        }));

        let diagnostics = Linter::default().lint(&doc);
        let reported: Vec<_> = diagnostics
            .iter()
            .filter_map(|d| d.key())
            .filter(|key| NAME_REQUIRED.contains(key))
            .collect();
        assert!(reported.is_empty(), "unexpected name diagnostics: {reported:?}");
    }

    #[test]
    fn page_scenario() {
        let doc = document([element("html")
            .child(element("body").child(element("img").attr("src", "x.png")))]);
        let levels = Profile::Strict.levels(&rules(&Config::default()));
        let diagnostics = Linter::default().with_levels(levels).lint(&doc);
        let keys: HashSet<_> = diagnostics.iter().filter_map(|d| d.key()).collect();
        for key in [
            "htmlElementMissingLangAttribute",
            "pageMissingTitleElement",
            "imgMissingAltNoAria",
        ] {
            assert!(keys.contains(key), "missing `{key}`");
        }
        assert!(!keys.contains("imgMissingAlt"));
    }

    #[test]
    fn link_scenario() {
        let doc = document([element("a").attr("href", "#").text("click here")]);
        let keys: HashSet<_> = Linter::default()
            .lint(&doc)
            .iter()
            .filter_map(|d| d.key().map(str::to_string))
            .collect();
        assert!(keys.contains("linkHrefEmpty"));
        assert!(keys.contains("linkTextGenericClickHere"));
        assert!(!keys.contains("linkMissingHrefAttribute"));
    }

    #[test]
    fn diagnostics_are_in_document_order() {
        let doc = document([
            element("div").attr("id", "x"),
            element("img"),
            element("div").attr("id", "x"),
        ]);
        let diagnostics = Linter::default().lint(&doc);
        let locations: Vec<_> = diagnostics.iter().map(|d| d.location()).collect();
        let mut sorted = locations.clone();
        sorted.sort();
        assert_eq!(locations, sorted);
    }
}

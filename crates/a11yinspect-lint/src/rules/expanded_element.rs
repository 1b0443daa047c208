//! A lint rule for expandable controls.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the expanded element rule.
const ID: &str = "expanded-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("ariaExpandedTrueFalse")
        .warning("⚠️ aria-expanded should be true or false"),
    Message::new("ariaControlsReferencesNonExistent")
        .warning("⚠️ aria-controls references non-existent id"),
];

/// Detects invalid `aria-expanded` values and empty `aria-controls`.
#[derive(Default, Debug, Clone, Copy)]
pub struct ExpandedElementRule;

impl Rule for ExpandedElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that expandable controls have a valid state and reference what they control."
    }

    fn explanation(&self) -> &'static str {
        "`aria-expanded` only accepts `true` and `false`. An empty `aria-controls` references \
         nothing."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Robust])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["details-element", "tab-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.has("aria-expanded") || element.has("aria-controls")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if let Some(expanded) = element.attribute("aria-expanded") {
            if resolve::is_invalid_token(expanded.value(), &["true", "false"]) {
                cx.report("ariaExpandedTrueFalse", expanded.location());
            }
        }

        if let Some(controls) = element.attribute("aria-controls") {
            let value = controls.value();
            if value.is_falsy() || value.is_blank() {
                cx.report("ariaControlsReferencesNonExistent", controls.location());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use a11yinspect_ast::builder::document;
    use a11yinspect_ast::builder::element;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::rules::testing::reports;

    #[test]
    fn expandable() {
        let doc = document([
            element("button")
                .attr("aria-expanded", "open")
                .attr("aria-controls", " "),
            element("button")
                .expr("aria-expanded", true)
                .attr("aria-controls", "menu"),
        ]);
        assert_eq!(
            reports(&ExpandedElementRule, &doc),
            [
                "ariaExpandedTrueFalse at <button>@0[aria-expanded]",
                "ariaControlsReferencesNonExistent at <button>@0[aria-controls]",
            ]
        );
    }
}

//! A lint rule for disclosure widgets.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the details element rule.
const ID: &str = "details-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("detailsElementMissingSummaryChild")
        .error("❌ [Major] details element missing summary child (1.3.1 A)"),
    Message::new("summaryElementInsideDetails")
        .error("❌ [Major] summary element not inside details (1.3.1 A)"),
    Message::new("detailsAriaHidden")
        .warning("⚠️ [Major] details element with aria-hidden=true hides its content from assistive technology (4.1.2 A)"),
];

/// Detects `details` without a `summary` and misplaced `summary` elements.
#[derive(Default, Debug, Clone, Copy)]
pub struct DetailsElementRule;

impl Rule for DetailsElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that `details` elements have a `summary` and are not hidden."
    }

    fn explanation(&self) -> &'static str {
        "The `summary` of a `details` element is its keyboard-operable toggle and its name. \
         Without one the browser supplies a generic \"Details\" label."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Operable])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["expanded-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Error, Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is_any(&["details", "summary"])
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if element.is("summary") {
            if !element.ancestors().any(|a| a.is("details")) {
                cx.report("summaryElementInsideDetails", element.location());
            }
            return;
        }

        if !element.child_elements().any(|c| c.is("summary")) {
            cx.report("detailsElementMissingSummaryChild", element.location());
        }

        if resolve::is_hidden(element) {
            cx.report("detailsAriaHidden", element.location());
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
    fn disclosure() {
        let doc = document([
            element("details")
                .child(element("summary").text("More"))
                .child(element("p").text("Hidden content")),
            element("details").attr("aria-hidden", "true"),
            element("summary").text("Loose"),
        ]);
        assert_eq!(
            reports(&DetailsElementRule, &doc),
            [
                "detailsElementMissingSummaryChild at <details>@5",
                "detailsAriaHidden at <details>@5",
                "summaryElementInsideDetails at <summary>@6",
            ]
        );
    }
}

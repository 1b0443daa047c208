//! A lint rule for `label` elements.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the label element rule.
const ID: &str = "label-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("labelMissingAttribute")
        .combined("❌ Label missing for attribute")
        .error("❌ Label missing for attribute"),
    Message::new("labelTextContent")
        .combined("❌ Label has no text content")
        .error("❌ Label has no text content"),
];

/// Detects labels that label nothing or say nothing.
#[derive(Default, Debug, Clone, Copy)]
pub struct LabelElementRule;

impl Rule for LabelElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that labels are associated with a control and have text."
    }

    fn explanation(&self) -> &'static str {
        "A `label` names a form control only when it is associated with it, either through \
         `htmlFor` or by wrapping the control. A label without text names the control with \
         nothing."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable, Tag::Understandable])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["input-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        // The `-warning` variant has no messages of its own
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("label")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let wraps_input = element.child_elements().any(|c| c.is("input"));
        if !element.has("htmlFor") && !wraps_input {
            cx.report("labelMissingAttribute", element.location());
        }

        if element.text().is_empty() && !resolve::is_decorative(element) {
            cx.report("labelTextContent", element.location());
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
    fn label_checks() {
        let doc = document([
            element("label").text("Name"),
            element("label").attr("htmlFor", "email"),
            element("label")
                .text("Subscribe")
                .child(element("input").attr("type", "checkbox")),
        ]);
        assert_eq!(
            reports(&LabelElementRule, &doc),
            [
                "labelMissingAttribute at <label>@0",
                "labelTextContent at <label>@2",
            ]
        );
    }

    #[test]
    fn hidden_labels_need_no_text() {
        let doc = document([
            element("label")
                .attr("htmlFor", "email")
                .attr("aria-hidden", "true"),
            element("label").attr("htmlFor", "name").attr("role", "none"),
        ]);
        assert!(reports(&LabelElementRule, &doc).is_empty());
    }
}

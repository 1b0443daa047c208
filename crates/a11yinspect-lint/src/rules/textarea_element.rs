//! A lint rule for `textarea` elements.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the textarea element rule.
const ID: &str = "textarea-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("textareaMissingAssociatedLabel")
        .combined("❌ Textarea missing associated label")
        .error("❌ Textarea missing associated label"),
    Message::new("textareaMissingNameAttribute")
        .combined("❌ Textarea missing name attribute")
        .error("❌ Textarea missing name attribute"),
    Message::new("textareaPlaceholderLabelSubstitute")
        .combined("⚠️ Textarea placeholder is not a label substitute")
        .warning("⚠️ Textarea placeholder is not a label substitute"),
];

/// Detects unlabelled and unnamed text areas.
#[derive(Default, Debug, Clone, Copy)]
pub struct TextareaElementRule;

impl Rule for TextareaElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that text areas have a label and a name."
    }

    fn explanation(&self) -> &'static str {
        "Like any form control, a `textarea` needs a label that is not just its placeholder, and \
         a `name` to be submitted with its form."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable, Tag::Understandable])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["input-element", "label-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("textarea")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let unlabelled = !element.has("id") && resolve::missing_label(element);
        if unlabelled {
            cx.report("textareaMissingAssociatedLabel", element.location());
        }

        if !element.has("name") {
            cx.report("textareaMissingNameAttribute", element.location());
        }

        if unlabelled && element.has("placeholder") {
            cx.report("textareaPlaceholderLabelSubstitute", element.location());
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
    fn textarea_checks() {
        let doc = document([
            element("textarea").attr("placeholder", "Comments"),
            element("textarea")
                .attr("aria-label", "Comments")
                .attr("name", "comments"),
        ]);
        assert_eq!(
            reports(&TextareaElementRule, &doc),
            [
                "textareaMissingAssociatedLabel at <textarea>@0",
                "textareaMissingNameAttribute at <textarea>@0",
                "textareaPlaceholderLabelSubstitute at <textarea>@0",
            ]
        );
    }
}

//! A lint rule for required fields.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the required element rule.
const ID: &str = "required-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("requiredFieldHaveVisualIndicator")
        .warning("⚠️ Required field should have visual indicator"),
];

/// Flags required fields for a visual indicator review.
#[derive(Default, Debug, Clone, Copy)]
pub struct RequiredElementRule;

impl Rule for RequiredElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Reminds that required fields need a visible indicator."
    }

    fn explanation(&self) -> &'static str {
        "`required` and `aria-required` are only announced by assistive technology. Sighted \
         users need a visible marker, explained in the form's instructions, that a field must \
         be filled in."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Understandable, Tag::BestPractice])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["input-element", "label-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is_any(&["input", "select", "textarea"])
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if element.has("required") || element.value("aria-required").is_true() {
            cx.report("requiredFieldHaveVisualIndicator", element.location());
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
    fn required_fields() {
        let doc = document([
            element("input").bare("required"),
            element("select").attr("aria-required", "true"),
            element("textarea").attr("aria-required", "false"),
        ]);
        assert_eq!(
            reports(&RequiredElementRule, &doc),
            [
                "requiredFieldHaveVisualIndicator at <input>@0",
                "requiredFieldHaveVisualIndicator at <select>@1",
            ]
        );
    }
}

//! A lint rule for selectable options.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the selected element rule.
const ID: &str = "selected-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("ariaSelectedTrueFalse")
        .warning("⚠️ [Major] aria-selected should be true or false (4.1.2 A)"),
    Message::new("optionElementHaveValueAttribute")
        .warning("💡 [Best Practice] option element should have value attribute (4.1.2 A)"),
];

/// Detects options without a value and invalid `aria-selected` values.
#[derive(Default, Debug, Clone, Copy)]
pub struct SelectedElementRule;

impl Rule for SelectedElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that options have values and that `aria-selected` is valid."
    }

    fn explanation(&self) -> &'static str {
        "An `option` without a `value` submits its text, which changes whenever the text is \
         edited or translated. `aria-selected` only accepts `true` and `false`."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Robust])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["select-element", "checked-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("option") || element.has("aria-selected")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if element.is("option") && !element.has("value") {
            cx.report("optionElementHaveValueAttribute", element.location());
        }

        if let Some(selected) = element.attribute("aria-selected") {
            if resolve::is_invalid_token(selected.value(), &["true", "false"]) {
                cx.report("ariaSelectedTrueFalse", selected.location());
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
    fn selection() {
        let doc = document([
            element("option").text("Red"),
            element("option").attr("value", "blue").text("Blue"),
            element("div")
                .attr("role", "option")
                .attr("aria-selected", "mixed"),
        ]);
        assert_eq!(
            reports(&SelectedElementRule, &doc),
            [
                "optionElementHaveValueAttribute at <option>@0",
                "ariaSelectedTrueFalse at <div>@4[aria-selected]",
            ]
        );
    }
}

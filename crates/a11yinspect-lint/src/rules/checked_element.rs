//! A lint rule for checkable controls.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the checked element rule.
const ID: &str = "checked-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("ariaCheckedTrueFalseMixed")
        .combined("⚠️ aria-checked should be true, false, or mixed")
        .warning("⚠️ [Major] aria-checked should be true, false, or mixed (4.1.2 A)"),
    Message::new("checkboxRadioMissingNameAttribute")
        .combined("❌ Checkbox/radio missing name attribute")
        .error("❌ Checkbox/radio missing name attribute"),
];

/// Detects ungrouped checkboxes and radios and invalid `aria-checked`
/// values.
#[derive(Default, Debug, Clone, Copy)]
pub struct CheckedElementRule;

impl Rule for CheckedElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that checkboxes and radios are named and that `aria-checked` is valid."
    }

    fn explanation(&self) -> &'static str {
        "Checkboxes and radio buttons are grouped and submitted by their `name`. The \
         `aria-checked` state of custom controls only accepts `true`, `false` and `mixed`."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Robust])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["pressed-element", "selected-element", "role-props-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("input") || element.has("aria-checked")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let checkable = matches!(element.value("type").as_str(), Some("checkbox" | "radio"));
        if element.is("input") && checkable && !element.has("name") {
            cx.report("checkboxRadioMissingNameAttribute", element.location());
        }

        if let Some(checked) = element.attribute("aria-checked") {
            if resolve::is_invalid_token(checked.value(), &["true", "false", "mixed"]) {
                cx.report("ariaCheckedTrueFalseMixed", checked.location());
            }
        }
    }
}

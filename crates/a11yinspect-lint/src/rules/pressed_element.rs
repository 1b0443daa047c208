//! A lint rule for toggle buttons.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the pressed element rule.
const ID: &str = "pressed-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("ariaPressedTrueFalseMixed")
        .combined("⚠️ aria-pressed should be true, false, or mixed")
        .warning("⚠️ [Major] aria-pressed should be true, false, or mixed (4.1.2 A)"),
];

/// Detects invalid `aria-pressed` values.
#[derive(Default, Debug, Clone, Copy)]
pub struct PressedElementRule;

impl Rule for PressedElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that `aria-pressed` is `true`, `false` or `mixed`."
    }

    fn explanation(&self) -> &'static str {
        "`aria-pressed` turns a button into a toggle button. Any value other than `true`, \
         `false` or `mixed` is not understood by assistive technology."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Robust])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["checked-element", "button-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Combined, Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.has("aria-pressed")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if let Some(pressed) = element.attribute("aria-pressed") {
            if resolve::is_invalid_token(pressed.value(), &["true", "false", "mixed"]) {
                cx.report("ariaPressedTrueFalseMixed", pressed.location());
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
    fn pressed_values() {
        let doc = document([
            element("button").attr("aria-pressed", "on"),
            element("button").attr("aria-pressed", "mixed"),
            element("button").dynamic("aria-pressed"),
        ]);
        assert_eq!(
            reports(&PressedElementRule, &doc),
            ["ariaPressedTrueFalseMixed at <button>@0[aria-pressed]"]
        );
    }
}

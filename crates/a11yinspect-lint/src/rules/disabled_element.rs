//! A lint rule for disabled controls.

use a11yinspect_ast::Element;
use a11yinspect_ast::Literal;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the disabled element rule.
const ID: &str = "disabled-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("disabledElementTabOrder")
        .warning("⚠️ Disabled element should not be in tab order"),
    Message::new("ariaDisabledTrueFalse")
        .warning("⚠️ aria-disabled should be true or false"),
];

/// Detects disabled controls left in the tab order and invalid
/// `aria-disabled` values.
#[derive(Default, Debug, Clone, Copy)]
pub struct DisabledElementRule;

impl Rule for DisabledElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that disabled controls are removed from the tab order."
    }

    fn explanation(&self) -> &'static str {
        "A disabled control given a non-negative `tabIndex` is reached by the keyboard but \
         cannot be used. `aria-disabled` only accepts `true` and `false`."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Operable, Tag::Robust])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["focus-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.has("disabled") || element.has("aria-disabled")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if element.has("disabled") {
            if let Some(tab_index) = resolve::tab_index(element) {
                let value = tab_index.value().literal().and_then(|l| l.to_integer());
                if value.is_some_and(|n| n >= 0) {
                    cx.report("disabledElementTabOrder", tab_index.location());
                }
            }
        }

        if let Some(disabled) = element.attribute("aria-disabled") {
            if let Some(literal) = disabled.value().literal() {
                if *literal != Literal::Null && !literal.is_true() && !literal.is_false() {
                    cx.report("ariaDisabledTrueFalse", disabled.location());
                }
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
    fn disabled_controls() {
        let doc = document([
            element("button").bare("disabled").attr("tabIndex", "0"),
            element("button").bare("disabled").expr("tabIndex", -1),
            element("div").attr("aria-disabled", "yes"),
            element("div").expr("aria-disabled", true),
        ]);
        assert_eq!(
            reports(&DisabledElementRule, &doc),
            [
                "disabledElementTabOrder at <button>@0[tabIndex]",
                "ariaDisabledTrueFalse at <div>@2[aria-disabled]",
            ]
        );
    }
}

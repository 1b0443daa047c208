//! A lint rule for keyboard focus.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::knowledge::aria;
use crate::knowledge::html;
use crate::resolve;

/// The identifier for the focus element rule.
const ID: &str = "focus-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("activedescendantNotFocusable")
        .error("❌ Element with aria-activedescendant must be focusable (add tabIndex)"),
    Message::new("positiveTabindexValueFound")
        .warning("⚠️ [Major] Positive tabindex value found (2.4.3 A)"),
    Message::new("elementTabindexButRole")
        .warning("⚠️ [Major] Element has tabindex but no role (4.1.2 A)"),
    Message::new("interactiveRoleNotFocusable")
        .warning("⚠️ [Blocker] Element with interactive role must be focusable (add tabIndex) (2.1.1 A)"),
];

/// Detects tab indexes and roles that disturb keyboard focus.
#[derive(Default, Debug, Clone, Copy)]
pub struct FocusElementRule;

impl Rule for FocusElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that interactive elements are focusable and the tab order is natural."
    }

    fn explanation(&self) -> &'static str {
        "Keyboard users reach controls through the tab order. A positive `tabIndex` moves an \
         element ahead of everything else and breaks the expected order. Elements made \
         focusable need a role so that users know what they are, while elements with an \
         interactive role, or those managing `aria-activedescendant`, must be focusable."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Operable])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Understanding/focus-order.html")
    }

    fn related_rules(&self) -> &[&'static str] {
        &["aria-element", "click-handler", "disabled-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Error, Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, _: &Element<'_>) -> bool {
        true
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if element.has("aria-activedescendant") && !resolve::is_focusable(element) {
            cx.report("activedescendantNotFocusable", element.location());
        }

        if let Some(tab_index) = resolve::tab_index(element) {
            match tab_index.value().literal().and_then(|l| l.to_integer()) {
                Some(n) if n > 0 => {
                    cx.report("positiveTabindexValueFound", tab_index.location());
                }
                Some(0 | -1)
                    if !element.is_any(html::NATIVE_FOCUSABLE) && !element.has("role") =>
                {
                    cx.report("elementTabindexButRole", tab_index.location());
                }
                _ => {}
            }
        }

        if resolve::literal_role(element).is_some_and(aria::is_interactive_role)
            && !resolve::is_focusable(element)
        {
            cx.report("interactiveRoleNotFocusable", element.location());
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
    fn tab_indexes() {
        let doc = document([
            element("div").attr("tabIndex", "3"),
            element("span").expr("tabindex", 0),
            element("div").attr("tabIndex", "-1").attr("role", "button"),
            element("a").attr("href", "/").expr("tabIndex", -1),
            element("div").dynamic("tabIndex"),
        ]);
        assert_eq!(
            reports(&FocusElementRule, &doc),
            [
                "positiveTabindexValueFound at <div>@0[tabIndex]",
                "elementTabindexButRole at <span>@1[tabindex]",
            ]
        );
    }

    #[test]
    fn unfocusable_widgets() {
        let doc = document([
            element("div").attr("role", "button"),
            element("div").attr("role", "button").attr("tabIndex", "0"),
            element("ul").attr("aria-activedescendant", "item-1"),
            element("input").attr("aria-activedescendant", "item-1"),
        ]);
        assert_eq!(
            reports(&FocusElementRule, &doc),
            [
                "interactiveRoleNotFocusable at <div>@0",
                "activedescendantNotFocusable at <ul>@2",
            ]
        );
    }
}

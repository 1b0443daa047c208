//! A lint rule for mouse handlers on non-interactive elements.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the click handler rule.
const ID: &str = "click-handler";

/// The elements that are not interactive by themselves.
const CONTAINERS: &[&str] = &["div", "span", "p", "section", "article", "main", "aside"];

/// The keyboard handlers that can accompany a click handler.
const KEY_HANDLERS: &[&str] = &["onKeyDown", "onKeyUp", "onKeyPress"];

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("onclickWithoutOnkeydownOnkeyup")
        .warning("⚠️ onClick without onKeyDown/onKeyUp"),
    Message::new("mouseEventWithoutKeyboardEquivalent")
        .warning("⚠️ Mouse event without keyboard equivalent"),
];

/// Detects mouse handlers without a keyboard equivalent.
#[derive(Default, Debug, Clone, Copy)]
pub struct ClickHandlerRule;

impl Rule for ClickHandlerRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that mouse handlers on plain elements have keyboard equivalents."
    }

    fn explanation(&self) -> &'static str {
        "Keyboard users cannot click or hover. An element handling `onClick` must also handle a \
         key event, `onMouseOver` needs a matching `onFocus` and `onMouseOut` needs a matching \
         `onBlur`."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Operable])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Understanding/keyboard.html")
    }

    fn related_rules(&self) -> &[&'static str] {
        &["button-element", "focus-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is_any(CONTAINERS)
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if let Some(click) = element.attribute("onClick") {
            if !KEY_HANDLERS.iter().any(|h| element.has(h)) {
                cx.report("onclickWithoutOnkeydownOnkeyup", click.location());
            }
        }

        let hover_only = element.has("onMouseOver") && !element.has("onFocus");
        let leave_only = element.has("onMouseOut") && !element.has("onBlur");
        if hover_only || leave_only {
            cx.report("mouseEventWithoutKeyboardEquivalent", element.location());
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
    fn handlers() {
        let doc = document([
            element("div").dynamic("onClick"),
            element("div").dynamic("onClick").dynamic("onKeyUp"),
            element("span").dynamic("onMouseOver"),
            element("span").dynamic("onMouseOver").dynamic("onFocus"),
            element("p").dynamic("onMouseOut").dynamic("onFocus"),
            element("button").dynamic("onClick"),
        ]);
        assert_eq!(
            reports(&ClickHandlerRule, &doc),
            [
                "onclickWithoutOnkeydownOnkeyup at <div>@0[onClick]",
                "mouseEventWithoutKeyboardEquivalent at <span>@2",
                "mouseEventWithoutKeyboardEquivalent at <p>@4",
            ]
        );
    }
}

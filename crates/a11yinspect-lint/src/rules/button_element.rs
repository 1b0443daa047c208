//! A lint rule for buttons and elements acting as buttons.

use std::sync::LazyLock;

use a11yinspect_ast::Element;
use regex::Regex;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::knowledge::phrases;
use crate::resolve;

/// The identifier for the button element rule.
const ID: &str = "button-element";

/// Matches the event handlers that make an element behave like a button.
static HANDLER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: this is checked statically with tests to always unwrap.
    Regex::new(r"(?i)^on(Click|KeyDown|KeyPress|KeyUp)$").unwrap()
});

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("buttonAccessibleName")
        .combined("❌ Button has no accessible name")
        .error("❌ Button has no accessible name"),
    Message::new("buttonTextGeneric")
        .combined("⚠️ Button text is generic")
        .warning("⚠️ [Major] Button text is generic (2.4.6 AA)"),
    Message::new("buttonMissingTypeAttribute")
        .combined("❌ Button missing type attribute")
        .error("❌ Button missing type attribute"),
    Message::new("interactiveDivSpanButton")
        .combined("⚠️ Interactive div/span should be a button"),
    Message::new("buttonSvgMissingRoleImg")
        .combined("❌ SVG inside button missing role=\"img\" attribute")
        .error("❌ SVG inside button missing role=\"img\" attribute"),
];

/// Detects buttons without a type or an accessible name.
#[derive(Default, Debug, Clone, Copy)]
pub struct ButtonElementRule;

impl ButtonElementRule {
    /// Checks a `button` element.
    fn check_button(cx: &mut Context<'_>, element: &Element<'_>) {
        if !element.has("type") {
            cx.report("buttonMissingTypeAttribute", element.location());
        }

        if resolve::has_label(element) {
            return;
        }

        let text = element.text();
        if text.is_empty() {
            if !resolve::is_decorative(element) {
                cx.report("buttonAccessibleName", element.location());
            }
            return;
        }

        if text
            .exact()
            .is_some_and(|t| phrases::matches(phrases::GENERIC_BUTTON_TEXT, t))
        {
            cx.report("buttonTextGeneric", element.location());
        }

        for svg in element.child_elements().filter(|c| c.is("svg")) {
            if resolve::literal_role(&svg) != Some("img") {
                cx.report("buttonSvgMissingRoleImg", svg.location());
            }
        }
    }
}

impl Rule for ButtonElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that buttons have an explicit type and a descriptive accessible name."
    }

    fn explanation(&self) -> &'static str {
        "A button without an accessible name is announced only as \"button\". Its text or label \
         should describe the action it performs; \"click\" or \"OK\" does not. A `button` without \
         a `type` submits its form by default, which is rarely intended. Icons inside a button \
         should be exposed with `role=\"img\"`. A `div` or `span` with click or key handlers \
         should be a `button` instead, or at least declare a role."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Operable, Tag::Robust])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["a-element", "click-handler", "focus-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is_any(&["button", "div", "span"])
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if element.is("button") {
            Self::check_button(cx, element);
            return;
        }

        let has_handler = element
            .attributes()
            .any(|a| HANDLER_REGEX.is_match(a.name()));
        if has_handler && !element.has("role") {
            cx.report("interactiveDivSpanButton", element.location());
        }
    }
}

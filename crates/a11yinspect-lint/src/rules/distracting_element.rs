//! A lint rule for distracting elements.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the distracting element rule.
const ID: &str = "distracting-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("noMarquee")
        .combined("❌ Do not use <marquee> - it cannot be paused and violates WCAG 2.2.2")
        .error("❌ [Critical] Do not use <marquee> - it cannot be paused and violates WCAG 2.2.2 (2.2.2 A)"),
    Message::new("noBlink")
        .combined("❌ Do not use <blink> - it cannot be paused and violates WCAG 2.2.2")
        .error("❌ [Critical] Do not use <blink> - it cannot be paused and violates WCAG 2.2.2 (2.2.2 A)"),
];

/// Detects `marquee` and `blink` elements.
#[derive(Default, Debug, Clone, Copy)]
pub struct DistractingElementRule;

impl Rule for DistractingElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Disallows moving and blinking content that cannot be paused."
    }

    fn explanation(&self) -> &'static str {
        "`marquee` and `blink` animate content with no way for the user to pause it, which \
         distracts users with attention disorders and makes the text hard to read."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Operable])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Understanding/pause-stop-hide.html")
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Combined, Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is_any(&["marquee", "blink"])
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if element.is("marquee") {
            cx.report("noMarquee", element.location());
        } else {
            cx.report("noBlink", element.location());
        }
    }
}

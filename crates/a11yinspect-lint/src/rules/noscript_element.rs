//! A lint rule for script fallbacks.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the noscript element rule.
const ID: &str = "noscript-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("noscriptElementEmpty")
        .combined("❌ noscript element is empty")
        .error("❌ noscript element is empty"),
];

/// Detects empty `noscript` fallbacks.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoscriptElementRule;

impl Rule for NoscriptElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that `noscript` elements provide fallback content."
    }

    fn explanation(&self) -> &'static str {
        "A `noscript` element is shown when scripting is unavailable. Leaving it empty gives \
         those users nothing."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Robust])
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Combined, Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("noscript")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if element.text().is_empty() {
            cx.report("noscriptElementEmpty", element.location());
        }
    }
}

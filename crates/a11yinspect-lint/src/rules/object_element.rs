//! A lint rule for `object` elements.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the object element rule.
const ID: &str = "object-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("objectMissingFallbackContent")
        .combined("❌ object missing fallback content")
        .error("❌ object missing fallback content"),
    Message::new("objectMissingTypeAttribute")
        .combined("❌ object missing type attribute")
        .error("❌ object missing type attribute"),
];

/// Detects embedded objects without a type or fallback content.
#[derive(Default, Debug, Clone, Copy)]
pub struct ObjectElementRule;

impl Rule for ObjectElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that embedded objects declare a type and provide a text alternative."
    }

    fn explanation(&self) -> &'static str {
        "The content of an `object` is often unreadable by assistive technology. Declare its \
         `type` and provide a label or fallback content describing it."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable, Tag::Robust])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["embed-element", "iframe-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Combined, Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("object")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if !element.has("type") {
            cx.report("objectMissingTypeAttribute", element.location());
        }

        if resolve::missing_label(element) && element.text().is_empty() {
            cx.report("objectMissingFallbackContent", element.location());
        }
    }
}

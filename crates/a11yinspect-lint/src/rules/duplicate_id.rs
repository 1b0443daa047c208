//! A lint rule for repeated element identifiers.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the duplicate id rule.
const ID: &str = "duplicate-id";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("duplicateIdAttributeFound")
        .error("❌ Duplicate id attribute found"),
];

/// Detects literal `id` values used more than once in a document.
///
/// The first element carrying an identifier is never reported; every later
/// one is.
#[derive(Default, Debug, Clone, Copy)]
pub struct DuplicateIdRule;

impl Rule for DuplicateIdRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that element identifiers are unique."
    }

    fn explanation(&self) -> &'static str {
        "Labels, descriptions and ARIA relationships refer to elements by `id`. When an \
         identifier repeats, those references resolve to the first match only, so the others \
         lose their label or description."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Robust])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Understanding/parsing.html")
    }

    fn related_rules(&self) -> &[&'static str] {
        &["label-element", "description-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.has("id")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if !cx.state().is_duplicate_id(element.id()) {
            return;
        }

        if let Some(id) = element.attribute("id") {
            cx.report("duplicateIdAttributeFound", id.location());
        }
    }
}

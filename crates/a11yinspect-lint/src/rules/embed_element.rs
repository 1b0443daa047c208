//! A lint rule for `embed` elements.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the embed element rule.
const ID: &str = "embed-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("embedMissingAccessibleName")
        .combined("❌ embed missing accessible name")
        .error("❌ [Major] embed missing accessible name (4.1.2 A)"),
    Message::new("embedMissingTypeAttribute")
        .combined("❌ embed missing type attribute")
        .error("❌ [Best Practice] embed missing type attribute (4.1.2 A)"),
];

/// Detects embedded content without a type or a name.
#[derive(Default, Debug, Clone, Copy)]
pub struct EmbedElementRule;

impl Rule for EmbedElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that embedded content declares a type and has an accessible name."
    }

    fn explanation(&self) -> &'static str {
        "An `embed` has no fallback content, so a label is the only way to tell assistive \
         technology what it contains."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable, Tag::Robust])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["object-element", "iframe-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Combined, Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("embed")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if !element.has("type") {
            cx.report("embedMissingTypeAttribute", element.location());
        }

        if resolve::missing_label(element) {
            cx.report("embedMissingAccessibleName", element.location());
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
    fn embed_checks() {
        let doc = document([
            element("embed").attr("src", "movie.swf"),
            element("embed")
                .attr("type", "video/mp4")
                .dynamic("aria-labelledby"),
        ]);
        assert_eq!(
            reports(&EmbedElementRule, &doc),
            [
                "embedMissingTypeAttribute at <embed>@0",
                "embedMissingAccessibleName at <embed>@0",
            ]
        );
    }
}

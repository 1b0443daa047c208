//! A lint rule for inline frames.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the iframe element rule.
const ID: &str = "iframe-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("iframeMissingTitle")
        .error("❌ [Minor] iframe missing title attribute (4.1.2 A)"),
    Message::new("iframeEmptyTitle")
        .error("❌ [Minor] iframe has empty title attribute (4.1.2 A)"),
];

/// Detects visible frames without a title.
#[derive(Default, Debug, Clone, Copy)]
pub struct IframeElementRule;

impl Rule for IframeElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that visible frames have a title."
    }

    fn explanation(&self) -> &'static str {
        "Screen readers announce a frame by its `title`, which lets users decide whether to \
         enter it."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Operable, Tag::Robust])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Techniques/html/H64")
    }

    fn related_rules(&self) -> &[&'static str] {
        &["title-element", "embed-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        // The `-warning` variant has no messages of its own
        &[Variant::Error, Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("iframe")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if resolve::is_decorative(element) {
            return;
        }

        match element.attribute("title") {
            Some(title) if title.value().has_value() => {
                if title.value().is_blank() {
                    cx.report("iframeEmptyTitle", title.location());
                }
            }
            _ => cx.report("iframeMissingTitle", element.location()),
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
    fn frames() {
        let doc = document([
            element("iframe").attr("src", "/map"),
            element("iframe").attr("title", "  "),
            element("iframe").attr("title", "Store locations"),
            element("iframe").attr("aria-hidden", "true"),
            element("iframe").bare("title"),
        ]);
        assert_eq!(
            reports(&IframeElementRule, &doc),
            [
                "iframeMissingTitle at <iframe>@0",
                "iframeEmptyTitle at <iframe>@1[title]",
                "iframeMissingTitle at <iframe>@4",
            ]
        );
    }
}

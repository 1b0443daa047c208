//! A lint rule for quotations.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the blockquote element rule.
const ID: &str = "blockquote-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("blockquoteHaveCiteAttributeAttribution")
        .combined("⚠️ blockquote should have cite attribute for attribution")
        .warning("💡 [Best Practice] blockquote should have cite attribute for attribution (1.3.1 A)"),
];

/// Detects block quotations without a source.
#[derive(Default, Debug, Clone, Copy)]
pub struct BlockquoteElementRule;

impl Rule for BlockquoteElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Suggests a `cite` attribute on block quotations."
    }

    fn explanation(&self) -> &'static str {
        "The `cite` attribute records where a quotation comes from."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::BestPractice])
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Combined, Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("blockquote")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if !element.has("cite") {
            cx.report("blockquoteHaveCiteAttributeAttribution", element.location());
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
    fn citations() {
        let doc = document([
            element("blockquote").text("To be or not to be"),
            element("blockquote")
                .attr("cite", "https://example.com/hamlet")
                .text("To be or not to be"),
        ]);
        assert_eq!(
            reports(&BlockquoteElementRule, &doc),
            ["blockquoteHaveCiteAttributeAttribution at <blockquote>@0"]
        );
    }
}

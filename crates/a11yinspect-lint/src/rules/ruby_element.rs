//! A lint rule for ruby annotations.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the ruby element rule.
const ID: &str = "ruby-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("rubyMissingRtElement")
        .combined("❌ ruby missing rt element")
        .error("❌ [Minor] ruby missing rt element (3.1.2 AA)"),
    Message::new("rubyHaveRpFallback")
        .combined("⚠️ ruby should have rp for fallback")
        .warning("⚠️ [Minor] ruby should have rp for fallback (4.1.2 A)"),
];

/// Detects ruby annotations without annotation text or a fallback.
#[derive(Default, Debug, Clone, Copy)]
pub struct RubyElementRule;

impl Rule for RubyElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that ruby annotations have annotation text and parenthesis fallbacks."
    }

    fn explanation(&self) -> &'static str {
        "The `rt` of a `ruby` element holds the pronunciation or meaning of the base text. `rp` \
         parentheses keep the annotation readable where ruby is not supported."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Understandable])
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("ruby")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if !element.child_elements().any(|c| c.is("rt")) {
            cx.report("rubyMissingRtElement", element.location());
        }

        if !element.child_elements().any(|c| c.is("rp")) {
            cx.report("rubyHaveRpFallback", element.location());
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
    fn annotations() {
        let doc = document([
            element("ruby").text("漢"),
            element("ruby")
                .text("漢")
                .child(element("rp").text("("))
                .child(element("rt").text("kan"))
                .child(element("rp").text(")")),
        ]);
        assert_eq!(
            reports(&RubyElementRule, &doc),
            [
                "rubyMissingRtElement at <ruby>@0",
                "rubyHaveRpFallback at <ruby>@0",
            ]
        );
    }
}

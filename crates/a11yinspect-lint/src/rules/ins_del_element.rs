//! A lint rule for edits.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the ins/del element rule.
const ID: &str = "ins-del-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("insDelHaveDatetimeAttribute")
        .warning("⚠️ ins/del should have datetime attribute"),
    Message::new("insDelHaveCiteExplanation")
        .warning("⚠️ ins/del should have cite for explanation"),
];

/// Detects insertions and deletions without a date or an explanation.
#[derive(Default, Debug, Clone, Copy)]
pub struct InsDelElementRule;

impl Rule for InsDelElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Suggests a date and an explanation for inserted and deleted text."
    }

    fn explanation(&self) -> &'static str {
        "Edits are easier to follow when `ins` and `del` record when the change was made \
         (`dateTime`) and where it is explained (`cite`)."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::BestPractice])
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is_any(&["ins", "del"])
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if !element.has("dateTime") {
            cx.report("insDelHaveDatetimeAttribute", element.location());
        }

        if !element.has("cite") {
            cx.report("insDelHaveCiteExplanation", element.location());
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
    fn edits() {
        let doc = document([
            element("del").text("$20"),
            element("ins")
                .attr("dateTime", "2024-01-01")
                .attr("cite", "/changes")
                .text("$15"),
        ]);
        assert_eq!(
            reports(&InsDelElementRule, &doc),
            [
                "insDelHaveDatetimeAttribute at <del>@0",
                "insDelHaveCiteExplanation at <del>@0",
            ]
        );
    }
}

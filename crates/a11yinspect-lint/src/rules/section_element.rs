//! A lint rule for `section` elements.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::knowledge::html;
use crate::resolve;

/// The identifier for the section element rule.
const ID: &str = "section-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("sectionHaveHeading")
        .combined("⚠️ section should have heading")
        .warning("⚠️ section should have heading"),
    Message::new("sectionHaveAccessibleName")
        .combined("⚠️ section should have accessible name")
        .warning("⚠️ section should have accessible name"),
];

/// Detects sections without a name or a heading.
#[derive(Default, Debug, Clone, Copy)]
pub struct SectionElementRule;

impl Rule for SectionElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that sections are named and introduced by a heading."
    }

    fn explanation(&self) -> &'static str {
        "A `section` is only exposed as a region landmark when it has an accessible name, and a \
         heading lets users find it in the page outline."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable, Tag::BestPractice])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["heading-element", "landmark-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Combined, Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("section")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if resolve::missing_label(element) {
            cx.report("sectionHaveAccessibleName", element.location());
        }

        let has_heading = element.child_elements().any(|c| {
            html::heading_level(c.name()).is_some() || resolve::literal_role(&c) == Some("heading")
        });
        if !has_heading {
            cx.report("sectionHaveHeading", element.location());
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
    fn sections() {
        let doc = document([
            element("section").child(element("p").text("Body")),
            element("section")
                .attr("aria-labelledby", "news")
                .child(element("h2").text("News")),
            element("section")
                .attr("aria-label", "Quote")
                .child(element("div").child(element("h2").text("Nested"))),
        ]);
        assert_eq!(
            reports(&SectionElementRule, &doc),
            [
                "sectionHaveAccessibleName at <section>@0",
                "sectionHaveHeading at <section>@0",
                "sectionHaveHeading at <section>@6",
            ]
        );
    }
}

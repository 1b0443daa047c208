//! A lint rule for abbreviations.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the abbr element rule.
const ID: &str = "abbr-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("abbrElementMissingTitleAttribute")
        .combined("❌ abbr element missing title attribute")
        .error("❌ abbr element missing title attribute"),
];

/// Detects abbreviations without an expansion.
#[derive(Default, Debug, Clone, Copy)]
pub struct AbbrElementRule;

impl Rule for AbbrElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that abbreviations carry their expansion in a `title`."
    }

    fn explanation(&self) -> &'static str {
        "The `title` of an `abbr` gives the expanded form of the abbreviation."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Understandable])
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Combined, Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("abbr")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let title = element.value("title");
        if !title.has_value() || title.is_blank() {
            cx.report("abbrElementMissingTitleAttribute", element.location());
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
    fn abbreviations() {
        let doc = document([
            element("abbr").text("WHO"),
            element("abbr").attr("title", " ").text("UN"),
            element("abbr")
                .attr("title", "HyperText Markup Language")
                .text("HTML"),
            element("abbr").dynamic("title").text("CSS"),
        ]);
        assert_eq!(
            reports(&AbbrElementRule, &doc),
            [
                "abbrElementMissingTitleAttribute at <abbr>@0",
                "abbrElementMissingTitleAttribute at <abbr>@2",
            ]
        );
    }
}

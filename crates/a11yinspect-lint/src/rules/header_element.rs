//! A lint rule for `header` elements.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the header element rule.
const ID: &str = "header-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("multipleBannerLandmarksFound")
        .combined("💡 Multiple banner landmarks found")
        .warning("💡 Multiple banner landmarks found"),
];

/// Detects pages with more than one banner landmark.
#[derive(Default, Debug, Clone, Copy)]
pub struct HeaderElementRule;

impl Rule for HeaderElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Flags pages with more than one banner landmark."
    }

    fn explanation(&self) -> &'static str {
        "A `header` that is not scoped to a section is exposed as the page's banner landmark. A \
         page should have only one; give additional headers a different role or scope them \
         inside a sectioning element."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable, Tag::BestPractice])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["footer-element", "landmark-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Combined, Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("header")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let role = element.value("role");
        let is_banner = role.is_absent() || role.as_str() == Some("banner");
        if is_banner && cx.state().header_count() > 1 {
            cx.report("multipleBannerLandmarksFound", element.location());
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
    fn repeated_banner() {
        let doc = document([
            element("header"),
            element("header").attr("role", "banner"),
            element("header").attr("role", "group"),
            element("header"),
        ]);
        assert_eq!(
            reports(&HeaderElementRule, &doc),
            [
                "multipleBannerLandmarksFound at <header>@1",
                "multipleBannerLandmarksFound at <header>@3",
            ]
        );
    }

    #[test]
    fn single_header() {
        let doc = document([element("header").text("Site")]);
        assert!(reports(&HeaderElementRule, &doc).is_empty());
    }
}

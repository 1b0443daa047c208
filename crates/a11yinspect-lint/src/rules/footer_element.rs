//! A lint rule for `footer` elements.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the footer element rule.
const ID: &str = "footer-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("multipleContentinfoLandmarksFound")
        .warning("💡 Multiple contentinfo landmarks found"),
];

/// Detects pages with more than one contentinfo landmark.
#[derive(Default, Debug, Clone, Copy)]
pub struct FooterElementRule;

impl Rule for FooterElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Flags pages with more than one contentinfo landmark."
    }

    fn explanation(&self) -> &'static str {
        "A page-level `footer` is exposed as the contentinfo landmark, of which a page should \
         have only one."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable, Tag::BestPractice])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["header-element", "landmark-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("footer")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let role = element.value("role");
        let is_contentinfo = role.is_absent() || role.as_str() == Some("contentinfo");
        if is_contentinfo && cx.state().footer_count() > 1 {
            cx.report("multipleContentinfoLandmarksFound", element.location());
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
    fn repeated_contentinfo() {
        let doc = document([
            element("footer"),
            element("footer").dynamic("role"),
            element("footer").attr("role", "contentinfo"),
        ]);
        assert_eq!(
            reports(&FooterElementRule, &doc),
            ["multipleContentinfoLandmarksFound at <footer>@2"]
        );
    }
}

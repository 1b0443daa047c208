//! A lint rule for landmark regions.

use a11yinspect_ast::Element;
use a11yinspect_ast::Location;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the landmark element rule.
const ID: &str = "landmark-element";

/// The landmark roles that may appear more than once on a page and so need
/// a name to be told apart.
const REPEATABLE_LANDMARKS: &[&str] = &["navigation", "complementary", "region"];

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("pageHaveMainLandmark")
        .combined("⚠️ Page should have main landmark"),
    Message::new("multipleMainLandmarksFound")
        .combined("💡 Multiple main landmarks found")
        .warning("💡 Multiple main landmarks found"),
    Message::new("landmarkMissingAccessibleName")
        .combined("❌ Landmark missing accessible name")
        .error("❌ Landmark missing accessible name")
        .warning("⚠️ [Minor] Landmark missing accessible name (1.3.1 A)"),
];

/// Detects missing, repeated and unnamed landmarks.
#[derive(Default, Debug, Clone, Copy)]
pub struct LandmarkElementRule;

impl Rule for LandmarkElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that a page has a single main landmark and that repeatable landmarks are named."
    }

    fn explanation(&self) -> &'static str {
        "Landmarks let screen reader users jump straight to the regions of a page. Every page \
         should have exactly one main landmark. Navigation, complementary and region landmarks \
         may appear several times, so each needs an `aria-label` or `aria-labelledby` to tell \
         them apart."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable, Tag::Operable])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Understanding/bypass-blocks.html")
    }

    fn related_rules(&self) -> &[&'static str] {
        &["header-element", "footer-element", "section-element", "skip-link"]
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("main") || resolve::literal_role(element).is_some()
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let role = resolve::literal_role(element);

        if (element.is("main") || role == Some("main")) && cx.state().main_count() > 1 {
            cx.report("multipleMainLandmarksFound", element.location());
        }

        if role.is_some_and(|r| REPEATABLE_LANDMARKS.contains(&r)) && resolve::missing_label(element)
        {
            cx.report("landmarkMissingAccessibleName", element.location());
        }
    }

    fn finalize(&self, cx: &mut Context<'_>) {
        if cx.state().main_count() == 0 {
            cx.report("pageHaveMainLandmark", Location::Document);
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
    fn missing_main() {
        let doc = document([element("div").text("content")]);
        assert_eq!(
            reports(&LandmarkElementRule, &doc),
            ["pageHaveMainLandmark at document"]
        );
    }

    #[test]
    fn repeated_main() {
        let doc = document([element("main"), element("div").attr("role", "main")]);
        assert_eq!(
            reports(&LandmarkElementRule, &doc),
            ["multipleMainLandmarksFound at <div>@1"]
        );
    }

    #[test]
    fn unnamed_landmarks() {
        let doc = document([
            element("main"),
            element("nav"),
            element("nav").attr("role", "navigation"),
            element("div")
                .attr("role", "region")
                .attr("aria-label", "Filters"),
            element("div").attr("role", "complementary"),
        ]);
        assert_eq!(
            reports(&LandmarkElementRule, &doc),
            [
                "landmarkMissingAccessibleName at <nav>@2",
                "landmarkMissingAccessibleName at <div>@4",
            ]
        );
    }
}

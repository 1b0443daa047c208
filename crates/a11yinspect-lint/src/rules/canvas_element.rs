//! A lint rule for `canvas` elements.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the canvas element rule.
const ID: &str = "canvas-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("canvasMissingRoleImg")
        .combined("❌ Canvas element missing role=\"img\" attribute")
        .error("❌ Canvas element missing role=\"img\" attribute"),
    Message::new("canvasDecorative")
        .combined("💡 Canvas marked as decorative - verify if informative or decorative")
        .warning("⚠️ [Minor] Canvas marked as decorative - verify if informative or decorative (1.1.1 A)"),
    Message::new("canvasMissingDescription")
        .combined("⚠️ Canvas with role=\"img\" missing accessible description (no aria-label, aria-labelledby, or text content)")
        .warning("⚠️ [Blocker] Canvas with role=\"img\" missing accessible description (no aria-label, aria-labelledby, or text content) (1.1.1 A)"),
    Message::new("canvasHasDescription")
        .combined("💡 Canvas element has accessible description - verify it is accurate")
        .warning("⚠️ [Major] Canvas element has accessible description - verify it is accurate (1.1.1 A)"),
];

/// Detects canvases that are neither described nor marked as decorative.
#[derive(Default, Debug, Clone, Copy)]
pub struct CanvasElementRule;

impl Rule for CanvasElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that canvases are exposed as images with a description, or marked decorative."
    }

    fn explanation(&self) -> &'static str {
        "A `canvas` is a bitmap that assistive technology cannot read. An informative canvas \
         should have `role=\"img\"` and a label, or fallback content between its tags that \
         describes what it draws."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["img-element", "svg-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("canvas")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if resolve::is_decorative(element) {
            cx.report("canvasDecorative", element.location());
            return;
        }

        let has_fallback = !element.text().is_empty();
        if resolve::literal_role(element) == Some("img") {
            if resolve::has_label(element) || has_fallback {
                cx.report("canvasHasDescription", element.location());
            } else {
                cx.report("canvasMissingDescription", element.location());
            }
        } else if has_fallback {
            cx.report("canvasHasDescription", element.location());
        } else {
            cx.report("canvasMissingRoleImg", element.location());
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
    fn canvas_checks() {
        let doc = document([
            element("canvas"),
            element("canvas").attr("role", "img"),
            element("canvas")
                .attr("role", "img")
                .attr("aria-label", "Sales chart"),
            element("canvas").text("Sales rose 5% in May"),
            element("canvas").attr("role", "presentation"),
        ]);
        assert_eq!(
            reports(&CanvasElementRule, &doc),
            [
                "canvasMissingRoleImg at <canvas>@0",
                "canvasMissingDescription at <canvas>@1",
                "canvasHasDescription at <canvas>@2",
                "canvasHasDescription at <canvas>@3",
                "canvasDecorative at <canvas>@5",
            ]
        );
    }
}

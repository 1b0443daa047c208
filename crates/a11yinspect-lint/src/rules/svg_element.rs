//! A lint rule for inline `svg` graphics.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::knowledge::phrases;
use crate::resolve;

/// The identifier for the svg element rule.
const ID: &str = "svg-element";

/// The roles that expose an `svg` as a graphic.
const GRAPHIC_ROLES: &[&str] = &["img", "graphics-document", "graphics-symbol"];

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("svgMissingName")
        .combined("❌ SVG missing accessible name")
        .error("❌ SVG missing accessible name"),
    Message::new("svgShouldHaveRoleImg")
        .combined("⚠️ SVG should have role img")
        .warning("⚠️ SVG should have role img"),
    Message::new("svgMissingRole")
        .combined("❌ SVG missing role (no role=\"img\", \"graphics-document\", or \"graphics-symbol\")")
        .error("❌ SVG missing role (no role=\"img\", \"graphics-document\", or \"graphics-symbol\")")
        .warning("💡 [Best Practice] SVG missing role (no role=\"img\", \"graphics-document\", or \"graphics-symbol\") (4.1.2 A)"),
    Message::new("svgAriaLabelNoRole")
        .combined("💡 SVG has aria-label but no appropriate role attribute")
        .warning("💡 SVG has aria-label but no appropriate role attribute"),
    Message::new("svgRoleImgNoDescription")
        .combined("⚠️ SVG with role=\"img\" missing accessible description (no aria-label, title child, or aria-labelledby)")
        .warning("⚠️ [Major] SVG with role=\"img\" missing accessible description (no aria-label, title child, or aria-labelledby) (1.1.1 A)"),
    Message::new("svgGenericDescription")
        .combined("⚠️ SVG accessible description uses generic text")
        .warning("⚠️ [Minor] SVG accessible description uses generic text (1.1.1 A)"),
];

/// Detects informative `svg` graphics that are not exposed as images.
#[derive(Default, Debug, Clone, Copy)]
pub struct SvgElementRule;

impl Rule for SvgElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that inline SVG graphics have a graphic role and an accessible name."
    }

    fn explanation(&self) -> &'static str {
        "Assistive technology handles an inline `svg` inconsistently unless it declares \
         `role=\"img\"` (or another graphics role) and is named through `aria-label`, \
         `aria-labelledby` or a `title` child. A purely decorative graphic should instead be \
         hidden with `aria-hidden=\"true\"`."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["img-element", "button-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("svg")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if resolve::is_decorative(element) {
            return;
        }

        let label = element.attribute("aria-label");
        let has_label = label.is_some_and(|l| l.value().has_value());
        let has_labelledby = element.value("aria-labelledby").has_value();
        let has_title = element.child_elements().any(|c| c.is("title"));
        let role = resolve::literal_role(element);
        let has_graphic_role = role.is_some_and(|r| GRAPHIC_ROLES.contains(&r));

        if !has_graphic_role {
            cx.report("svgMissingRole", element.location());
            if has_label {
                cx.report("svgAriaLabelNoRole", element.location());
            }
        }

        let named = has_label || has_labelledby || has_title;
        if role == Some("img") && !named {
            cx.report("svgRoleImgNoDescription", element.location());
        }

        if let Some(label) = label {
            if label
                .value()
                .as_str()
                .is_some_and(|t| phrases::matches(phrases::GENERIC_IMAGE_TEXT, t))
            {
                cx.report("svgGenericDescription", label.location());
            }
        }

        if !named {
            cx.report("svgMissingName", element.location());
        }

        let role_value = element.value("role");
        if role_value.is_absent() || (role_value.literal().is_some() && role != Some("img")) {
            cx.report("svgShouldHaveRoleImg", element.location());
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
    fn unnamed_svg() {
        let doc = document([element("svg")]);
        assert_eq!(
            reports(&SvgElementRule, &doc),
            [
                "svgMissingRole at <svg>@0",
                "svgMissingName at <svg>@0",
                "svgShouldHaveRoleImg at <svg>@0",
            ]
        );
    }

    #[test]
    fn labelled_without_role() {
        let doc = document([element("svg").attr("aria-label", "icon")]);
        assert_eq!(
            reports(&SvgElementRule, &doc),
            [
                "svgMissingRole at <svg>@0",
                "svgAriaLabelNoRole at <svg>@0",
                "svgShouldHaveRoleImg at <svg>@0",
                "svgGenericDescription at <svg>@0[aria-label]",
            ]
        );
    }

    #[test]
    fn image_role() {
        let doc = document([
            element("svg").attr("role", "img"),
            element("svg")
                .attr("role", "img")
                .child(element("title").text("Sales by region")),
            element("svg").attr("aria-hidden", "true"),
        ]);
        assert_eq!(
            reports(&SvgElementRule, &doc),
            [
                "svgRoleImgNoDescription at <svg>@0",
                "svgMissingName at <svg>@0",
            ]
        );
    }

    #[test]
    fn decorative_svg() {
        let doc = document([
            element("svg").attr("role", "presentation"),
            element("svg").attr("role", "none"),
            element("svg").attr("aria-hidden", "true"),
        ]);
        assert!(reports(&SvgElementRule, &doc).is_empty());
    }
}

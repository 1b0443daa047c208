//! A lint rule for the properties an ARIA role requires and supports.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::knowledge::aria;
use crate::resolve;

/// The identifier for the role props element rule.
const ID: &str = "role-props-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("roleMissingRequiredProp")
        .combined("❌ Role requires aria property that is missing")
        .error("❌ [Major] Role requires aria property that is missing (4.1.2 A)"),
    Message::new("roleUnsupportedProp")
        .combined("⚠️ ARIA property is not supported by this role")
        .warning("⚠️ ARIA property is not supported by this role"),
];

/// Detects roles missing required properties or carrying unsupported ones.
#[derive(Default, Debug, Clone, Copy)]
pub struct RolePropsElementRule;

impl Rule for RolePropsElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that roles carry the properties they require and no unsupported ones."
    }

    fn explanation(&self) -> &'static str {
        "Some roles cannot be understood without their state: a checkbox needs `aria-checked` \
         and a slider needs `aria-valuenow`. Properties that a role does not support are \
         ignored by assistive technology and usually point to a mistaken role."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Robust])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/TR/wai-aria-1.2/#requiredState")
    }

    fn related_rules(&self) -> &[&'static str] {
        &["aria-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        resolve::literal_role(element).is_some_and(|r| !r.is_empty())
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let Some(role) = resolve::literal_role(element) else {
            return;
        };

        if aria::required_properties(role).is_some_and(|props| props.iter().any(|p| !element.has(p)))
        {
            cx.report("roleMissingRequiredProp", element.location());
        }

        for attribute in element
            .attributes()
            .filter(|a| a.name().starts_with("aria-"))
        {
            if aria::supports_property(role, attribute.name()) == Some(false) {
                cx.report("roleUnsupportedProp", attribute.location());
            }
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
    fn required_properties() {
        let doc = document([
            element("div").attr("role", "checkbox"),
            element("div")
                .attr("role", "checkbox")
                .attr("aria-checked", "false"),
            element("div").attr("role", "scrollbar"),
            element("div").attr("role", "separator"),
        ]);
        assert_eq!(
            reports(&RolePropsElementRule, &doc),
            [
                "roleMissingRequiredProp at <div>@0",
                "roleMissingRequiredProp at <div>@2",
            ]
        );
    }

    #[test]
    fn unsupported_properties() {
        let doc = document([
            element("div")
                .attr("role", "img")
                .attr("aria-label", "Chart")
                .attr("aria-checked", "true"),
            element("div")
                .attr("role", "article")
                .attr("aria-checked", "true"),
        ]);
        assert_eq!(
            reports(&RolePropsElementRule, &doc),
            ["roleUnsupportedProp at <div>@0[aria-checked]"]
        );
    }
}

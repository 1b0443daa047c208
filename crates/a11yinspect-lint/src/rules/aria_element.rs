//! A lint rule for ARIA roles, states and properties.

use a11yinspect_ast::Element;
use a11yinspect_ast::Literal;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::knowledge::aria;
use crate::knowledge::html;
use crate::resolve;

/// The identifier for the aria element rule.
const ID: &str = "aria-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("emptyAriaLabelAttribute")
        .error("❌ Empty aria-label attribute"),
    Message::new("invalidAriaRole")
        .error("❌ Invalid ARIA role"),
    Message::new("ariaInvalidProp")
        .error("❌ Invalid ARIA attribute (unknown aria-* property)"),
    Message::new("ariaHiddenFocusableElement")
        .warning("⚠️ aria-hidden on focusable element"),
    Message::new("ariaRoleRedundant")
        .warning("💡 Element has ARIA role that matches its implicit default role"),
    Message::new("ariaInvalidPropValue")
        .warning("⚠️ Invalid value for ARIA attribute"),
    Message::new("preferSemanticElement")
        .warning("💡 Prefer semantic HTML element over ARIA role"),
    Message::new("noninteractiveElementInteractiveRole")
        .warning("⚠️ Non-interactive element should not have interactive ARIA role"),
    Message::new("interactiveElementNoninteractiveRole")
        .warning("⚠️ Interactive element should not have non-interactive ARIA role"),
];

/// Determines if an element is a generic container.
fn is_generic(element: &Element<'_>) -> bool {
    element.is_any(&["div", "span"])
}

/// Detects invalid ARIA attributes and roles that conflict with the element
/// they are placed on.
#[derive(Default, Debug, Clone, Copy)]
pub struct AriaElementRule;

impl AriaElementRule {
    /// Checks the names and values of the `aria-*` attributes.
    fn check_properties(cx: &mut Context<'_>, element: &Element<'_>) {
        for attribute in element.attributes() {
            let name = attribute.name();
            if !name.starts_with("aria-") {
                continue;
            }

            if !aria::is_property(name) {
                cx.report("ariaInvalidProp", attribute.location());
                continue;
            }

            let Some(literal) = attribute.value().literal().filter(|l| **l != Literal::Null)
            else {
                continue;
            };

            let value = literal.to_string();
            if aria::value_type(name).is_some_and(|ty| !ty.accepts(&value)) {
                cx.report("ariaInvalidPropValue", attribute.location());
            }
        }

        if let Some(label) = element.attribute("aria-label") {
            if label
                .value()
                .literal()
                .is_some_and(|l| !l.is_truthy() || l.is_blank())
            {
                cx.report("emptyAriaLabelAttribute", label.location());
            }
        }
    }

    /// Checks the `role` attribute against the element it is placed on.
    fn check_role(cx: &mut Context<'_>, element: &Element<'_>) {
        let Some(attribute) = element.attribute("role") else {
            return;
        };

        let Some(role) = attribute.value().as_str().filter(|r| !r.is_empty()) else {
            return;
        };

        if !aria::is_role(role) {
            cx.report("invalidAriaRole", attribute.location());
            return;
        }

        if resolve::resolve_role(element).implicit == Some(role) {
            cx.report("ariaRoleRedundant", attribute.location());
        }

        if is_generic(element) && html::semantic_element(role).is_some() {
            cx.report("preferSemanticElement", attribute.location());
        }

        if element.is_any(html::NONINTERACTIVE_ELEMENTS)
            && !is_generic(element)
            && aria::is_interactive_role(role)
        {
            cx.report("noninteractiveElementInteractiveRole", attribute.location());
        }

        if element.is_any(html::INTERACTIVE_ELEMENTS)
            && aria::is_noninteractive_role(role)
            && !matches!(role, "presentation" | "none")
        {
            cx.report("interactiveElementNoninteractiveRole", attribute.location());
        }
    }
}

impl Rule for AriaElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that ARIA attributes and roles are valid and fit the element."
    }

    fn explanation(&self) -> &'static str {
        "Assistive technology ignores unknown `aria-*` attributes and roles, and misreports \
         attributes whose values are outside their allowed type. Roles should also agree with \
         the element: a role equal to the native one is redundant, a generic container with a \
         role usually has a native element that does the job better, and swapping interactive \
         and non-interactive semantics confuses users. Focusable elements must never be hidden \
         with `aria-hidden`."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Robust])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Understanding/name-role-value.html")
    }

    fn related_rules(&self) -> &[&'static str] {
        &["role-props-element", "focus-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Error, Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, _: &Element<'_>) -> bool {
        true
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        Self::check_properties(cx, element);
        Self::check_role(cx, element);

        if let Some(hidden) = element.attribute("aria-hidden") {
            if hidden.value().is_true() && element.is_any(html::NATIVE_FOCUSABLE) {
                cx.report("ariaHiddenFocusableElement", hidden.location());
            }
        }
    }
}

//! Resolution of roles, accessible names and focusability.

use std::borrow::Cow;

use a11yinspect_ast::Attribute;
use a11yinspect_ast::AttributeValue;
use a11yinspect_ast::Element;
use a11yinspect_ast::Literal;
use a11yinspect_ast::NodeRef;

use crate::knowledge::aria;
use crate::knowledge::html;

/// The role of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRole<'a> {
    /// The valid literal `role` attribute, if any.
    pub explicit: Option<&'a str>,
    /// The implicit role of the native element, if any.
    pub implicit: Option<&'static str>,
}

impl<'a> ResolvedRole<'a> {
    /// Gets the effective role: the explicit role if valid, else the implicit
    /// role.
    pub fn effective(&self) -> Option<&'a str> {
        self.explicit.or(self.implicit)
    }
}

/// Gets the literal string value of the `role` attribute, valid or not.
pub fn literal_role<'a>(element: &Element<'a>) -> Option<&'a str> {
    element.value("role").as_str()
}

/// Resolves the role of an element.
pub fn resolve_role<'a>(element: &Element<'a>) -> ResolvedRole<'a> {
    let explicit = literal_role(element).filter(|r| aria::is_role(r));
    let implicit = html::implicit_role(element.name(), element.value("type").as_str());
    ResolvedRole { explicit, implicit }
}

/// The source an accessible name was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    /// The `aria-label` attribute.
    AriaLabel,
    /// The `aria-labelledby` attribute.
    AriaLabelledby,
    /// The element's text content.
    TextContent,
    /// The `alt` attribute.
    Alt,
    /// A `title` child element or attribute.
    Title,
    /// No source produced a name.
    None,
}

/// The accessible name of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibleName<'a> {
    /// Where the name came from.
    pub source: NameSource,
    /// The name, when it is statically known.
    ///
    /// A name from a dynamic source is present but has no known value.
    pub value: Option<Cow<'a, str>>,
}

impl AccessibleName<'_> {
    /// The absent name.
    const NONE: Self = Self {
        source: NameSource::None,
        value: None,
    };

    /// Determines if the element has an accessible name.
    pub fn is_present(&self) -> bool {
        self.source != NameSource::None
    }
}

/// Resolves a non-blank attribute value to a name.
///
/// Dynamic values are names with an unknown value.
fn attribute_name<'a>(value: AttributeValue<'a>) -> Option<Option<Cow<'a, str>>> {
    match value {
        AttributeValue::Dynamic => Some(None),
        AttributeValue::Literal(literal) => {
            let text = literal.to_text();
            if text.trim().is_empty() {
                None
            } else {
                Some(Some(text))
            }
        }
        AttributeValue::Absent | AttributeValue::Bare => None,
    }
}

/// Computes the accessible name of an element.
///
/// The sources are tried in a fixed order and the first that produces a name
/// wins:
///
/// 1. a non-blank `aria-label`;
/// 2. an `aria-labelledby` with any value (the referenced ids are not
///    resolved);
/// 3. the element's native source: `alt` for images, text content for links,
///    buttons, headings and labels, a `title` child for `svg` and the `title`
///    attribute for `iframe`.
pub fn accessible_name<'a>(element: &Element<'a>) -> AccessibleName<'a> {
    if let Some(value) = attribute_name(element.value("aria-label")) {
        return AccessibleName {
            source: NameSource::AriaLabel,
            value,
        };
    }

    let labelledby = element.value("aria-labelledby");
    if labelledby.has_value() {
        return AccessibleName {
            source: NameSource::AriaLabelledby,
            value: labelledby.literal().map(|l| l.to_text()),
        };
    }

    let name = element.name();
    let is_image_input = name == "input" && element.value("type").as_str() == Some("image");
    if matches!(name, "img" | "area") || is_image_input {
        return match attribute_name(element.value("alt")) {
            Some(value) => AccessibleName {
                source: NameSource::Alt,
                value,
            },
            None => AccessibleName::NONE,
        };
    }

    if matches!(name, "a" | "button" | "label") || html::heading_level(name).is_some() {
        let text = element.text();
        if text.is_empty() {
            return AccessibleName::NONE;
        }

        return AccessibleName {
            source: NameSource::TextContent,
            value: text.exact().map(|t| Cow::Owned(t.to_string())),
        };
    }

    if name == "svg" {
        let title = element.child_elements().find(|c| c.is("title"));
        return match title.map(|t| t.text()) {
            Some(text) if !text.is_empty() => AccessibleName {
                source: NameSource::Title,
                value: text.exact().map(|t| Cow::Owned(t.to_string())),
            },
            _ => AccessibleName::NONE,
        };
    }

    if name == "iframe" {
        if let Some(value) = attribute_name(element.value("title")) {
            return AccessibleName {
                source: NameSource::Title,
                value,
            };
        }
    }

    AccessibleName::NONE
}

/// Determines if an element is labelled through `aria-label` or
/// `aria-labelledby`.
pub fn has_label(element: &Element<'_>) -> bool {
    matches!(
        accessible_name(element).source,
        NameSource::AriaLabel | NameSource::AriaLabelledby
    )
}

/// Determines if an element is hidden with a literal `aria-hidden="true"`.
pub fn is_hidden(element: &Element<'_>) -> bool {
    element.value("aria-hidden").is_true()
}

/// Determines if an element is marked as decorative.
///
/// Decorative elements have a literal `presentation` or `none` role or are
/// hidden from assistive technology.
pub fn is_decorative(element: &Element<'_>) -> bool {
    matches!(literal_role(element), Some("presentation" | "none")) || is_hidden(element)
}

/// Determines if an element that must be named lacks an `aria-label` or
/// `aria-labelledby`.
///
/// Decorative elements are never required to have a name.
pub fn missing_label(element: &Element<'_>) -> bool {
    !is_decorative(element) && !has_label(element)
}

/// Gets the `tabIndex` attribute of an element, falling back to `tabindex`.
pub fn tab_index<'a>(element: &Element<'a>) -> Option<Attribute<'a>> {
    element
        .attribute("tabIndex")
        .or_else(|| element.attribute("tabindex"))
}

/// Determines if an element has any content: non-blank text, a child
/// element or an expression.
pub fn has_content(element: &Element<'_>) -> bool {
    element.children().any(|child| match child {
        NodeRef::Text(text) => !text.trim().is_empty(),
        NodeRef::Element(_) | NodeRef::Expression(_) => true,
    })
}

/// Determines if an element is focusable.
///
/// Natively focusable elements always are; any other element is focusable
/// when it carries a tab index, whatever its value.
pub fn is_focusable(element: &Element<'_>) -> bool {
    element.is_any(html::NATIVE_FOCUSABLE) || tab_index(element).is_some()
}

/// Determines if an attribute has a literal value outside a set of tokens.
///
/// Booleans compare as `true` and `false`. A `null` literal, a bare attribute
/// and a dynamic value are never outside the set.
pub fn is_invalid_token(value: AttributeValue<'_>, tokens: &[&str]) -> bool {
    match value.literal() {
        Some(Literal::Null) | None => false,
        Some(literal) => !tokens.contains(&literal.to_string().as_str()),
    }
}

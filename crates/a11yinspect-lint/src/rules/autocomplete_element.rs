//! A lint rule for autocomplete on personal-data inputs.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the autocomplete element rule.
const ID: &str = "autocomplete-element";

/// The input types that never collect personal data.
const EXCLUDED_TYPES: &[&str] = &["hidden", "submit", "button", "reset", "checkbox", "radio"];

/// The name fragments that mark an input as collecting personal data.
const PERSONAL_DATA: &[&str] = &[
    "email",
    "tel",
    "url",
    "password",
    "name",
    "street-address",
    "postal-code",
    "cc-number",
    "cc-exp",
    "cc-csc",
];

/// The autofill detail tokens.
const AUTOFILL_TOKENS: &[&str] = &[
    "name",
    "honorific-prefix",
    "given-name",
    "additional-name",
    "family-name",
    "honorific-suffix",
    "nickname",
    "email",
    "username",
    "new-password",
    "current-password",
    "organization-title",
    "organization",
    "street-address",
    "address-line1",
    "address-line2",
    "address-line3",
    "address-level4",
    "address-level3",
    "address-level2",
    "address-level1",
    "country",
    "country-name",
    "postal-code",
    "cc-name",
    "cc-given-name",
    "cc-additional-name",
    "cc-family-name",
    "cc-number",
    "cc-exp",
    "cc-exp-month",
    "cc-exp-year",
    "cc-csc",
    "cc-type",
    "transaction-currency",
    "transaction-amount",
    "language",
    "bday",
    "bday-day",
    "bday-month",
    "bday-year",
    "sex",
    "tel",
    "tel-country-code",
    "tel-national",
    "tel-area-code",
    "tel-local",
    "tel-extension",
    "url",
    "photo",
];

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("inputHaveAutocompleteAttribute")
        .combined("⚠️ Input should have autocomplete attribute")
        .warning("⚠️ [Major] Input should have autocomplete attribute (1.3.5 AA)"),
    Message::new("invalidAutocompleteValue")
        .combined("❌ Invalid autocomplete value")
        .error("❌ Invalid autocomplete value"),
];

/// Determines if an input collects personal data.
fn collects_personal_data(element: &Element<'_>) -> bool {
    let ty = element.value("type").as_str().unwrap_or("text");
    if EXCLUDED_TYPES.contains(&ty) {
        return false;
    }

    element.value("name").as_str().is_some_and(|name| {
        let name = name.to_lowercase();
        PERSONAL_DATA.iter().any(|token| name.contains(token))
    })
}

/// Detects personal-data inputs without a valid `autoComplete` value.
#[derive(Default, Debug, Clone, Copy)]
pub struct AutocompleteElementRule;

impl Rule for AutocompleteElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that inputs collecting personal data declare their purpose."
    }

    fn explanation(&self) -> &'static str {
        "An `autoComplete` token tells browsers and assistive technology what an input is for, \
         so that it can be filled in automatically or presented with familiar icons. This \
         matters most to users with motor or cognitive disabilities. The value must be `on`, \
         `off` or one of the standard autofill tokens."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable, Tag::Understandable])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Understanding/identify-input-purpose.html")
    }

    fn related_rules(&self) -> &[&'static str] {
        &["input-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("input") && collects_personal_data(element)
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let Some(autocomplete) = element.attribute("autoComplete") else {
            cx.report("inputHaveAutocompleteAttribute", element.location());
            return;
        };

        let Some(value) = autocomplete.value().as_str().filter(|v| !v.is_empty()) else {
            return;
        };

        if !matches!(value, "on" | "off") && !AUTOFILL_TOKENS.contains(&value) {
            cx.report("invalidAutocompleteValue", autocomplete.location());
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
    fn personal_data() {
        let doc = document([
            element("input").attr("name", "userEmail"),
            element("input")
                .attr("name", "email")
                .attr("autoComplete", "mail"),
            element("input")
                .attr("name", "email")
                .attr("autoComplete", "email"),
            element("input").attr("type", "checkbox").attr("name", "name"),
            element("input").attr("name", "quantity"),
        ]);
        assert_eq!(
            reports(&AutocompleteElementRule, &doc),
            [
                "inputHaveAutocompleteAttribute at <input>@0",
                "invalidAutocompleteValue at <input>@1[autoComplete]",
            ]
        );
    }
}

//! A lint rule for accessible descriptions.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the description element rule.
const ID: &str = "description-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("elementAriaDescribedbyReferencesNon")
        .combined("⚠️ Element with aria-describedby references non-existent id")
        .warning("⚠️ Element with aria-describedby references non-existent id"),
    Message::new("ariaDescriptionEmpty")
        .combined("❌ aria-description is empty")
        .error("❌ [Minor] aria-description is empty (4.1.2 A)"),
];

/// Detects empty `aria-description` and `aria-describedby` attributes.
#[derive(Default, Debug, Clone, Copy)]
pub struct DescriptionElementRule;

impl Rule for DescriptionElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that description attributes are not empty."
    }

    fn explanation(&self) -> &'static str {
        "An empty `aria-description` describes nothing and an empty `aria-describedby` \
         references nothing; both should be removed or filled in."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Robust])
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.has("aria-description") || element.has("aria-describedby")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        for attribute in element.attributes() {
            let key = match attribute.name() {
                "aria-description" => "ariaDescriptionEmpty",
                "aria-describedby" => "elementAriaDescribedbyReferencesNon",
                _ => continue,
            };

            let value = attribute.value();
            if value.is_falsy() || value.is_blank() {
                cx.report(key, attribute.location());
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
    fn empty_descriptions() {
        let doc = document([
            element("div").attr("aria-description", ""),
            element("div").attr("aria-describedby", "  "),
            element("div")
                .attr("aria-description", "Opens in a new tab")
                .dynamic("aria-describedby"),
        ]);
        assert_eq!(
            reports(&DescriptionElementRule, &doc),
            [
                "ariaDescriptionEmpty at <div>@0[aria-description]",
                "elementAriaDescribedbyReferencesNon at <div>@1[aria-describedby]",
            ]
        );
    }
}

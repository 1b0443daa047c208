//! A lint rule for contact information.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the address element rule.
const ID: &str = "address-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("addressElementEmpty")
        .error("❌ address element is empty"),
];

/// Detects empty `address` elements.
#[derive(Default, Debug, Clone, Copy)]
pub struct AddressElementRule;

impl Rule for AddressElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that `address` elements contain contact information."
    }

    fn explanation(&self) -> &'static str {
        "An empty `address` announces contact information that is not there."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable])
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("address")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if element.text().is_empty() {
            cx.report("addressElementEmpty", element.location());
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
    fn addresses() {
        let doc = document([
            element("address").child(element("span").text(" ")),
            element("address").child(element("a").attr("href", "mailto:a@b.c").text("Mail us")),
            element("address").dynamic_text(),
        ]);
        assert_eq!(
            reports(&AddressElementRule, &doc),
            ["addressElementEmpty at <address>@0"]
        );
    }
}

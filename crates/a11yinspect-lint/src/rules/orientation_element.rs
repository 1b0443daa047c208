//! A lint rule for `aria-orientation`.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the orientation element rule.
const ID: &str = "orientation-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("invalidAriaOrientationValue")
        .combined("❌ Invalid aria-orientation value")
        .error("❌ Invalid aria-orientation value"),
];

/// Detects invalid `aria-orientation` values.
#[derive(Default, Debug, Clone, Copy)]
pub struct OrientationElementRule;

impl Rule for OrientationElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that `aria-orientation` is `horizontal` or `vertical`."
    }

    fn explanation(&self) -> &'static str {
        "The orientation of a slider, scrollbar, list box or similar widget tells users which \
         arrow keys operate it."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Robust])
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Combined, Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.value("aria-orientation").is_truthy()
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if let Some(orientation) = element.attribute("aria-orientation") {
            if resolve::is_invalid_token(orientation.value(), &["horizontal", "vertical"]) {
                cx.report("invalidAriaOrientationValue", orientation.location());
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
    fn orientation() {
        let doc = document([
            element("div").attr("aria-orientation", "diagonal"),
            element("div").attr("aria-orientation", "vertical"),
            element("div").attr("aria-orientation", ""),
        ]);
        assert_eq!(
            reports(&OrientationElementRule, &doc),
            ["invalidAriaOrientationValue at <div>@0[aria-orientation]"]
        );
    }
}

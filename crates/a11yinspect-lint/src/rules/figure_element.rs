//! A lint rule for figures.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the figure element rule.
const ID: &str = "figure-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("figureMissingFigcaption")
        .error("❌ [Minor] figure missing figcaption (1.1.1 A)"),
];

/// Detects figures without a caption.
#[derive(Default, Debug, Clone, Copy)]
pub struct FigureElementRule;

impl Rule for FigureElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that figures have a caption or a label."
    }

    fn explanation(&self) -> &'static str {
        "A `figcaption` names its `figure` and ties the caption text to the content it \
         describes. A figure without a caption should at least be labelled."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["img-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("figure")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if resolve::has_label(element) {
            return;
        }

        if !element.child_elements().any(|c| c.is("figcaption")) {
            cx.report("figureMissingFigcaption", element.location());
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
    fn figures() {
        let doc = document([
            element("figure").child(element("img").attr("alt", "Chart")),
            element("figure")
                .child(element("img").attr("alt", "Chart"))
                .child(element("figcaption").text("Sales in 2024")),
            element("figure").attr("aria-label", "Sales chart"),
        ]);
        assert_eq!(
            reports(&FigureElementRule, &doc),
            ["figureMissingFigcaption at <figure>@0"]
        );
    }
}

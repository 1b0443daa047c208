//! A lint rule for `progress` elements.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the progress element rule.
const ID: &str = "progress-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("progressMissingAccessibleName")
        .error("❌ [Critical] progress missing accessible name (4.1.2 A)"),
    Message::new("progressMissingMax")
        .error("❌ [Best Practice] progress element missing max attribute (4.1.2 A)"),
    Message::new("progressEmptyMax")
        .error("❌ [Best Practice] progress element has empty max attribute (4.1.2 A)"),
];

/// Detects progress bars without a name or a maximum.
#[derive(Default, Debug, Clone, Copy)]
pub struct ProgressElementRule;

impl Rule for ProgressElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that progress bars have a name and a maximum."
    }

    fn explanation(&self) -> &'static str {
        "Assistive technology announces a progress bar as a percentage of its `max`. Without a \
         name users cannot tell what is progressing."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["meter-element", "slider-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("progress")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if resolve::missing_label(element) {
            cx.report("progressMissingAccessibleName", element.location());
        }

        match element.attribute("max") {
            Some(max) if max.value().has_value() => {
                if max.value().is_blank() {
                    cx.report("progressEmptyMax", max.location());
                }
            }
            _ => cx.report("progressMissingMax", element.location()),
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
    fn progress_checks() {
        let doc = document([
            element("progress"),
            element("progress").attr("aria-label", "Upload").attr("max", " "),
            element("progress").attr("aria-label", "Upload").expr("max", 100),
        ]);
        assert_eq!(
            reports(&ProgressElementRule, &doc),
            [
                "progressMissingAccessibleName at <progress>@0",
                "progressMissingMax at <progress>@0",
                "progressEmptyMax at <progress>@1[max]",
            ]
        );
    }
}

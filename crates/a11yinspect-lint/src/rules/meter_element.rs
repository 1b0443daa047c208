//! A lint rule for `meter` elements.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the meter element rule.
const ID: &str = "meter-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("meterMissingAccessibleName")
        .combined("❌ meter missing accessible name")
        .error("❌ meter missing accessible name"),
    Message::new("meterMissingMinMaxAttributes")
        .combined("❌ meter missing min/max attributes")
        .error("❌ meter missing min/max attributes"),
];

/// Detects meters without a name or a range.
#[derive(Default, Debug, Clone, Copy)]
pub struct MeterElementRule;

impl Rule for MeterElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that meters have a name and an explicit range."
    }

    fn explanation(&self) -> &'static str {
        "A `meter` shows a value within a known range; the range must be declared with `min` and \
         `max`, and the meter needs a label or fallback text to say what it measures."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["progress-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Combined, Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("meter")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if resolve::missing_label(element) && element.text().is_empty() {
            cx.report("meterMissingAccessibleName", element.location());
        }

        if !element.has("min") || !element.has("max") {
            cx.report("meterMissingMinMaxAttributes", element.location());
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
    fn meter_checks() {
        let doc = document([
            element("meter").attr("min", "0"),
            element("meter")
                .attr("min", "0")
                .attr("max", "1")
                .text("Disk usage"),
        ]);
        assert_eq!(
            reports(&MeterElementRule, &doc),
            [
                "meterMissingAccessibleName at <meter>@0",
                "meterMissingMinMaxAttributes at <meter>@0",
            ]
        );
    }
}

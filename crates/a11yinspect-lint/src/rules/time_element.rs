//! A lint rule for machine-readable dates.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the time element rule.
const ID: &str = "time-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("timeElementMissingDatetimeAttribute")
        .error("❌ [Best Practice] time element missing datetime attribute (1.3.1 A)"),
];

/// Detects `time` elements without a `dateTime`.
#[derive(Default, Debug, Clone, Copy)]
pub struct TimeElementRule;

impl Rule for TimeElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that `time` elements carry a machine-readable `dateTime`."
    }

    fn explanation(&self) -> &'static str {
        "Human-readable dates such as \"next Tuesday\" are ambiguous. The `dateTime` attribute \
         gives tools an unambiguous value."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Understandable, Tag::Robust])
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("time")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let date_time = element.value("dateTime");
        if !date_time.has_value() || date_time.is_falsy() {
            cx.report("timeElementMissingDatetimeAttribute", element.location());
        }
    }
}

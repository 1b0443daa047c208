//! A lint rule for `output` elements.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the output element rule.
const ID: &str = "output-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("outputMissingAccessibleName")
        .error("❌ output missing accessible name"),
];

/// Detects unnamed `output` elements.
#[derive(Default, Debug, Clone, Copy)]
pub struct OutputElementRule;

impl Rule for OutputElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that `output` elements have a name."
    }

    fn explanation(&self) -> &'static str {
        "An `output` is a status region announcing the result of a calculation; without a name \
         users hear a bare value with no context."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["live-region"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("output")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if resolve::missing_label(element) && !element.has("name") {
            cx.report("outputMissingAccessibleName", element.location());
        }
    }
}

//! A lint rule for `input` elements.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the input element rule.
const ID: &str = "input-element";

/// The input types that act as buttons and are not submitted by name.
const BUTTON_TYPES: &[&str] = &["submit", "button", "reset"];

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("inputMissingAssociatedLabel")
        .error("❌ Input missing associated label"),
    Message::new("inputMissingTypeAttribute")
        .error("❌ Input missing type attribute"),
    Message::new("inputTypeImageMissingAlt")
        .error("❌ Input[type=image] missing alt attribute"),
    Message::new("inputMissingNameAttribute")
        .error("❌ Input missing name attribute"),
    Message::new("inputPlaceholderLabelSubstitute")
        .warning("⚠️ Input placeholder is not a label substitute"),
];

/// Detects inputs without a type, a name or a label.
#[derive(Default, Debug, Clone, Copy)]
pub struct InputElementRule;

impl Rule for InputElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that inputs declare a type, a name and an associated label."
    }

    fn explanation(&self) -> &'static str {
        "Every visible input needs a label that assistive technology can announce, either a \
         `label` pointing at its `id` or an `aria-label`. A placeholder disappears as soon as the \
         user types and is no substitute. Image inputs need `alt` text, and inputs should declare \
         their `type` and `name` explicitly."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable, Tag::Understandable])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Understanding/labels-or-instructions.html")
    }

    fn related_rules(&self) -> &[&'static str] {
        &["label-element", "textarea-element", "select-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Error, Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("input")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let ty = element.value("type");
        let type_name = ty.as_str().unwrap_or("text");
        if type_name == "hidden" {
            return;
        }

        if ty.is_absent() {
            cx.report("inputMissingTypeAttribute", element.location());
        }

        if type_name == "image" && !element.value("alt").has_value() {
            cx.report("inputTypeImageMissingAlt", element.location());
        }

        if !element.has("name") && !BUTTON_TYPES.contains(&type_name) {
            cx.report("inputMissingNameAttribute", element.location());
        }

        let unlabelled = !element.has("id") && resolve::missing_label(element);
        if unlabelled {
            cx.report("inputMissingAssociatedLabel", element.location());
            if element.has("placeholder") {
                cx.report("inputPlaceholderLabelSubstitute", element.location());
            }
        }
    }
}

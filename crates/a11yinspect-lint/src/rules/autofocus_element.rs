//! A lint rule for `autoFocus`.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the autofocus element rule.
const ID: &str = "autofocus-element";

/// The names of the autofocus attribute.
const AUTOFOCUS_ATTRIBUTES: &[&str] = &["autoFocus", "autofocus"];

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("noAutofocus")
        .warning("⚠️ Avoid using autoFocus - it can disorient screen reader users"),
];

/// Detects elements that take focus when the page loads.
#[derive(Default, Debug, Clone, Copy)]
pub struct AutofocusElementRule;

impl Rule for AutofocusElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Discourages moving focus automatically when a page loads."
    }

    fn explanation(&self) -> &'static str {
        "Autofocus skips screen reader users past the content before the focused control, and \
         can scroll the page unexpectedly."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Operable, Tag::BestPractice])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["focus-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.attribute_any(AUTOFOCUS_ATTRIBUTES).is_some()
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let Some(autofocus) = element.attribute_any(AUTOFOCUS_ATTRIBUTES) else {
            return;
        };

        if autofocus.value().literal().and_then(|l| l.as_bool()) != Some(false) {
            cx.report("noAutofocus", autofocus.location());
        }
    }
}

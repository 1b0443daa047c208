//! A lint rule for `select` elements.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the select element rule.
const ID: &str = "select-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("selectMissingAssociatedLabel")
        .combined("❌ Select missing associated label")
        .error("❌ [Major] Select missing associated label (4.1.2 A)"),
    Message::new("selectMissingNameAttribute")
        .combined("❌ Select missing name attribute")
        .error("❌ [Best Practice] Select missing name attribute (4.1.2 A)"),
    Message::new("selectOptions")
        .combined("❌ Select has no options")
        .error("❌ [Best Practice] Select has no options (4.1.2 A)"),
];

/// Detects unlabelled, unnamed and empty selects.
#[derive(Default, Debug, Clone, Copy)]
pub struct SelectElementRule;

impl Rule for SelectElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that selects have a label, a name and options."
    }

    fn explanation(&self) -> &'static str {
        "A `select` needs a label (through its `id` or an `aria-label`) so that users know what \
         they are choosing, a `name` to be submitted with its form, and `option` children to \
         choose from."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable, Tag::Understandable])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["input-element", "optgroup-element", "selected-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Combined, Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("select")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if !element.has("id") && resolve::missing_label(element) {
            cx.report("selectMissingAssociatedLabel", element.location());
        }

        if !element.has("name") {
            cx.report("selectMissingNameAttribute", element.location());
        }

        if !element.child_elements().any(|c| c.is("option")) {
            cx.report("selectOptions", element.location());
        }
    }
}

//! A lint rule for forms and fieldsets.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the form element rule.
const ID: &str = "form-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("formMissingAccessibleName")
        .combined("❌ Form missing accessible name")
        .error("❌ [Minor] Form missing accessible name (1.3.1 A)"),
    Message::new("formHaveSubmitButton")
        .combined("⚠️ Form should have submit button")
        .warning("⚠️ Form should have submit button"),
    Message::new("fieldsetMissingLegend")
        .combined("❌ Fieldset missing legend")
        .error("❌ [Minor] Fieldset missing legend (1.3.1 A)"),
];

/// Determines if an element submits its form.
///
/// A `button` submits unless its literal type says otherwise; an `input`
/// only with a literal `submit` type.
fn is_submit_control(element: &Element<'_>) -> bool {
    let ty = element.value("type");
    match element.name() {
        "button" => ty.literal().is_none() || ty.as_str() == Some("submit"),
        "input" => ty.as_str() == Some("submit"),
        _ => false,
    }
}

/// Detects unnamed forms, forms that cannot be submitted and fieldsets
/// without a legend.
#[derive(Default, Debug, Clone, Copy)]
pub struct FormElementRule;

impl Rule for FormElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that forms are named and submittable and that fieldsets have a legend."
    }

    fn explanation(&self) -> &'static str {
        "A form needs a name to be listed as a landmark and a submit control so that keyboard \
         users can submit it. A `fieldset` groups related controls, and its `legend` is what \
         announces the group."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable, Tag::Operable])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["input-element", "button-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is_any(&["form", "fieldset"])
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if element.is("fieldset") {
            if !element.child_elements().any(|c| c.is("legend")) {
                cx.report("fieldsetMissingLegend", element.location());
            }
            return;
        }

        if resolve::missing_label(element) && !element.has("name") {
            cx.report("formMissingAccessibleName", element.location());
        }

        if !element.descendants().any(|d| is_submit_control(&d)) {
            cx.report("formHaveSubmitButton", element.location());
        }
    }
}

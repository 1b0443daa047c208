//! A lint rule for tab interfaces.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the tab element rule.
const ID: &str = "tab-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("tabMissingAriaControls")
        .combined("⚠️ Element with role=\"tab\" missing aria-controls attribute")
        .warning("💡 [Best Practice] Element with role=\"tab\" missing aria-controls attribute (4.1.2 A)"),
    Message::new("tabpanelMissingAccessibleName")
        .combined("⚠️ Element with role=\"tabpanel\" missing accessible name (no aria-label or aria-labelledby)")
        .warning("💡 [Best Practice] Element with role=\"tabpanel\" missing accessible name (no aria-label or aria-labelledby) (4.1.2 A)"),
    Message::new("tablistMissingAccessibleName")
        .combined("⚠️ Element with role=\"tablist\" missing accessible name (no aria-label or aria-labelledby)")
        .warning("💡 [Best Practice] Element with role=\"tablist\" missing accessible name (no aria-label or aria-labelledby) (4.1.2 A)"),
];

/// Detects incomplete tabs, tab lists and tab panels.
#[derive(Default, Debug, Clone, Copy)]
pub struct TabElementRule;

impl Rule for TabElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that tabs reference their panels and that tab lists and panels are named."
    }

    fn explanation(&self) -> &'static str {
        "A `tab` should point at the panel it shows with `aria-controls`. Tab lists and tab \
         panels need accessible names so users know which set of tabs they are in."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Robust])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["expanded-element", "role-props-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Combined, Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        matches!(
            resolve::literal_role(element),
            Some("tab" | "tabpanel" | "tablist")
        )
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        match resolve::literal_role(element) {
            Some("tab") if !element.value("aria-controls").has_value() => {
                cx.report("tabMissingAriaControls", element.location());
            }
            Some("tabpanel") if resolve::missing_label(element) => {
                cx.report("tabpanelMissingAccessibleName", element.location());
            }
            Some("tablist") if resolve::missing_label(element) => {
                cx.report("tablistMissingAccessibleName", element.location());
            }
            _ => {}
        }
    }
}

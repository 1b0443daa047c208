//! A lint rule for dialogs.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the dialog element rule.
const ID: &str = "dialog-element";

/// The roles of dialogs.
const DIALOG_ROLES: &[&str] = &["dialog", "alertdialog"];

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("dialogMissingAccessibleName")
        .combined("❌ Dialog missing accessible name")
        .error("❌ [Major] Dialog missing accessible name (4.1.2 A)"),
    Message::new("modalDialogTrapFocus")
        .combined("⚠️ Modal dialog should trap focus")
        .warning("⚠️ Modal dialog should trap focus"),
];

/// Detects unnamed dialogs and flags modal dialogs for a focus review.
#[derive(Default, Debug, Clone, Copy)]
pub struct DialogElementRule;

impl Rule for DialogElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that dialogs are named and that modal dialogs manage focus."
    }

    fn explanation(&self) -> &'static str {
        "When a dialog opens, its accessible name is announced to tell users what it is about. \
         A modal dialog must also keep keyboard focus inside it until it is closed."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Operable, Tag::Robust])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["focus-element", "aria-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("dialog")
            || resolve::literal_role(element).is_some_and(|r| DIALOG_ROLES.contains(&r))
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if resolve::missing_label(element) {
            cx.report("dialogMissingAccessibleName", element.location());
        }

        let has_dialog_role =
            resolve::literal_role(element).is_some_and(|r| DIALOG_ROLES.contains(&r));
        if has_dialog_role && element.value("aria-modal").is_true() {
            cx.report("modalDialogTrapFocus", element.location());
        }
    }
}

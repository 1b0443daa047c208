//! A lint rule for menus and menu items.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the menu element rule.
const ID: &str = "menu-element";

/// The roles of menu items.
const MENU_ITEM_ROLES: &[&str] = &["menuitem", "menuitemcheckbox", "menuitemradio"];

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("menuItemRadioMissingAccessibleName")
        .error("❌ menuitemradio missing accessible name (aria-label or aria-labelledby) (4.1.2 A)"),
    Message::new("menuItemCheckboxMissingAccessibleName")
        .error("❌ menuitemcheckbox missing accessible name (aria-label or aria-labelledby) (4.1.2 A)"),
    Message::new("menuItemRadioMissingAriaChecked")
        .error("❌ menuitemradio missing aria-checked attribute (4.1.2 A)"),
    Message::new("menuItemCheckboxMissingAriaChecked")
        .error("❌ menuitemcheckbox missing aria-checked attribute (4.1.2 A)"),
    Message::new("menubarMissingAccessibleName")
        .error("❌ menubar missing accessible name (aria-label or aria-labelledby) (4.1.2 A)"),
    Message::new("menuContainMenuitemElements")
        .warning("⚠️ [Minor] menu should contain menuitem elements (1.3.1 A)"),
    Message::new("menuMissingAccessibleName")
        .warning("⚠️ [Minor] menu missing accessible name (4.1.2 A)"),
];

/// Detects unnamed menus, empty menus and incomplete checkable menu items.
#[derive(Default, Debug, Clone, Copy)]
pub struct MenuElementRule;

impl Rule for MenuElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that menus are named and contain menu items."
    }

    fn explanation(&self) -> &'static str {
        "Menus, menu bars and checkable menu items each need an accessible name. A menu must \
         own its items directly, and checkable items expose their state through `aria-checked`."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Operable, Tag::Robust])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["role-props-element", "checked-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Error, Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("menu") || resolve::literal_role(element).is_some()
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let unlabelled = resolve::missing_label(element);
        match resolve::literal_role(element) {
            Some("menubar") if unlabelled => {
                cx.report("menubarMissingAccessibleName", element.location());
            }
            Some("menuitemradio") => {
                if unlabelled {
                    cx.report("menuItemRadioMissingAccessibleName", element.location());
                }
                if !element.has("aria-checked") {
                    cx.report("menuItemRadioMissingAriaChecked", element.location());
                }
            }
            Some("menuitemcheckbox") => {
                if unlabelled {
                    cx.report("menuItemCheckboxMissingAccessibleName", element.location());
                }
                if !element.has("aria-checked") {
                    cx.report("menuItemCheckboxMissingAriaChecked", element.location());
                }
            }
            _ => {}
        }

        if !element.is("menu") && resolve::literal_role(element) != Some("menu") {
            return;
        }

        if unlabelled {
            cx.report("menuMissingAccessibleName", element.location());
        }

        let has_items = element.child_elements().any(|c| {
            resolve::literal_role(&c).is_some_and(|r| MENU_ITEM_ROLES.contains(&r))
        });
        if !has_items {
            cx.report("menuContainMenuitemElements", element.location());
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
    fn menus() {
        let doc = document([
            element("div").attr("role", "menubar"),
            element("ul")
                .attr("role", "menu")
                .attr("aria-label", "File")
                .child(element("li").attr("role", "menuitem").text("Open")),
            element("menu").child(element("li").text("Open")),
        ]);
        assert_eq!(
            reports(&MenuElementRule, &doc),
            [
                "menubarMissingAccessibleName at <div>@0",
                "menuMissingAccessibleName at <menu>@4",
                "menuContainMenuitemElements at <menu>@4",
            ]
        );
    }

    #[test]
    fn checkable_items() {
        let doc = document([
            element("div").attr("role", "menuitemradio"),
            element("div")
                .attr("role", "menuitemcheckbox")
                .attr("aria-label", "Bold")
                .attr("aria-checked", "false"),
        ]);
        assert_eq!(
            reports(&MenuElementRule, &doc),
            [
                "menuItemRadioMissingAccessibleName at <div>@0",
                "menuItemRadioMissingAriaChecked at <div>@0",
            ]
        );
    }
}

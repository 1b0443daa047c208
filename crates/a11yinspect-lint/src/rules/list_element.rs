//! A lint rule for lists and list items.

use a11yinspect_ast::Element;
use a11yinspect_ast::NodeRef;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the list element rule.
const ID: &str = "list-element";

/// The elements that may own `li` elements.
const LIST_CONTAINERS: &[&str] = &["ul", "ol", "menu"];

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("listInvalidChildren")
        .combined("⚠️ ul/ol contains non-li children")
        .warning("⚠️ ul/ol contains non-li children"),
    Message::new("liOrphan")
        .combined("❌ li element not inside ul/ol/menu")
        .error("❌ [Major] li element not inside ul/ol/menu (1.3.1 A)"),
    Message::new("listNoItems")
        .combined("❌ List (ul/ol or role=list) has no li or listitem children")
        .error("❌ [Major] List (ul/ol or role=list) has no li or listitem children (1.3.1 A)"),
    Message::new("listEmptyItem")
        .combined("❌ List contains empty li elements")
        .error("❌ [Minor] List contains empty li elements (1.3.1 A)"),
    Message::new("liNestedInLi")
        .combined("❌ li element incorrectly nested inside another li")
        .error("❌ [Major] li element incorrectly nested inside another li (1.3.1 A)"),
    Message::new("listInvalidElement")
        .combined("⚠️ Non-li element with text content nested directly in ul/ol")
        .warning("⚠️ Non-li element with text content nested directly in ul/ol"),
    Message::new("listRedundantRoleList")
        .combined("💡 ul/ol element has redundant role=\"list\" (implicit default)")
        .warning("💡 ul/ol element has redundant role=\"list\" (implicit default)"),
    Message::new("listitemRedundantRole")
        .combined("💡 li element has redundant role=\"listitem\" (implicit default)")
        .warning("💡 li element has redundant role=\"listitem\" (implicit default)"),
    Message::new("listAriaHidden")
        .warning("⚠️ List element or list item with aria-hidden=true is hidden from assistive technology"),
];

/// Determines if an element is a list item by tag or by literal role.
fn is_item(element: &Element<'_>) -> bool {
    element.is("li") || resolve::literal_role(element) == Some("listitem")
}

/// Detects malformed lists and misplaced list items.
#[derive(Default, Debug, Clone, Copy)]
pub struct ListElementRule;

impl ListElementRule {
    /// Checks the content of a `ul` or `ol` element.
    fn check_list(cx: &mut Context<'_>, element: &Element<'_>) {
        if let Some(role) = element.attribute("role") {
            if role.value().as_str() == Some("list") {
                cx.report("listRedundantRoleList", role.location());
            }
        }

        let invalid = element.children().any(|child| match child {
            NodeRef::Element(e) => !e.is("li"),
            NodeRef::Text(text) => !text.trim().is_empty(),
            NodeRef::Expression(_) => false,
        });
        if invalid {
            cx.report("listInvalidChildren", element.location());
        }

        if !element.child_elements().any(|c| is_item(&c)) {
            cx.report("listNoItems", element.location());
        }

        for child in element.child_elements() {
            if !child.is("li") {
                if !child.text().trimmed().is_empty() {
                    cx.report("listInvalidElement", child.location());
                }
                continue;
            }

            if !resolve::has_content(&child) {
                cx.report("listEmptyItem", child.location());
            }

            if let Some(role) = child.attribute("role") {
                if role.value().as_str() == Some("listitem") {
                    cx.report("listitemRedundantRole", role.location());
                }
            }
        }
    }

    /// Checks the placement of an `li` element.
    fn check_item(cx: &mut Context<'_>, element: &Element<'_>) {
        if !element.ancestors().any(|a| a.is_any(LIST_CONTAINERS)) {
            cx.report("liOrphan", element.location());
        }

        if element.parent().is_some_and(|p| p.is("li")) {
            cx.report("liNestedInLi", element.location());
        }
    }
}

impl Rule for ListElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that lists contain only list items and that list items belong to a list."
    }

    fn explanation(&self) -> &'static str {
        "Screen readers announce a list with its number of items and let users skip over it. \
         That only works when `ul` and `ol` own `li` children directly and every `li` sits in a \
         list. Empty items inflate the count, and hiding a list hides its content from \
         assistive technology altogether."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Understanding/info-and-relationships.html")
    }

    fn related_rules(&self) -> &[&'static str] {
        &["dl-element", "menu-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is_any(&["ul", "ol", "li"]) || resolve::literal_role(element) == Some("list")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if element.is_any(&["ul", "ol"]) {
            Self::check_list(cx, element);
        } else if element.is("li") {
            Self::check_item(cx, element);
        } else if !element.child_elements().any(|c| is_item(&c)) {
            cx.report("listNoItems", element.location());
        }

        if element.is_any(&["ul", "ol", "li"]) && resolve::is_hidden(element) {
            cx.report("listAriaHidden", element.location());
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
    fn list_content() {
        let doc = document([element("ul")
            .attr("role", "list")
            .child(element("li").attr("role", "listitem").text("One"))
            .child(element("li").text(" "))
            .child(element("p").text("Stray"))]);
        assert_eq!(
            reports(&ListElementRule, &doc),
            [
                "listInvalidChildren at <ul>@0",
                "listRedundantRoleList at <ul>@0[role]",
                "listitemRedundantRole at <li>@1[role]",
                "listEmptyItem at <li>@3",
                "listInvalidElement at <p>@5",
            ]
        );
    }

    #[test]
    fn empty_lists_report_once() {
        let doc = document([
            element("ol").attr("role", "list"),
            element("div").attr("role", "list").child(element("span")),
            element("div")
                .attr("role", "list")
                .child(element("div").attr("role", "listitem").text("One")),
        ]);
        assert_eq!(
            reports(&ListElementRule, &doc),
            [
                "listNoItems at <ol>@0",
                "listRedundantRoleList at <ol>@0[role]",
                "listNoItems at <div>@1",
            ]
        );
    }

    #[test]
    fn item_placement() {
        let doc = document([
            element("li").text("Orphan"),
            element("ul").child(
                element("li")
                    .text("Parent")
                    .child(element("li").attr("aria-hidden", "true").text("Child")),
            ),
        ]);
        assert_eq!(
            reports(&ListElementRule, &doc),
            [
                "liOrphan at <li>@0",
                "liNestedInLi at <li>@5",
                "listAriaHidden at <li>@5",
            ]
        );
    }
}

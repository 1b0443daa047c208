//! A lint rule for description lists.

use a11yinspect_ast::Element;
use a11yinspect_ast::NodeRef;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the dl element rule.
const ID: &str = "dl-element";

/// The elements a `dl` may contain directly.
const DL_CHILDREN: &[&str] = &["dt", "dd", "div"];

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("dlContainsInvalidChildren")
        .combined("❌ dl contains invalid children")
        .error("❌ dl contains invalid children"),
    Message::new("dtDdInsideDl")
        .combined("❌ dt/dd not inside dl")
        .error("❌ dt/dd not inside dl"),
    Message::new("dtNotFirstChildOfDl")
        .error("❌ dt element is not the first child element of dl"),
    Message::new("dlMissingDdElement")
        .error("❌ dl element has dt but is missing dd (definition) children"),
    Message::new("dlEmptyTerm")
        .error("❌ dl contains empty dt or dd element"),
];

/// Detects malformed description lists and misplaced terms.
#[derive(Default, Debug, Clone, Copy)]
pub struct DlElementRule;

impl DlElementRule {
    /// Checks the content of a `dl` element.
    fn check_list(cx: &mut Context<'_>, element: &Element<'_>) {
        let invalid = element.children().any(|child| match child {
            NodeRef::Element(e) => !e.is_any(DL_CHILDREN),
            NodeRef::Text(text) => !text.trim().is_empty(),
            NodeRef::Expression(_) => false,
        });
        if invalid {
            cx.report("dlContainsInvalidChildren", element.location());
        }

        if element.child_elements().next().is_some_and(|c| !c.is("dt")) {
            cx.report("dtNotFirstChildOfDl", element.location());
        }

        let has_term = element.child_elements().any(|c| c.is("dt"));
        let has_description = element.child_elements().any(|c| c.is("dd"));
        if has_term && !has_description {
            cx.report("dlMissingDdElement", element.location());
        }

        for child in element.child_elements() {
            if child.is_any(&["dt", "dd"]) && !resolve::has_content(&child) {
                cx.report("dlEmptyTerm", child.location());
            }
        }
    }
}

impl Rule for DlElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that description lists pair terms with descriptions."
    }

    fn explanation(&self) -> &'static str {
        "A `dl` groups terms (`dt`) with their descriptions (`dd`). It may only contain those \
         elements, optionally wrapped in a `div`, and `dt`/`dd` are meaningless outside a `dl`."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["list-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Combined, Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is_any(&["dl", "dt", "dd"])
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if element.is("dl") {
            Self::check_list(cx, element);
        } else if !element.ancestors().any(|a| a.is("dl")) {
            cx.report("dtDdInsideDl", element.location());
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
    fn description_lists() {
        let doc = document([
            element("dl")
                .child(element("dd").text("Orphaned description"))
                .child(element("dt"))
                .child(element("p").text("Note")),
            element("dt").text("Term"),
            element("dl")
                .child(element("dt").text("Term"))
                .child(element("dd").text("Description")),
        ]);
        assert_eq!(
            reports(&DlElementRule, &doc),
            [
                "dlContainsInvalidChildren at <dl>@0",
                "dtNotFirstChildOfDl at <dl>@0",
                "dlEmptyTerm at <dt>@3",
                "dtDdInsideDl at <dt>@6",
            ]
        );
    }

    #[test]
    fn missing_description() {
        let doc = document([element("dl").child(element("dt").text("Term"))]);
        assert_eq!(
            reports(&DlElementRule, &doc),
            ["dlMissingDdElement at <dl>@0"]
        );
    }
}

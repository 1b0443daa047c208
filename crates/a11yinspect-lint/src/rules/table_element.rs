//! A lint rule for data tables.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the table element rule.
const ID: &str = "table-element";

/// The elements a `tr` may be a direct child of.
const ROW_PARENTS: &[&str] = &["table", "thead", "tbody", "tfoot"];

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("tableMissingCaptionSummary")
        .error("❌ Table missing caption or summary"),
    Message::new("tableMissingTh")
        .error("❌ Table missing th elements"),
    Message::new("tableMissingHeaders")
        .error("❌ Table missing column/row headers (no th, role=columnheader, or role=rowheader)"),
    Message::new("tableEmptyHeader")
        .error("❌ Empty table header (th with no content)"),
    Message::new("tableMissingCaption")
        .error("❌ Table missing caption element"),
    Message::new("tdMissingTrParent")
        .error("❌ td element is not inside a tr element (1.3.1 A)"),
    Message::new("thMissingTrParent")
        .error("❌ th element is not inside a tr element (1.3.1 A)"),
    Message::new("trMissingTableParent")
        .error("❌ tr element is not inside a table, thead, tbody, or tfoot element (1.3.1 A)"),
    Message::new("tableDeprecatedSummary")
        .error("❌ table summary attribute is deprecated — use caption element or aria-label instead"),
    Message::new("tableSummaryCaptionMatch")
        .warning("💡 [Best Practice] Table summary attribute text matches caption text (should differ) (1.3.1 A)"),
    Message::new("tableRolePresentation")
        .warning("⚠️ [Minor] table element has role=\"none\" or \"presentation\" — verify this is a layout table and not a data table (1.3.1 A)"),
];

/// Determines if a table section contains a `th`, looking through `thead`,
/// `tbody` and `tr` only.
fn has_header_cell(element: &Element<'_>) -> bool {
    element.child_elements().any(|child| {
        child.is("th") || (child.is_any(&["thead", "tbody", "tr"]) && has_header_cell(&child))
    })
}

/// Detects tables without captions or headers and misplaced table parts.
#[derive(Default, Debug, Clone, Copy)]
pub struct TableElementRule;

impl TableElementRule {
    /// Checks a `table` element.
    fn check_table(cx: &mut Context<'_>, element: &Element<'_>) {
        if let Some(role) = element.attribute("role") {
            if matches!(role.value().as_str(), Some("none" | "presentation")) {
                cx.report("tableRolePresentation", role.location());
            }
        }

        let summary = element.attribute("summary");
        if let Some(summary) = summary {
            cx.report("tableDeprecatedSummary", summary.location());
        }

        let caption = element.child_elements().find(|c| c.is("caption"));
        if caption.is_none() && summary.is_none() && !resolve::has_label(element) {
            cx.report("tableMissingCaptionSummary", element.location());
        }

        if caption.is_none() {
            cx.report("tableMissingCaption", element.location());
        }

        if !has_header_cell(element) {
            cx.report("tableMissingTh", element.location());

            let has_header_role = element.descendants().any(|d| {
                matches!(
                    resolve::literal_role(&d),
                    Some("columnheader" | "rowheader")
                )
            });
            if !has_header_role {
                cx.report("tableMissingHeaders", element.location());
            }
        }

        for th in element.descendants().filter(|d| d.is("th")) {
            if th.text().is_empty() {
                cx.report("tableEmptyHeader", th.location());
            }
        }

        if let (Some(caption), Some(summary)) = (caption, summary) {
            let caption_text = caption.text();
            let summary_text = summary.value().as_str().map(str::trim);
            if caption_text.exact().is_some_and(|t| !t.is_empty())
                && caption_text.exact() == summary_text
            {
                cx.report("tableSummaryCaptionMatch", summary.location());
            }
        }
    }
}

impl Rule for TableElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that data tables are captioned, have header cells and are well formed."
    }

    fn explanation(&self) -> &'static str {
        "Screen readers announce each data cell together with its row and column headers, and \
         a caption lets users decide whether a table is worth reading. Cells belong in rows and \
         rows in a table or a table section. The `summary` attribute is obsolete; its content \
         belongs in the caption or the surrounding text."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/tutorials/tables/")
    }

    fn related_rules(&self) -> &[&'static str] {
        &["scope-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Error, Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is_any(&["table", "tr", "td", "th"])
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let parent = element.parent();
        match element.name() {
            "td" if !parent.is_some_and(|p| p.is("tr")) => {
                cx.report("tdMissingTrParent", element.location());
            }
            "th" if !parent.is_some_and(|p| p.is("tr")) => {
                cx.report("thMissingTrParent", element.location());
            }
            "tr" if !parent.is_some_and(|p| p.is_any(ROW_PARENTS)) => {
                cx.report("trMissingTableParent", element.location());
            }
            "table" => Self::check_table(cx, element),
            _ => {}
        }
    }
}

//! A lint rule for the `scope` of header cells.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the scope element rule.
const ID: &str = "scope-element";

/// The valid values of `scope`.
const SCOPES: &[&str] = &["row", "col", "rowgroup", "colgroup"];

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("thMissingScopeAttribute")
        .combined("❌ th missing scope attribute")
        .error("❌ [Minor] th missing scope attribute (1.3.1 A)"),
    Message::new("invalidScopeValue")
        .combined("❌ Invalid scope value")
        .error("❌ [Minor] Invalid scope value (1.3.1 A)"),
];

/// Detects header cells without a valid `scope`.
#[derive(Default, Debug, Clone, Copy)]
pub struct ScopeElementRule;

impl Rule for ScopeElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that header cells declare what they are headers for."
    }

    fn explanation(&self) -> &'static str {
        "The `scope` of a `th` tells assistive technology whether it heads a row, a column or a \
         group of either."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["table-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Combined, Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("th")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let Some(scope) = element.attribute("scope") else {
            cx.report("thMissingScopeAttribute", element.location());
            return;
        };

        if scope.value().is_truthy() && resolve::is_invalid_token(scope.value(), SCOPES) {
            cx.report("invalidScopeValue", scope.location());
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
    fn scopes() {
        let doc = document([
            element("th").text("Name"),
            element("th").attr("scope", "column").text("Age"),
            element("th").attr("scope", "col").text("City"),
            element("th").attr("scope", "").text("Zip"),
        ]);
        assert_eq!(
            reports(&ScopeElementRule, &doc),
            [
                "thMissingScopeAttribute at <th>@0",
                "invalidScopeValue at <th>@2[scope]",
            ]
        );
    }
}

//! A lint rule for access keys.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::state::ACCESSKEY_ATTRIBUTES;

/// The identifier for the accesskey element rule.
const ID: &str = "accesskey-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("avoidUsingAccesskeyAttribute")
        .combined("⚠️ Avoid using accesskey attribute")
        .warning("⚠️ Avoid using accesskey attribute"),
    Message::new("duplicateAccesskey")
        .combined("❌ Duplicate accesskey value found")
        .error("❌ [Best Practice] Duplicate accesskey value found (2.1.1 A)"),
];

/// Detects access keys and access keys bound more than once.
#[derive(Default, Debug, Clone, Copy)]
pub struct AccesskeyElementRule;

impl Rule for AccesskeyElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Discourages access keys and flags keys that are bound more than once."
    }

    fn explanation(&self) -> &'static str {
        "Access keys conflict with shortcuts of browsers and assistive technology and are rarely \
         discoverable. When a key is bound to several elements, the browser activates only one \
         of them."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Operable, Tag::Robust])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["focus-element", "duplicate-id"]
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        ACCESSKEY_ATTRIBUTES.iter().any(|a| element.has(a))
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        for attribute in element
            .attributes()
            .filter(|a| ACCESSKEY_ATTRIBUTES.contains(&a.name()))
        {
            cx.report("avoidUsingAccesskeyAttribute", attribute.location());
        }
    }

    fn finalize(&self, cx: &mut Context<'_>) {
        let state = cx.state();
        for (_, sites) in state.accesskeys().filter(|(_, sites)| sites.len() > 1) {
            for site in sites {
                cx.report("duplicateAccesskey", *site);
            }
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
    fn duplicate_keys() {
        let doc = document([
            element("button").attr("accessKey", "S"),
            element("a").attr("accesskey", "s"),
            element("a").attr("accessKey", "h"),
            element("a").dynamic("accessKey"),
        ]);
        assert_eq!(
            reports(&AccesskeyElementRule, &doc),
            [
                "avoidUsingAccesskeyAttribute at <button>@0[accessKey]",
                "duplicateAccesskey at <button>@0[accessKey]",
                "avoidUsingAccesskeyAttribute at <a>@1[accesskey]",
                "duplicateAccesskey at <a>@1[accesskey]",
                "avoidUsingAccesskeyAttribute at <a>@2[accessKey]",
                "avoidUsingAccesskeyAttribute at <a>@3[accessKey]",
            ]
        );
    }
}

//! A lint rule for the document language.

use std::sync::LazyLock;

use a11yinspect_ast::Element;
use regex::Regex;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the lang element rule.
const ID: &str = "lang-element";

/// Matches a primary language subtag with an optional region.
static LANG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: this is checked statically with tests to always unwrap.
    Regex::new(r"^[a-z]{2,3}(-[A-Z]{2})?$").unwrap()
});

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("htmlElementMissingLangAttribute")
        .error("❌ [Major] html element missing lang attribute (3.1.1 A)"),
    Message::new("invalidLangAttributeValue")
        .error("❌ [Major] Invalid lang attribute value (3.1.1 A)"),
    Message::new("emptyLangAttribute")
        .error("❌ [Major] Empty lang attribute (3.1.1 A)"),
];

/// Detects documents without a valid language.
#[derive(Default, Debug, Clone, Copy)]
pub struct LangElementRule;

impl Rule for LangElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that the `html` element declares a valid language."
    }

    fn explanation(&self) -> &'static str {
        "Screen readers choose their pronunciation rules from the page language. Without a \
         `lang` attribute the user's default language is assumed, which garbles text in any \
         other language."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Understandable])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Understanding/language-of-page.html")
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("html")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let Some(lang) = element.attribute("lang") else {
            cx.report("htmlElementMissingLangAttribute", element.location());
            return;
        };

        let value = lang.value();
        if !value.has_value() || value.is_falsy() {
            cx.report("emptyLangAttribute", lang.location());
            return;
        }

        if let Some(literal) = value.literal() {
            if !LANG_REGEX.is_match(&literal.to_string()) {
                cx.report("invalidLangAttributeValue", lang.location());
            }
        }
    }
}

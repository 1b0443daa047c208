//! A lint rule for links.

use std::borrow::Cow;
use std::sync::LazyLock;

use a11yinspect_ast::Element;
use regex::Regex;

use crate::Config;
use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::knowledge::phrases;
use crate::quote_threshold;
use crate::resolve;

/// The identifier for the a element rule.
const ID: &str = "a-element";

/// Matches link text that is a bare URL.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: this is checked statically with tests to always unwrap.
    Regex::new(r"(?i)^https?://").unwrap()
});

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("linkAccessibleName")
        .combined("❌ Link has no accessible name")
        .error("❌ [Critical] Link has no accessible name (2.4.4 A)"),
    Message::new("linkTextOnlyUrl")
        .combined("❌ Link text is only a URL")
        .error("❌ Link text is only a URL"),
    Message::new("linkTextGenericClickHere")
        .combined("⚠️ Link text is generic (click here, read more, etc)")
        .warning("⚠️ [Critical] Link text is generic (click here, read more, etc) (2.4.4 A)"),
    Message::new("linkMissingHrefAttribute")
        .combined("❌ Link missing href attribute")
        .error("❌ Link missing href attribute"),
    Message::new("linkHrefEmpty")
        .combined("❌ Link href is empty or #")
        .error("❌ Link href is empty or #"),
    Message::new("linkTextTooLong")
        .combined("⚠️ Link accessible name exceeds 150 characters")
        .warning("⚠️ [Best Practice] Link accessible name exceeds 150 characters (2.4.4 A)"),
];

/// Detects links without a destination or a descriptive name.
#[derive(Debug, Clone, Copy)]
pub struct AElementRule {
    /// The maximum length of link text.
    max_link_text_length: usize,
}

impl AElementRule {
    /// Creates a new a element rule.
    pub fn new(config: &Config) -> Self {
        Self {
            max_link_text_length: config.max_link_text_length,
        }
    }
}

impl Default for AElementRule {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Rule for AElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that links have a destination and text describing it."
    }

    fn explanation(&self) -> &'static str {
        "Screen reader users often navigate a page through a list of its links, read out of \
         context. A link needs an `href` to be focusable and its text must describe where it \
         leads: \"click here\" or a raw URL does not. Very long link text is tedious to listen to."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Operable])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Understanding/link-purpose-in-context.html")
    }

    fn related_rules(&self) -> &[&'static str] {
        &["button-element", "skip-link"]
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("a")
    }

    fn render(&self, key: &'static str, text: &'static str) -> Cow<'static, str> {
        match key {
            "linkTextTooLong" => quote_threshold(
                text,
                "exceeds 150",
                &format!("exceeds {}", self.max_link_text_length),
            ),
            _ => Cow::Borrowed(text),
        }
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let Some(href) = element.attribute("href") else {
            cx.report("linkMissingHrefAttribute", element.location());
            return;
        };

        if let Some(literal) = href.value().literal() {
            if !literal.is_truthy() || literal.as_str() == Some("#") {
                cx.report("linkHrefEmpty", href.location());
            }
        }

        if let Some(label) = element.attribute_any(&["aria-label", "aria-labelledby"]) {
            if let Some(literal) = label.value().literal().filter(|l| l.is_truthy()) {
                if literal
                    .as_str()
                    .is_some_and(|s| s.trim().chars().count() > self.max_link_text_length)
                {
                    cx.report("linkTextTooLong", label.location());
                }
                return;
            }
        }

        if resolve::has_label(element) {
            return;
        }

        let text = element.text();
        if text.is_empty() {
            if !resolve::is_decorative(element) {
                cx.report("linkAccessibleName", element.location());
            }
            return;
        }

        if let Some(exact) = text.exact() {
            if URL_REGEX.is_match(exact) {
                cx.report("linkTextOnlyUrl", element.location());
                return;
            }

            if phrases::matches(phrases::GENERIC_LINK_TEXT, exact) {
                cx.report("linkTextGenericClickHere", element.location());
            }
        }

        if text.trimmed().chars().count() > self.max_link_text_length {
            cx.report("linkTextTooLong", element.location());
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
    fn empty_href_with_generic_text() {
        let doc = document([element("a").attr("href", "#").text("click here")]);
        assert_eq!(
            reports(&AElementRule::default(), &doc),
            [
                "linkTextGenericClickHere at <a>@0",
                "linkHrefEmpty at <a>@0[href]",
            ]
        );
    }

    #[test]
    fn missing_href_stops() {
        let doc = document([element("a").text("")]);
        assert_eq!(
            reports(&AElementRule::default(), &doc),
            ["linkMissingHrefAttribute at <a>@0"]
        );
    }

    #[test]
    fn text_checks() {
        let doc = document([
            element("a").attr("href", "/a"),
            element("a").attr("href", "/b").text("https://example.com"),
            element("a")
                .attr("href", "/c")
                .child(element("span").text("Read more")),
            element("a").attr("href", "/d").dynamic_text(),
            element("a").attr("href", "/e").text("Pricing"),
        ]);
        assert_eq!(
            reports(&AElementRule::default(), &doc),
            [
                "linkAccessibleName at <a>@0",
                "linkTextOnlyUrl at <a>@1",
                "linkTextGenericClickHere at <a>@3",
            ]
        );
    }

    #[test]
    fn hidden_links_need_no_name() {
        let doc = document([
            element("a").attr("href", "/x").attr("aria-hidden", "true"),
            element("a").attr("href", "/y").attr("role", "none"),
            element("a").attr("href", "/z").attr("aria-hidden", "false"),
        ]);
        assert_eq!(
            reports(&AElementRule::default(), &doc),
            ["linkAccessibleName at <a>@2"]
        );
    }

    #[test]
    fn labels_replace_text() {
        let long = "x".repeat(151);
        let doc = document([
            element("a").attr("href", "/a").attr("aria-label", long.as_str()),
            element("a").attr("href", "/b").attr("aria-label", "Home"),
            element("a").attr("href", "/c").dynamic("aria-label"),
        ]);
        assert_eq!(
            reports(&AElementRule::default(), &doc),
            ["linkTextTooLong at <a>@0[aria-label]"]
        );
    }
}

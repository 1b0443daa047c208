//! A lint rule for headings and the heading outline.

use std::borrow::Cow;
use std::sync::LazyLock;

use a11yinspect_ast::Element;
use a11yinspect_ast::NodeRef;
use regex::Regex;

use crate::Config;
use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::knowledge::html;
use crate::quote_threshold;
use crate::resolve;

/// The identifier for the heading element rule.
const ID: &str = "heading-element";

/// Matches heading text made only of punctuation and symbols.
static SYMBOLS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: this is checked statically with tests to always unwrap.
    Regex::new(r"^[^a-zA-Z0-9]+$").unwrap()
});

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("headingEmpty")
        .combined("❌ Heading is empty")
        .error("❌ Heading is empty"),
    Message::new("headingLevelSkipped")
        .combined("⚠️ Heading level skipped"),
    Message::new("multipleH1")
        .combined("⚠️ Multiple h1 elements on page")
        .warning("💡 [Best Practice] Multiple h1 elements on page (1.3.1 A)"),
    Message::new("headingOnlyImageNoAlt")
        .combined("⚠️ Heading contains only image without alt")
        .warning("⚠️ Heading contains only image without alt"),
    Message::new("headingHiddenOrPresentation")
        .combined("💡 Heading has role=presentation/none or aria-hidden=true")
        .warning("💡 Heading has role=presentation/none or aria-hidden=true"),
    Message::new("headingTextTooLong")
        .combined("⚠️ Heading text exceeds 120 characters or contains only special characters")
        .warning("⚠️ Heading text exceeds 120 characters or contains only special characters"),
    Message::new("headingNested")
        .combined("⚠️ Heading contains nested heading element"),
    Message::new("headingRoleMissingAriaLevel")
        .warning("💡 Element with role=\"heading\" missing aria-level attribute (1.3.1 A)"),
];

/// Determines if an element is a heading by tag or by literal role.
fn is_heading(element: &Element<'_>) -> bool {
    html::heading_level(element.name()).is_some()
        || resolve::literal_role(element) == Some("heading")
}

/// Determines if the only content of a heading is an image without a text
/// alternative.
fn only_image_without_alt(element: &Element<'_>) -> bool {
    let mut content = element.children().filter(|c| match c {
        NodeRef::Text(text) => !text.trim().is_empty(),
        _ => true,
    });

    match (content.next(), content.next()) {
        (Some(NodeRef::Element(child)), None) if child.is("img") => {
            let alt = child.value("alt");
            !alt.has_value() || alt.is_falsy()
        }
        _ => false,
    }
}

/// Detects empty, hidden, nested and out-of-sequence headings.
#[derive(Debug, Clone, Copy)]
pub struct HeadingElementRule {
    /// The maximum length of heading text.
    max_heading_text_length: usize,
}

impl HeadingElementRule {
    /// Creates a new heading element rule.
    pub fn new(config: &Config) -> Self {
        Self {
            max_heading_text_length: config.max_heading_text_length,
        }
    }
}

impl Default for HeadingElementRule {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Rule for HeadingElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that headings have text and form a well-ordered outline."
    }

    fn explanation(&self) -> &'static str {
        "Screen reader users skim a page by its headings. Every heading needs text, a page should \
         have a single `h1`, and heading levels should not skip (an `h2` followed by an `h4` \
         suggests a missing section). Headings should be short, must not be nested in one \
         another and, when built from a `role=\"heading\"`, need an `aria-level`."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable, Tag::Operable])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Understanding/info-and-relationships.html")
    }

    fn related_rules(&self) -> &[&'static str] {
        &["section-element", "landmark-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        is_heading(element)
    }

    fn render(&self, key: &'static str, text: &'static str) -> Cow<'static, str> {
        match key {
            "headingTextTooLong" => quote_threshold(
                text,
                "exceeds 120",
                &format!("exceeds {}", self.max_heading_text_length),
            ),
            _ => Cow::Borrowed(text),
        }
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if html::heading_level(element.name()).is_none() {
            if !element.has("aria-level") {
                cx.report("headingRoleMissingAriaLevel", element.location());
            }
            return;
        }

        if element.is("h1") && cx.state().h1_count() > 1 {
            cx.report("multipleH1", element.location());
        }

        let decorative = resolve::is_decorative(element);
        if decorative {
            cx.report("headingHiddenOrPresentation", element.location());
        }

        let text = element.text();
        if text.is_empty() {
            if decorative {
                return;
            }

            if only_image_without_alt(element) {
                cx.report("headingOnlyImageNoAlt", element.location());
            } else {
                cx.report("headingEmpty", element.location());
            }
            return;
        }

        if cx.state().is_skipped_heading(element.id()) {
            cx.report("headingLevelSkipped", element.location());
        }

        let too_long = text.trimmed().chars().count() > self.max_heading_text_length;
        let symbols_only = text.exact().is_some_and(|t| SYMBOLS_REGEX.is_match(t));
        if too_long || symbols_only {
            cx.report("headingTextTooLong", element.location());
        }

        if element.descendants().any(|d| is_heading(&d)) {
            cx.report("headingNested", element.location());
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
    fn skipped_levels() {
        let doc = document([
            element("h1").text("Title"),
            element("h2").text("Section"),
            element("h4").text("Detail"),
        ]);
        assert_eq!(
            reports(&HeadingElementRule::default(), &doc),
            ["headingLevelSkipped at <h4>@4"]
        );

        let doc = document([
            element("h1").text("Title"),
            element("h2").text("Section"),
            element("h3").text("Detail"),
        ]);
        assert!(reports(&HeadingElementRule::default(), &doc).is_empty());
    }

    #[test]
    fn empty_headings() {
        let doc = document([
            element("h1").text("Title"),
            element("h2").text("  "),
            element("h2").child(element("img").attr("src", "logo.png")),
            element("h2").child(element("img").attr("alt", "Logo")),
            element("h3").dynamic_text(),
        ]);
        assert_eq!(
            reports(&HeadingElementRule::default(), &doc),
            [
                "headingEmpty at <h2>@2",
                "headingOnlyImageNoAlt at <h2>@4",
                "headingEmpty at <h2>@6",
                "headingLevelSkipped at <h3>@8",
            ]
        );
    }

    #[test]
    fn multiple_h1_and_hidden() {
        let doc = document([
            element("h1").text("One"),
            element("h1").attr("aria-hidden", "true").text("Two"),
        ]);
        assert_eq!(
            reports(&HeadingElementRule::default(), &doc),
            [
                "multipleH1 at <h1>@2",
                "headingHiddenOrPresentation at <h1>@2",
            ]
        );
    }

    #[test]
    fn hidden_headings_need_no_text() {
        let doc = document([
            element("h1").text("Title"),
            element("h2").attr("aria-hidden", "true"),
            element("h2")
                .attr("role", "presentation")
                .child(element("img").attr("src", "rule.png")),
        ]);
        assert_eq!(
            reports(&HeadingElementRule::default(), &doc),
            [
                "headingHiddenOrPresentation at <h2>@2",
                "headingHiddenOrPresentation at <h2>@3",
            ]
        );
    }

    #[test]
    fn text_and_nesting() {
        let doc = document([
            element("h1").text("***"),
            element("h2").text("Intro").child(element("h3").text("Nested")),
            element("div").attr("role", "heading").text("Fake"),
            element("div")
                .attr("role", "heading")
                .attr("aria-level", "2")
                .text("Fake"),
        ]);
        assert_eq!(
            reports(&HeadingElementRule::default(), &doc),
            [
                "headingTextTooLong at <h1>@0",
                "headingNested at <h2>@2",
                "headingRoleMissingAriaLevel at <div>@6",
            ]
        );
    }
}

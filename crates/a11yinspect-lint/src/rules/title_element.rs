//! A lint rule for the document `title`.

use std::borrow::Cow;

use a11yinspect_ast::Element;
use a11yinspect_ast::Location;

use crate::Config;
use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::quote_threshold;

/// The identifier for the title element rule.
const ID: &str = "title-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("pageMissingTitleElement")
        .combined("❌ Page missing title element")
        .error("❌ Page missing title element"),
    Message::new("titleElementEmpty")
        .combined("❌ title element is empty")
        .error("❌ title element is empty"),
    Message::new("titleElementTooLong60")
        .combined("⚠️ title element too long (>60 chars)")
        .warning("⚠️ title element too long (>60 chars)"),
];

/// Detects missing, empty and over-long page titles.
#[derive(Debug, Clone, Copy)]
pub struct TitleElementRule {
    /// The maximum length of the title.
    max_title_length: usize,
}

impl TitleElementRule {
    /// Creates a new title element rule.
    pub fn new(config: &Config) -> Self {
        Self {
            max_title_length: config.max_title_length,
        }
    }
}

impl Default for TitleElementRule {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Rule for TitleElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that a page has a short, non-empty title."
    }

    fn explanation(&self) -> &'static str {
        "The page title is the first thing a screen reader announces and identifies the page in \
         tabs, history and bookmarks. It must be present and not empty, and should be short \
         enough to be read at a glance."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Operable])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Understanding/page-titled.html")
    }

    fn related_rules(&self) -> &[&'static str] {
        &["lang-element", "meta-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("title")
    }

    fn render(&self, key: &'static str, text: &'static str) -> Cow<'static, str> {
        match key {
            "titleElementTooLong60" => quote_threshold(
                text,
                ">60 chars",
                &format!(">{} chars", self.max_title_length),
            ),
            _ => Cow::Borrowed(text),
        }
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let text = element.text();
        if text.is_empty() {
            cx.report("titleElementEmpty", element.location());
        } else if text.trimmed().chars().count() > self.max_title_length {
            cx.report("titleElementTooLong60", element.location());
        }
    }

    fn finalize(&self, cx: &mut Context<'_>) {
        if !cx.state().title_seen() {
            cx.report("pageMissingTitleElement", Location::Document);
        }
    }
}

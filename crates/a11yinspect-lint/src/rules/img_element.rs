//! A lint rule for the text alternatives of `img` elements.

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

/// The identifier for the img element rule.
const ID: &str = "img-element";

/// Matches alternative text that is an image file name.
static FILENAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: this is checked statically with tests to always unwrap.
    Regex::new(r"(?i)\.(jpg|jpeg|png|gif|svg|webp|bmp)$").unwrap()
});

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("imgMissingAlt")
        .combined("❌ img missing alt attribute")
        .error("❌ [Critical] img missing alt attribute (1.1.1 A)"),
    Message::new("imgEmptyAlt")
        .combined("❌ img has empty alt")
        .error("❌ [Critical] img has empty alt (1.1.1 A)"),
    Message::new("imgAltFilename")
        .combined("⚠️ img alt contains filename")
        .warning("⚠️ [Major] img alt contains filename (1.1.1 A)"),
    Message::new("imgAltTooLong")
        .combined("⚠️ img alt too long (>150 chars)")
        .warning("⚠️ [Major] img alt too long (>150 chars) (1.1.1 A)"),
    Message::new("imgDecorative")
        .combined("💡 img marked as decorative (role=presentation/none or aria-hidden=true) - verify if informative or decorative")
        .warning("💡 [Minor] img marked as decorative (role=presentation/none or aria-hidden=true) - verify if informative or decorative (1.1.1 A)"),
    Message::new("imgMissingAltNoAria")
        .combined("❌ img missing alt attribute and has no aria-label or aria-labelledby")
        .error("❌ [Critical] img missing alt attribute and has no aria-label or aria-labelledby (1.1.1 A)"),
    Message::new("imgAltGeneric")
        .combined("⚠️ img alt text is generic (image, graphic, picture, photo, spacer, etc.)")
        .warning("⚠️ img alt text is generic (image, graphic, picture, photo, spacer, etc.)"),
];

/// Detects images with missing or uninformative text alternatives.
#[derive(Debug, Clone, Copy)]
pub struct ImgElementRule {
    /// The maximum length of alternative text.
    max_alt_text_length: usize,
}

impl ImgElementRule {
    /// Creates a new img element rule.
    pub fn new(config: &Config) -> Self {
        Self {
            max_alt_text_length: config.max_alt_text_length,
        }
    }
}

impl Default for ImgElementRule {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Rule for ImgElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that images have a meaningful text alternative."
    }

    fn explanation(&self) -> &'static str {
        "Screen readers announce an image through its `alt` text. An image without `alt` is \
         typically announced by its file name, which rarely describes it. Alternative text should \
         describe the content or function of the image; text such as \"image\" or a file name \
         adds nothing. Images marked as decorative are reported for review so that informative \
         images are not hidden by mistake."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Understanding/non-text-content.html")
    }

    fn related_rules(&self) -> &[&'static str] {
        &["area-element", "svg-element", "heading-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("img")
    }

    fn render(&self, key: &'static str, text: &'static str) -> Cow<'static, str> {
        match key {
            "imgAltTooLong" => quote_threshold(
                text,
                ">150 chars",
                &format!(">{} chars", self.max_alt_text_length),
            ),
            _ => Cow::Borrowed(text),
        }
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if resolve::is_decorative(element) {
            cx.report("imgDecorative", element.location());
            return;
        }

        let Some(alt) = element.attribute("alt") else {
            let labelled = element.value("aria-label").has_value()
                || element.value("aria-labelledby").has_value();
            if labelled {
                cx.report("imgMissingAlt", element.location());
            } else {
                cx.report("imgMissingAltNoAria", element.location());
            }
            return;
        };

        let value = alt.value();
        if value.has_value() {
            let Some(text) = value.as_str() else {
                return;
            };

            if text.trim().is_empty() {
                cx.report("imgEmptyAlt", alt.location());
            } else if phrases::matches(phrases::GENERIC_IMAGE_TEXT, text) {
                cx.report("imgAltGeneric", alt.location());
            } else if FILENAME_REGEX.is_match(text) {
                cx.report("imgAltFilename", alt.location());
            } else if text.chars().count() > self.max_alt_text_length {
                cx.report("imgAltTooLong", alt.location());
            }
        } else {
            cx.report("imgEmptyAlt", alt.location());
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
    fn missing_alt() {
        let doc = document([
            element("img").attr("src", "cat.png"),
            element("img").attr("aria-label", "A cat"),
            element("img").dynamic("aria-labelledby"),
        ]);
        assert_eq!(
            reports(&ImgElementRule::default(), &doc),
            [
                "imgMissingAltNoAria at <img>@0",
                "imgMissingAlt at <img>@1",
                "imgMissingAlt at <img>@2",
            ]
        );
    }

    #[test]
    fn decorative_images_stop_early() {
        let doc = document([
            element("img").attr("role", "none"),
            element("img").attr("aria-hidden", "true").attr("alt", "photo"),
        ]);
        assert_eq!(
            reports(&ImgElementRule::default(), &doc),
            ["imgDecorative at <img>@0", "imgDecorative at <img>@1"]
        );
    }

    #[test]
    fn alt_text_checks() {
        let long = "a".repeat(151);
        let doc = document([
            element("img").bare("alt"),
            element("img").attr("alt", "  "),
            element("img").attr("alt", "Photo"),
            element("img").attr("alt", "cat.JPG"),
            element("img").attr("alt", long.as_str()),
            element("img").attr("alt", "A cat asleep on a keyboard"),
            element("img").dynamic("alt"),
        ]);
        assert_eq!(
            reports(&ImgElementRule::default(), &doc),
            [
                "imgEmptyAlt at <img>@0[alt]",
                "imgEmptyAlt at <img>@1[alt]",
                "imgAltGeneric at <img>@2[alt]",
                "imgAltFilename at <img>@3[alt]",
                "imgAltTooLong at <img>@4[alt]",
            ]
        );
    }

    #[test]
    fn configurable_length() {
        let config = Config {
            max_alt_text_length: 10,
            ..Default::default()
        };
        let doc = document([element("img").attr("alt", "A cat asleep on a keyboard")]);
        assert_eq!(
            reports(&ImgElementRule::new(&config), &doc),
            ["imgAltTooLong at <img>@0[alt]"]
        );
    }

    #[test]
    fn messages_quote_the_configured_length() {
        let text = MESSAGES
            .iter()
            .find(|m| m.key() == "imgAltTooLong")
            .and_then(|m| m.text(Variant::Warning))
            .expect("message should have warning text");

        assert_eq!(
            ImgElementRule::default().render("imgAltTooLong", text),
            "⚠️ [Major] img alt too long (>150 chars) (1.1.1 A)"
        );

        let config = Config {
            max_alt_text_length: 100,
            ..Default::default()
        };
        assert_eq!(
            ImgElementRule::new(&config).render("imgAltTooLong", text),
            "⚠️ [Major] img alt too long (>100 chars) (1.1.1 A)"
        );
    }
}

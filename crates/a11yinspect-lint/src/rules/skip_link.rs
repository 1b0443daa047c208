//! A lint rule for skip links.

use a11yinspect_ast::Element;
use a11yinspect_ast::Location;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the skip link rule.
const ID: &str = "skip-link";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("pageHaveSkipLink")
        .warning("⚠️ Page should have skip link"),
];

/// Detects pages without a link to skip to the main content.
#[derive(Default, Debug, Clone, Copy)]
pub struct SkipLinkRule;

impl Rule for SkipLinkRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that a page offers a link to skip to its main content."
    }

    fn explanation(&self) -> &'static str {
        "Keyboard users otherwise tab through the whole header and navigation on every page. A \
         skip link is an in-page link (such as `href=\"#main\"`) near the top of the page whose \
         text mentions skipping or the main content."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Operable])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Understanding/bypass-blocks.html")
    }

    fn related_rules(&self) -> &[&'static str] {
        &["landmark-element", "a-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, _: &Element<'_>) -> bool {
        false
    }

    fn check(&self, _: &mut Context<'_>, _: &Element<'_>) {}

    fn finalize(&self, cx: &mut Context<'_>) {
        if !cx.state().skip_link_seen() {
            cx.report("pageHaveSkipLink", Location::Document);
        }
    }
}

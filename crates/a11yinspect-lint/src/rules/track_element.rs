//! A lint rule for media `track` elements.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the track element rule.
const ID: &str = "track-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("trackMissingSrcAttribute")
        .error("❌ [Best Practice] track missing src attribute (1.2.1 A)"),
    Message::new("trackMissingKindAttribute")
        .error("❌ [Best Practice] track missing kind attribute (1.2.2 A)"),
    Message::new("trackMissingSrclangSubtitles")
        .error("❌ [Major] track missing srclang for subtitles (1.2.2 A)"),
];

/// Detects incomplete text tracks.
#[derive(Default, Debug, Clone, Copy)]
pub struct TrackElementRule;

impl Rule for TrackElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that text tracks have a source, a kind and, for subtitles, a language."
    }

    fn explanation(&self) -> &'static str {
        "A `track` without a `src` provides nothing, and one without a `kind` is treated as \
         subtitles. Subtitles must declare their language with `srcLang` so that players can \
         offer them."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["media-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("track")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let src = element.value("src");
        if !src.has_value() || src.is_falsy() {
            cx.report("trackMissingSrcAttribute", element.location());
        }

        let kind = element.value("kind");
        if kind.is_absent() {
            cx.report("trackMissingKindAttribute", element.location());
        } else if kind.as_str() == Some("subtitles") && !element.has("srcLang") {
            cx.report("trackMissingSrclangSubtitles", element.location());
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
    fn track_checks() {
        let doc = document([
            element("track").attr("src", ""),
            element("track").attr("src", "en.vtt").attr("kind", "subtitles"),
            element("track")
                .attr("src", "en.vtt")
                .attr("kind", "subtitles")
                .attr("srcLang", "en"),
        ]);
        assert_eq!(
            reports(&TrackElementRule, &doc),
            [
                "trackMissingSrcAttribute at <track>@0",
                "trackMissingKindAttribute at <track>@0",
                "trackMissingSrclangSubtitles at <track>@1",
            ]
        );
    }
}

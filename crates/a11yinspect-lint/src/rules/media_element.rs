//! A lint rule for `video` and `audio` elements.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the media element rule.
const ID: &str = "media-element";

/// The names of the autoplay attribute.
const AUTOPLAY_ATTRIBUTES: &[&str] = &["autoPlay", "autoplay"];

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("videoElementMissingCaptions")
        .combined("❌ video element missing captions")
        .error("❌ [Critical] video element missing captions (1.2.2 A)"),
    Message::new("audioElementMissingTranscript")
        .combined("❌ audio element missing transcript")
        .error("❌ [Major] audio element missing transcript (1.2.1 A)"),
    Message::new("videoElementMissingAudioDescription")
        .combined("❌ video element missing audio description")
        .error("❌ [Major] video element missing audio description (1.2.5 AA)"),
    Message::new("mediaElementAutoplay")
        .combined("⚠️ media element has autoplay")
        .warning("⚠️ [Critical] media element has autoplay (1.4.2 A)"),
    Message::new("mediaRoleWithControls")
        .combined("💡 audio/video with controls attribute should not have a role attribute")
        .warning("⚠️ [Major] audio/video with controls attribute should not have a role attribute (4.1.2 A)"),
    Message::new("audioAriaHidden")
        .warning("⚠️ [Major] audio element with aria-hidden=true is hidden from assistive technology (1.1.1 A)"),
    Message::new("videoAriaHidden")
        .warning("⚠️ [Major] video element with aria-hidden=true or tabindex=-1 is inaccessible (1.1.1 A)"),
];

/// Determines if a media element has a direct `track` child of the given
/// kind.
fn has_track(element: &Element<'_>, kind: &str) -> bool {
    element
        .child_elements()
        .any(|c| c.is("track") && c.value("kind").as_str() == Some(kind))
}

/// Detects media without captions, descriptions or transcripts, and media
/// that plays on its own.
#[derive(Default, Debug, Clone, Copy)]
pub struct MediaElementRule;

impl Rule for MediaElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that media has text alternatives and does not play automatically."
    }

    fn explanation(&self) -> &'static str {
        "Deaf and hard of hearing users rely on captions and transcripts; blind users rely on \
         audio descriptions of video. A video needs `track` children for both, and audio needs \
         a transcript nearby. Media that starts on its own interferes with screen readers, and \
         hiding a media player removes its controls from assistive technology."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable, Tag::Operable])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Understanding/captions-prerecorded.html")
    }

    fn related_rules(&self) -> &[&'static str] {
        &["track-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is_any(&["video", "audio"])
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if element.has("controls") {
            if let Some(role) = element.attribute("role") {
                cx.report("mediaRoleWithControls", role.location());
            }
        }

        let hidden = resolve::is_hidden(element);
        if element.is("video") {
            if !has_track(element, "captions") {
                cx.report("videoElementMissingCaptions", element.location());
            }

            if !has_track(element, "descriptions") {
                cx.report("videoElementMissingAudioDescription", element.location());
            }

            let unfocusable = resolve::tab_index(element)
                .and_then(|t| t.value().literal().and_then(|l| l.to_integer()))
                == Some(-1);
            if hidden || unfocusable {
                cx.report("videoAriaHidden", element.location());
            }
        } else {
            cx.report("audioElementMissingTranscript", element.location());
            if hidden {
                cx.report("audioAriaHidden", element.location());
            }
        }

        if let Some(autoplay) = element.attribute_any(AUTOPLAY_ATTRIBUTES) {
            cx.report("mediaElementAutoplay", autoplay.location());
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
    fn video_tracks() {
        let doc = document([
            element("video").child(element("track").attr("kind", "captions")),
            element("video")
                .child(element("track").attr("kind", "captions"))
                .child(element("track").attr("kind", "descriptions")),
        ]);
        assert_eq!(
            reports(&MediaElementRule, &doc),
            ["videoElementMissingAudioDescription at <video>@0"]
        );
    }

    #[test]
    fn audio_and_autoplay() {
        let doc = document([
            element("audio")
                .bare("controls")
                .attr("role", "application")
                .bare("autoPlay")
                .attr("aria-hidden", "true"),
        ]);
        assert_eq!(
            reports(&MediaElementRule, &doc),
            [
                "audioElementMissingTranscript at <audio>@0",
                "audioAriaHidden at <audio>@0",
                "mediaRoleWithControls at <audio>@0[role]",
                "mediaElementAutoplay at <audio>@0[autoPlay]",
            ]
        );
    }

    #[test]
    fn unfocusable_video() {
        let doc = document([element("video")
            .expr("tabIndex", -1)
            .child(element("track").attr("kind", "captions"))
            .child(element("track").attr("kind", "descriptions"))]);
        assert_eq!(
            reports(&MediaElementRule, &doc),
            ["videoAriaHidden at <video>@0"]
        );
    }
}

//! A lint rule for image map areas.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the area element rule.
const ID: &str = "area-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("areaMissingAltAttribute")
        .combined("❌ area missing alt attribute")
        .error("❌ [Critical] area missing alt attribute (2.4.4 A)"),
    Message::new("areaEmptyAlt")
        .combined("❌ area has empty alt")
        .error("❌ [Critical] area has empty alt (2.4.4 A)"),
    Message::new("areaMissingHrefAttribute")
        .combined("❌ area missing href attribute")
        .error("❌ [Blocker] area missing href attribute (2.1.1 A)"),
];

/// Detects image map areas without a destination or a text alternative.
#[derive(Default, Debug, Clone, Copy)]
pub struct AreaElementRule;

impl Rule for AreaElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that image map areas have a destination and alternative text."
    }

    fn explanation(&self) -> &'static str {
        "Each `area` of an image map is a link. Like any link, it needs an `href`, and because \
         it has no text of its own its `alt` attribute is its only accessible name."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable, Tag::Operable])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["map-element", "img-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Combined, Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("area")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if !element.has("href") {
            cx.report("areaMissingHrefAttribute", element.location());
        }

        let Some(alt) = element.attribute("alt") else {
            cx.report("areaMissingAltAttribute", element.location());
            return;
        };

        let value = alt.value();
        if !value.has_value() || value.is_blank() {
            cx.report("areaEmptyAlt", alt.location());
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
    fn area_checks() {
        let doc = document([
            element("area"),
            element("area").attr("href", "/north").bare("alt"),
            element("area").attr("href", "/south").attr("alt", " "),
            element("area").attr("href", "/east").attr("alt", "East wing"),
        ]);
        assert_eq!(
            reports(&AreaElementRule, &doc),
            [
                "areaMissingHrefAttribute at <area>@0",
                "areaMissingAltAttribute at <area>@0",
                "areaEmptyAlt at <area>@1[alt]",
                "areaEmptyAlt at <area>@2[alt]",
            ]
        );
    }
}

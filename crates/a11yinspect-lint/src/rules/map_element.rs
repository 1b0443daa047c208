//! A lint rule for image maps.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the map element rule.
const ID: &str = "map-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("mapMissingNameAttribute")
        .combined("❌ map missing name attribute")
        .error("❌ [Best Practice] map missing name attribute (1.1.1 A)"),
    Message::new("mapAreaChildren")
        .combined("❌ map has no area children")
        .error("❌ [Best Practice] map has no area children (1.1.1 A)"),
    Message::new("mapEmptyNameAttribute")
        .error("❌ [Minor] map name attribute is empty (1.1.1 A)"),
    Message::new("mapAriaHidden")
        .warning("⚠️ map element with aria-hidden=true is hidden from assistive technology"),
];

/// Detects unnamed, empty and hidden image maps.
#[derive(Default, Debug, Clone, Copy)]
pub struct MapElementRule;

impl Rule for MapElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that image maps are named and contain areas."
    }

    fn explanation(&self) -> &'static str {
        "An image refers to its `map` by name, and the `area` children of the map are the \
         links users navigate to. Hiding a map hides those links."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable, Tag::Operable])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["area-element", "img-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("map")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        match element.attribute("name") {
            None => cx.report("mapMissingNameAttribute", element.location()),
            Some(name) if name.value().is_blank() => {
                cx.report("mapEmptyNameAttribute", name.location());
            }
            Some(_) => {}
        }

        if !element.child_elements().any(|c| c.is("area")) {
            cx.report("mapAreaChildren", element.location());
        }

        if resolve::is_hidden(element) {
            cx.report("mapAriaHidden", element.location());
        }
    }
}

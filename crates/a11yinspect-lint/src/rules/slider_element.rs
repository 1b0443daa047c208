//! A lint rule for range widgets.
//!
//! Sliders, scrollbars, spin buttons and progress bars all expose a value
//! within a range, which needs `aria-valuemin` and `aria-valuemax` unless
//! the widget is a native element that carries its own bounds.

use a11yinspect_ast::Element;
use a11yinspect_ast::Literal;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the slider element rule.
const ID: &str = "slider-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("sliderMissingName")
        .combined("⚠️ Element with role=\"slider\" missing accessible name (no aria-label or aria-labelledby)")
        .warning("⚠️ [Critical] Element with role=\"slider\" missing accessible name (no aria-label or aria-labelledby) (4.1.2 A)"),
    Message::new("sliderEmptyAriaLabel")
        .combined("⚠️ Element with role=\"slider\" has empty aria-label")
        .warning("⚠️ [Critical] Element with role=\"slider\" has empty aria-label (4.1.2 A)"),
    Message::new("sliderMissingTabindex")
        .combined("⚠️ Element with role=\"slider\" missing tabindex=\"0\" for keyboard access")
        .warning("⚠️ [Blocker] Element with role=\"slider\" missing tabindex=\"0\" for keyboard access (2.1.1 A)"),
    Message::new("sliderHasName")
        .combined("💡 Element with role=\"slider\" has accessible name")
        .warning("⚠️ [Major] Element with role=\"slider\" has accessible name (2.4.6 AA)"),
    Message::new("sliderMissingValuemin")
        .combined("⚠️ Element with role=\"slider\" missing aria-valuemin attribute")
        .warning("💡 [Best Practice] Element with role=\"slider\" missing aria-valuemin attribute (4.1.2 A)"),
    Message::new("sliderEmptyValuemin")
        .combined("⚠️ Element with role=\"slider\" has empty aria-valuemin attribute")
        .warning("💡 [Best Practice] Element with role=\"slider\" has empty aria-valuemin attribute (4.1.2 A)"),
    Message::new("sliderMissingValuemax")
        .combined("⚠️ Element with role=\"slider\" missing aria-valuemax attribute")
        .warning("💡 [Best Practice] Element with role=\"slider\" missing aria-valuemax attribute (4.1.2 A)"),
    Message::new("sliderEmptyValuemax")
        .combined("⚠️ Element with role=\"slider\" has empty aria-valuemax attribute")
        .warning("💡 [Best Practice] Element with role=\"slider\" has empty aria-valuemax attribute (4.1.2 A)"),
    Message::new("scrollbarMissingValuemin")
        .combined("⚠️ Element with role=\"scrollbar\" missing aria-valuemin attribute")
        .warning("💡 [Best Practice] Element with role=\"scrollbar\" missing aria-valuemin attribute (4.1.2 A)"),
    Message::new("scrollbarEmptyValuemin")
        .combined("⚠️ Element with role=\"scrollbar\" has empty aria-valuemin attribute")
        .warning("💡 [Best Practice] Element with role=\"scrollbar\" has empty aria-valuemin attribute (4.1.2 A)"),
    Message::new("scrollbarMissingValuemax")
        .combined("⚠️ Element with role=\"scrollbar\" missing aria-valuemax attribute")
        .warning("💡 [Best Practice] Element with role=\"scrollbar\" missing aria-valuemax attribute (4.1.2 A)"),
    Message::new("scrollbarEmptyValuemax")
        .combined("⚠️ Element with role=\"scrollbar\" has empty aria-valuemax attribute")
        .warning("💡 [Best Practice] Element with role=\"scrollbar\" has empty aria-valuemax attribute (4.1.2 A)"),
    Message::new("spinbuttonMissingValuemin")
        .combined("⚠️ Element with role=\"spinbutton\" missing aria-valuemin attribute")
        .warning("💡 [Best Practice] Element with role=\"spinbutton\" missing aria-valuemin attribute (4.1.2 A)"),
    Message::new("spinbuttonEmptyValuemin")
        .combined("⚠️ Element with role=\"spinbutton\" has empty aria-valuemin attribute")
        .warning("💡 [Best Practice] Element with role=\"spinbutton\" has empty aria-valuemin attribute (4.1.2 A)"),
    Message::new("spinbuttonMissingValuemax")
        .combined("⚠️ Element with role=\"spinbutton\" missing aria-valuemax attribute")
        .warning("💡 [Best Practice] Element with role=\"spinbutton\" missing aria-valuemax attribute (4.1.2 A)"),
    Message::new("spinbuttonEmptyValuemax")
        .combined("⚠️ Element with role=\"spinbutton\" has empty aria-valuemax attribute")
        .warning("💡 [Best Practice] Element with role=\"spinbutton\" has empty aria-valuemax attribute (4.1.2 A)"),
    Message::new("progressbarMissingValuemin")
        .combined("⚠️ Element with role=\"progressbar\" missing aria-valuemin attribute")
        .warning("💡 [Best Practice] Element with role=\"progressbar\" missing aria-valuemin attribute (4.1.2 A)"),
    Message::new("progressbarEmptyValuemin")
        .combined("⚠️ Element with role=\"progressbar\" has empty aria-valuemin attribute")
        .warning("💡 [Best Practice] Element with role=\"progressbar\" has empty aria-valuemin attribute (4.1.2 A)"),
    Message::new("progressbarMissingValuemax")
        .combined("⚠️ Element with role=\"progressbar\" missing aria-valuemax attribute")
        .warning("💡 [Best Practice] Element with role=\"progressbar\" missing aria-valuemax attribute (4.1.2 A)"),
    Message::new("progressbarEmptyValuemax")
        .combined("⚠️ Element with role=\"progressbar\" has empty aria-valuemax attribute")
        .warning("💡 [Best Practice] Element with role=\"progressbar\" has empty aria-valuemax attribute (4.1.2 A)"),
    Message::new("rangeMissingMin")
        .combined("⚠️ Input type=\"range\" missing min attribute")
        .warning("💡 [Best Practice] Input type=\"range\" missing min attribute (4.1.2 A)"),
    Message::new("rangeMissingMax")
        .combined("⚠️ Input type=\"range\" missing max attribute")
        .warning("💡 [Best Practice] Input type=\"range\" missing max attribute (4.1.2 A)"),
];

/// The keys reported for the bounds of a range role.
struct BoundKeys {
    /// The key for a missing `aria-valuemin`.
    missing_min: &'static str,
    /// The key for a blank `aria-valuemin`.
    empty_min: &'static str,
    /// The key for a missing `aria-valuemax`.
    missing_max: &'static str,
    /// The key for a blank `aria-valuemax`.
    empty_max: &'static str,
}

/// Gets the bound keys for a range role.
fn bound_keys(role: &str) -> Option<BoundKeys> {
    let (missing_min, empty_min, missing_max, empty_max) = match role {
        "slider" => (
            "sliderMissingValuemin",
            "sliderEmptyValuemin",
            "sliderMissingValuemax",
            "sliderEmptyValuemax",
        ),
        "scrollbar" => (
            "scrollbarMissingValuemin",
            "scrollbarEmptyValuemin",
            "scrollbarMissingValuemax",
            "scrollbarEmptyValuemax",
        ),
        "spinbutton" => (
            "spinbuttonMissingValuemin",
            "spinbuttonEmptyValuemin",
            "spinbuttonMissingValuemax",
            "spinbuttonEmptyValuemax",
        ),
        "progressbar" => (
            "progressbarMissingValuemin",
            "progressbarEmptyValuemin",
            "progressbarMissingValuemax",
            "progressbarEmptyValuemax",
        ),
        _ => return None,
    };

    Some(BoundKeys {
        missing_min,
        empty_min,
        missing_max,
        empty_max,
    })
}

/// Detects range widgets without bounds or a name.
#[derive(Default, Debug, Clone, Copy)]
pub struct SliderElementRule;

impl SliderElementRule {
    /// Checks the accessible name and focusability of a slider.
    fn check_slider(cx: &mut Context<'_>, element: &Element<'_>, native: bool) {
        if let Some(label) = element.attribute("aria-label") {
            let value = label.value();
            if value.is_blank() {
                cx.report("sliderEmptyAriaLabel", label.location());
            } else if value.has_value() {
                cx.report("sliderHasName", element.location());
            } else if !resolve::is_decorative(element) {
                cx.report("sliderMissingName", element.location());
            }
        } else if element.value("aria-labelledby").has_value() {
            cx.report("sliderHasName", element.location());
        } else if !resolve::is_decorative(element) {
            cx.report("sliderMissingName", element.location());
        }

        let focusable = resolve::tab_index(element)
            .and_then(|a| a.value().literal())
            .and_then(Literal::to_integer)
            == Some(0);
        if !native && !focusable {
            cx.report("sliderMissingTabindex", element.location());
        }
    }

    /// Checks one bound of a range widget.
    fn check_bound(
        cx: &mut Context<'_>,
        element: &Element<'_>,
        name: &str,
        missing: &'static str,
        empty: &'static str,
    ) {
        match element.attribute(name) {
            Some(bound) if bound.value().has_value() => {
                if bound.value().is_blank() {
                    cx.report(empty, bound.location());
                }
            }
            _ => cx.report(missing, element.location()),
        }
    }
}

impl Rule for SliderElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that range widgets declare their bounds and sliders are named and focusable."
    }

    fn explanation(&self) -> &'static str {
        "Assistive technology announces a range widget's value relative to its minimum and \
         maximum, so both must be declared. A custom slider must also be reachable by keyboard \
         and carry an accessible name."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Operable, Tag::Robust])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["progress-element", "meter-element", "role-props-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Combined, Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("input") || resolve::literal_role(element).is_some()
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let native = element.is("input") && element.value("type").as_str() == Some("range");
        if native {
            if !element.value("min").has_value() {
                cx.report("rangeMissingMin", element.location());
            }
            if !element.value("max").has_value() {
                cx.report("rangeMissingMax", element.location());
            }
        }

        let Some(role) = resolve::literal_role(element) else {
            return;
        };

        if role == "progressbar" && element.is("progress") {
            return;
        }

        let Some(keys) = bound_keys(role) else {
            return;
        };

        if role == "slider" {
            Self::check_slider(cx, element, native);
        }

        Self::check_bound(cx, element, "aria-valuemin", keys.missing_min, keys.empty_min);
        Self::check_bound(cx, element, "aria-valuemax", keys.missing_max, keys.empty_max);
    }
}

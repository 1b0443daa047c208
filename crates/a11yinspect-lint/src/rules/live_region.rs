//! A lint rule for live regions.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::resolve;

/// The identifier for the live region rule.
const ID: &str = "live-region";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("ariaLiveRegionMissingAria")
        .error("❌ [Major] aria-live region missing aria-atomic (4.1.2 A)"),
    Message::new("invalidAriaLiveValue")
        .error("❌ [Major] Invalid aria-live value (4.1.2 A)"),
];

/// Detects invalid and incomplete live regions.
#[derive(Default, Debug, Clone, Copy)]
pub struct LiveRegionRule;

impl Rule for LiveRegionRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that live regions use a valid politeness and declare `aria-atomic`."
    }

    fn explanation(&self) -> &'static str {
        "`aria-live` accepts `off`, `polite` and `assertive`. An active live region should also \
         declare `aria-atomic` so that it is clear whether the whole region or only the change \
         is announced."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Robust])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Understanding/status-messages.html")
    }

    fn related_rules(&self) -> &[&'static str] {
        &["output-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.value("aria-live").is_truthy()
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let Some(live) = element.attribute("aria-live") else {
            return;
        };

        let value = live.value();
        if resolve::is_invalid_token(value, &["off", "polite", "assertive"]) {
            cx.report("invalidAriaLiveValue", live.location());
        }

        if value.as_str() != Some("off") && !element.has("aria-atomic") {
            cx.report("ariaLiveRegionMissingAria", element.location());
        }
    }
}

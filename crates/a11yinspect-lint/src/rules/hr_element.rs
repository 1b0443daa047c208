//! A lint rule for thematic breaks.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the hr element rule.
const ID: &str = "hr-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("hrHaveRoleSeparatorPresentation")
        .combined("⚠️ hr should have role separator or presentation")
        .warning("💡 [Best Practice] hr should have role separator or presentation (1.3.1 A)"),
];

/// Detects `hr` elements whose role hides their meaning.
#[derive(Default, Debug, Clone, Copy)]
pub struct HrElementRule;

impl Rule for HrElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that an `hr` keeps a separator or presentational role."
    }

    fn explanation(&self) -> &'static str {
        "An `hr` is a separator. Giving it any other role misrepresents it to assistive \
         technology."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Robust])
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Combined, Variant::Warning]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("hr")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let Some(role) = element.attribute("role") else {
            return;
        };

        if let Some(literal) = role.value().literal() {
            if !matches!(literal.as_str(), Some("separator" | "presentation" | "none")) {
                cx.report("hrHaveRoleSeparatorPresentation", role.location());
            }
        }
    }
}

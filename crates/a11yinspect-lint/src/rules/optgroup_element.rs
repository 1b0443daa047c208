//! A lint rule for `optgroup` elements.

use a11yinspect_ast::Element;

use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;

/// The identifier for the optgroup element rule.
const ID: &str = "optgroup-element";

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("optgroupMissingLabelAttribute")
        .error("❌ [Best Practice] optgroup missing label attribute (1.3.1 A)"),
    Message::new("optgroupEmptyLabel")
        .error("❌ [Best Practice] optgroup has empty label (1.3.1 A)"),
];

/// Detects option groups without a label.
#[derive(Default, Debug, Clone, Copy)]
pub struct OptgroupElementRule;

impl Rule for OptgroupElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that option groups are labelled."
    }

    fn explanation(&self) -> &'static str {
        "The `label` attribute of an `optgroup` is the only name of the group and is announced \
         when the user moves into it."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable])
    }

    fn related_rules(&self) -> &[&'static str] {
        &["select-element"]
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Error]
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("optgroup")
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let Some(label) = element.attribute("label") else {
            cx.report("optgroupMissingLabelAttribute", element.location());
            return;
        };

        let value = label.value();
        if !value.has_value() || value.is_blank() {
            cx.report("optgroupEmptyLabel", label.location());
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
    fn optgroup_labels() {
        let doc = document([
            element("optgroup"),
            element("optgroup").attr("label", ""),
            element("optgroup").attr("label", "Fruit"),
        ]);
        assert_eq!(
            reports(&OptgroupElementRule, &doc),
            [
                "optgroupMissingLabelAttribute at <optgroup>@0",
                "optgroupEmptyLabel at <optgroup>@1[label]",
            ]
        );
    }
}

//! Extraction of the renderable text content of a subtree.

use crate::Element;
use crate::NodeRef;

/// The renderable text content of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextContent {
    /// The statically known portion of the text.
    pub text: String,
    /// Whether part of the content cannot be known statically.
    ///
    /// This is set for dynamic expression children and for components,
    /// whose rendered output is unknown.
    pub dynamic: bool,
}

impl TextContent {
    /// Gets the known text with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Determines if the content is definitely empty.
    ///
    /// Content with a dynamic part is never definitely empty.
    pub fn is_empty(&self) -> bool {
        !self.dynamic && self.trimmed().is_empty()
    }

    /// Gets the trimmed text if it is fully known.
    ///
    /// Checks that match the whole text must abstain when this is `None`.
    pub fn exact(&self) -> Option<&str> {
        if self.dynamic {
            None
        } else {
            Some(self.trimmed())
        }
    }
}

/// Extracts the text content of an element.
///
/// Text nodes contribute their value verbatim, literal expressions contribute
/// their rendered value and child elements contribute their own text.
pub(crate) fn extract(element: &Element<'_>) -> TextContent {
    let mut content = TextContent::default();
    append(element, &mut content);
    content
}

/// Appends the text content of an element to the given content.
fn append(element: &Element<'_>, content: &mut TextContent) {
    if !element.is_intrinsic() {
        content.dynamic = true;
    }

    for child in element.children() {
        match child {
            NodeRef::Text(text) => content.text.push_str(text),
            NodeRef::Expression(expr) => match expr.literal() {
                Some(literal) => content.text.push_str(&literal.to_text()),
                None => content.dynamic = true,
            },
            NodeRef::Element(child) => append(&child, content),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::NodeId;
    use crate::builder::document;
    use crate::builder::element;

    #[test]
    fn extracts_nested_text() {
        let doc = document([element("a")
            .text("Read ")
            .child(element("strong").text("more"))
            .expr_text(" now")]);
        let a = doc.element(NodeId::new(0)).expect("should be an element");
        let text = a.text();
        assert_eq!(text.text, "Read more now");
        assert!(!text.dynamic);
        assert_eq!(text.exact(), Some("Read more now"));
    }

    #[test]
    fn dynamic_text_is_never_empty() {
        let doc = document([
            element("button").dynamic_text(),
            element("button").text("  "),
            element("button").child(element("Icon")),
        ]);
        let empty: Vec<_> = doc
            .elements()
            .filter(|e| e.is("button"))
            .map(|e| e.text().is_empty())
            .collect();
        assert_eq!(empty, [false, true, false]);
    }
}

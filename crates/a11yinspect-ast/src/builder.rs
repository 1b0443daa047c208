//! Helpers for building small documents in tests.
//!
//! ```rust
//! use a11yinspect_ast::builder::document;
//! use a11yinspect_ast::builder::element;
//!
//! let doc = document([element("a").attr("href", "#main").text("Skip to content")]);
//! assert_eq!(doc.elements().count(), 1);
//! ```

use crate::Document;
use crate::Literal;
use crate::tree::AttributeNode;
use crate::tree::ElementNode;
use crate::tree::Expression;
use crate::tree::ExpressionNode;
use crate::tree::Initializer;
use crate::tree::Node;
use crate::tree::Program;
use crate::tree::TextNode;

/// Builds an element node.
#[derive(Debug, Clone)]
pub struct ElementBuilder(ElementNode);

/// Starts building an element with the given tag or component name.
pub fn element(name: &str) -> ElementBuilder {
    ElementBuilder(ElementNode {
        name: name.to_string(),
        attributes: Vec::new(),
        children: Vec::new(),
        span: None,
    })
}

/// Builds a document from top-level elements.
pub fn document(nodes: impl IntoIterator<Item = ElementBuilder>) -> Document {
    Document::new(Program {
        path: None,
        source: None,
        body: nodes.into_iter().map(Node::from).collect(),
    })
}

impl ElementBuilder {
    /// Adds an attribute with the given initializer.
    fn push_attr(mut self, name: &str, value: Option<Initializer>) -> Self {
        self.0.attributes.push(AttributeNode {
            name: name.to_string(),
            value,
            span: None,
        });
        self
    }

    /// Adds an attribute with a literal value (`name="value"`).
    pub fn attr(self, name: &str, value: impl Into<Literal>) -> Self {
        self.push_attr(name, Some(Initializer::Literal(value.into())))
    }

    /// Adds an attribute without a value (`name`).
    pub fn bare(self, name: &str) -> Self {
        self.push_attr(name, None)
    }

    /// Adds an attribute with a literal expression container
    /// (`name={value}`).
    pub fn expr(self, name: &str, value: impl Into<Literal>) -> Self {
        self.push_attr(
            name,
            Some(Initializer::Expression {
                expression: Expression::Literal {
                    value: value.into(),
                },
            }),
        )
    }

    /// Adds an attribute with a dynamic expression (`name={x}`).
    pub fn dynamic(self, name: &str) -> Self {
        self.push_attr(
            name,
            Some(Initializer::Expression {
                expression: Expression::Dynamic { source: None },
            }),
        )
    }

    /// Adds a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.0.children.push(child.into());
        self
    }

    /// Adds a text child.
    pub fn text(self, text: &str) -> Self {
        self.child(Node::Text(TextNode {
            value: text.to_string(),
            span: None,
        }))
    }

    /// Adds a literal expression child (`{"text"}`).
    pub fn expr_text(self, value: impl Into<Literal>) -> Self {
        self.child(Node::Expression(ExpressionNode {
            expression: Expression::Literal {
                value: value.into(),
            },
            span: None,
        }))
    }

    /// Adds a dynamic expression child (`{user.name}`).
    pub fn dynamic_text(self) -> Self {
        self.child(Node::Expression(ExpressionNode {
            expression: Expression::Dynamic { source: None },
            span: None,
        }))
    }
}

impl From<ElementBuilder> for Node {
    fn from(builder: ElementBuilder) -> Self {
        Node::Element(builder.0)
    }
}

//! The serialized form of a markup tree handed over by a host parser.
//!
//! The engine never parses template source itself; a parser for the host
//! language lowers its syntax tree to these types (typically as JSON) and the
//! [`Document`](crate::Document) arena is built from them.

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::Literal;
use crate::Span;

/// The root of a serialized markup tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// The path of the source file the tree was produced from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The original source text.
    ///
    /// Only used to render diagnostic labels; spans index into this text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// The top-level nodes of the file.
    #[serde(default)]
    pub body: Vec<Node>,
}

/// A node in a serialized markup tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// A markup element or component.
    Element(ElementNode),
    /// Literal text between elements.
    Text(TextNode),
    /// An expression container in child position.
    Expression(ExpressionNode),
}

/// A serialized markup element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementNode {
    /// The tag or component name, exactly as written.
    pub name: String,
    /// The attributes in source order.
    #[serde(default)]
    pub attributes: Vec<AttributeNode>,
    /// The children in source order.
    #[serde(default)]
    pub children: Vec<Node>,
    /// The span of the element's opening tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

/// A serialized attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeNode {
    /// The attribute name, exactly as written (e.g. `tabIndex`).
    pub name: String,
    /// The initializer of the attribute.
    ///
    /// `None` for a bare attribute such as `<input required>`. An explicit
    /// `"value": null` is a null literal.
    #[serde(
        default,
        deserialize_with = "deserialize_initializer",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Initializer>,
    /// The span of the whole attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

/// Deserializes the initializer of an attribute that has a `value` key.
fn deserialize_initializer<'de, D>(deserializer: D) -> Result<Option<Initializer>, D::Error>
where
    D: Deserializer<'de>,
{
    let initializer = Option::<Initializer>::deserialize(deserializer)?;
    Ok(Some(initializer.unwrap_or(Initializer::Literal(Literal::Null))))
}

/// The initializer of an attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Initializer {
    /// An expression container (`alt={...}`).
    Expression {
        /// The contained expression.
        expression: Expression,
    },
    /// A literal value (`alt="..."`).
    Literal(Literal),
}

/// Literal text in child position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    /// The text, verbatim.
    pub value: String,
    /// The span of the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

/// An expression container in child position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionNode {
    /// The contained expression.
    pub expression: Expression,
    /// The span of the container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

/// An expression inside an expression container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Expression {
    /// A literal whose value is known statically.
    Literal {
        /// The value of the literal.
        #[serde(default)]
        value: Literal,
    },
    /// Any other expression; its value cannot be known statically.
    Dynamic {
        /// The source text of the expression, if the parser provided it.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<String>,
    },
}

impl Expression {
    /// Gets the literal value of the expression, if it is a literal.
    pub fn literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal { value } => Some(value),
            Self::Dynamic { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn it_deserializes_a_tree() {
        let program: Program = serde_json::from_str(
            r#"{
                "path": "App.jsx",
                "body": [{
                    "type": "element",
                    "name": "img",
                    "attributes": [
                        { "name": "src", "value": "x.png" },
                        { "name": "hidden" },
                        { "name": "title", "value": null },
                        { "name": "width", "value": { "expression": { "type": "literal", "value": 10 } } },
                        { "name": "alt", "value": { "expression": { "type": "dynamic", "source": "t('x')" } } }
                    ],
                    "children": [
                        { "type": "text", "value": "hi" },
                        { "type": "expression", "expression": { "type": "literal", "value": null } }
                    ],
                    "span": { "start": 0, "end": 10 }
                }]
            }"#,
        )
        .expect("should deserialize");

        let Node::Element(img) = &program.body[0] else {
            panic!("expected an element");
        };

        assert_eq!(img.name, "img");
        assert_eq!(img.span, Some(Span::new(0, 10)));
        assert_eq!(
            img.attributes[0].value,
            Some(Initializer::Literal(Literal::String("x.png".into())))
        );
        assert_eq!(img.attributes[1].value, None);
        assert_eq!(
            img.attributes[2].value,
            Some(Initializer::Literal(Literal::Null))
        );
        assert_eq!(
            img.attributes[3].value,
            Some(Initializer::Expression {
                expression: Expression::Literal {
                    value: Literal::Number(10.0)
                }
            })
        );
        assert_eq!(
            img.attributes[4].value,
            Some(Initializer::Expression {
                expression: Expression::Dynamic {
                    source: Some("t('x')".into())
                }
            })
        );
        assert_eq!(
            img.children[1],
            Node::Expression(ExpressionNode {
                expression: Expression::Literal {
                    value: Literal::Null
                },
                span: None,
            })
        );
    }
}

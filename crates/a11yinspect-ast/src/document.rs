//! The read-only document arena and its element views.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::AttributeValue;
use crate::Expression;
use crate::LoadError;
use crate::Location;
use crate::Span;
use crate::TextContent;
use crate::text;
use crate::tree::AttributeNode;
use crate::tree::Node;
use crate::tree::Program;

/// Identifies a node of a [`Document`].
///
/// Identifiers are assigned in pre-order, so comparing two identifiers
/// compares the document order of their nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Creates a node identifier from an arena index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Gets the arena index of the node.
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The data of a markup element stored in the arena.
#[derive(Debug, Clone)]
struct ElementData {
    /// The tag or component name.
    name: String,
    /// The attributes in source order.
    attributes: Vec<AttributeNode>,
}

/// The kind of a node stored in the arena.
#[derive(Debug, Clone)]
enum NodeKind {
    /// An element.
    Element(ElementData),
    /// Literal text.
    Text(String),
    /// An expression container.
    Expression(Expression),
}

/// A node stored in the arena.
#[derive(Debug, Clone)]
struct NodeData {
    /// The parent element of the node, if it is not a root.
    parent: Option<NodeId>,
    /// The children of the node in source order.
    children: Vec<NodeId>,
    /// The exclusive end of the node's subtree in the arena.
    end: usize,
    /// The span of the node, if known.
    span: Option<Span>,
    /// The kind of the node.
    kind: NodeKind,
}

/// A markup tree flattened into a pre-order arena.
///
/// The tree is immutable once built. Every node's parent link is established
/// during construction so that ancestor queries are available to every check.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// The path of the source file, if known.
    path: Option<String>,
    /// The original source text, if known.
    source: Option<String>,
    /// The nodes in pre-order.
    nodes: Vec<NodeData>,
    /// The top-level nodes.
    roots: Vec<NodeId>,
}

impl Document {
    /// Creates a new document from a serialized program.
    pub fn new(program: Program) -> Self {
        let mut document = Self {
            path: program.path,
            source: program.source,
            nodes: Vec::new(),
            roots: Vec::new(),
        };

        for node in program.body {
            let id = document.push(None, node);
            document.roots.push(id);
        }

        document
    }

    /// Decodes a document from its JSON serialization.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Program>(json).map(Self::new)
    }

    /// Loads a document from a JSON file.
    ///
    /// When the serialized program carries no path, the file's path is used.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut program: Program =
            serde_json::from_str(&json).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        if program.path.is_none() {
            program.path = Some(path.display().to_string());
        }

        let document = Self::new(program);
        debug!(
            path = %path.display(),
            nodes = document.len(),
            "loaded serialized document"
        );
        Ok(document)
    }

    /// Pushes a node and its subtree into the arena.
    fn push(&mut self, parent: Option<NodeId>, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        let (span, kind, children) = match node {
            Node::Element(element) => (
                element.span,
                NodeKind::Element(ElementData {
                    name: element.name,
                    attributes: element.attributes,
                }),
                element.children,
            ),
            Node::Text(text) => (text.span, NodeKind::Text(text.value), Vec::new()),
            Node::Expression(expr) => (expr.span, NodeKind::Expression(expr.expression), Vec::new()),
        };

        self.nodes.push(NodeData {
            parent,
            children: Vec::with_capacity(children.len()),
            end: id.0 + 1,
            span,
            kind,
        });

        for child in children {
            let child = self.push(Some(id), child);
            self.nodes[id.0].children.push(child);
        }

        self.nodes[id.0].end = self.nodes.len();
        id
    }

    /// Gets the path of the source file, if known.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Gets the original source text, if known.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Gets the number of nodes in the document.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Determines if the document has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Gets the top-level nodes of the document.
    pub fn roots(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.roots.iter().filter_map(move |id| self.node(*id))
    }

    /// Gets a node by its identifier.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        let data = self.nodes.get(id.0)?;
        Some(match &data.kind {
            NodeKind::Element(element) => NodeRef::Element(Element {
                document: self,
                id,
                data: element,
            }),
            NodeKind::Text(text) => NodeRef::Text(text),
            NodeKind::Expression(expr) => NodeRef::Expression(expr),
        })
    }

    /// Gets an element by its identifier.
    ///
    /// Returns `None` if the node does not exist or is not an element.
    pub fn element(&self, id: NodeId) -> Option<Element<'_>> {
        match self.node(id)? {
            NodeRef::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Iterates every element of the document in document order.
    pub fn elements(&self) -> impl Iterator<Item = Element<'_>> + '_ {
        self.elements_in(0, self.nodes.len())
    }

    /// Iterates the elements stored in the given arena range.
    fn elements_in(&self, start: usize, end: usize) -> impl Iterator<Item = Element<'_>> + '_ {
        (start..end).filter_map(move |i| self.element(NodeId(i)))
    }

    /// Gets the span of a location, if the tree carries one.
    ///
    /// An attribute without its own span falls back to its element's span.
    pub fn span_of(&self, location: Location) -> Option<Span> {
        match location {
            Location::Node(id) => self.nodes.get(id.0)?.span,
            Location::Attribute { node, index } => self
                .element(node)
                .and_then(|e| e.data.attributes.get(index))
                .and_then(|a| a.span)
                .or_else(|| self.nodes.get(node.0)?.span),
            Location::Document => None,
        }
    }

    /// Describes a location in a short, stable form.
    ///
    /// Elements are described as `<name>@<id>` and attributes as
    /// `<name>@<id>[<attribute>]`.
    pub fn describe(&self, location: Location) -> String {
        match location {
            Location::Node(id) => match self.node(id) {
                Some(NodeRef::Element(e)) => format!("<{name}>@{id}", name = e.name()),
                Some(NodeRef::Text(_)) => format!("#text@{id}"),
                Some(NodeRef::Expression(_)) => format!("#expression@{id}"),
                None => format!("?@{id}"),
            },
            Location::Attribute { node, index } => match self.element(node) {
                Some(e) => format!(
                    "<{name}>@{node}[{attr}]",
                    name = e.name(),
                    attr = e
                        .data
                        .attributes
                        .get(index)
                        .map(|a| a.name.as_str())
                        .unwrap_or("?")
                ),
                None => format!("?@{node}[{index}]"),
            },
            Location::Document => "document".to_string(),
        }
    }
}

/// A reference to a node of a [`Document`].
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    /// An element.
    Element(Element<'a>),
    /// Literal text.
    Text(&'a str),
    /// An expression container.
    Expression(&'a Expression),
}

impl<'a> NodeRef<'a> {
    /// Gets the node as an element, if it is one.
    pub fn as_element(&self) -> Option<Element<'a>> {
        match self {
            Self::Element(e) => Some(*e),
            _ => None,
        }
    }
}

/// A read-only view of an element in a [`Document`].
#[derive(Clone, Copy)]
pub struct Element<'a> {
    /// The document containing the element.
    document: &'a Document,
    /// The identifier of the element.
    id: NodeId,
    /// The element's data.
    data: &'a ElementData,
}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("name", &self.data.name)
            .finish()
    }
}

impl<'a> Element<'a> {
    /// Gets the identifier of the element.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Gets the document containing the element.
    pub fn document(&self) -> &'a Document {
        self.document
    }

    /// Gets the location referring to the element.
    pub fn location(&self) -> Location {
        Location::Node(self.id)
    }

    /// Gets the tag or component name of the element.
    pub fn name(&self) -> &'a str {
        &self.data.name
    }

    /// Determines if the element's name is the given tag.
    pub fn is(&self, tag: &str) -> bool {
        self.data.name == tag
    }

    /// Determines if the element's name is one of the given tags.
    pub fn is_any(&self, tags: &[&str]) -> bool {
        tags.contains(&self.name())
    }

    /// Determines if the element is an intrinsic markup element.
    ///
    /// Components (a capitalized name or a member expression such as
    /// `Foo.Bar`) are not intrinsic; their rendered output is unknown.
    pub fn is_intrinsic(&self) -> bool {
        self.data
            .name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase())
            && !self.data.name.contains('.')
    }

    /// Gets the span of the element, if known.
    pub fn span(&self) -> Option<Span> {
        self.document.nodes[self.id.0].span
    }

    /// Iterates the attributes of the element in source order.
    pub fn attributes(&self) -> impl Iterator<Item = Attribute<'a>> + 'a {
        let element = self.id;
        self.data
            .attributes
            .iter()
            .enumerate()
            .map(move |(index, node)| Attribute {
                element,
                index,
                node,
            })
    }

    /// Gets the first attribute with the given name.
    pub fn attribute(&self, name: &str) -> Option<Attribute<'a>> {
        self.attributes().find(|a| a.name() == name)
    }

    /// Gets the first attribute matching any of the given names.
    ///
    /// Used for attributes written in more than one casing, such as
    /// `tabIndex` and `tabindex`.
    pub fn attribute_any(&self, names: &[&str]) -> Option<Attribute<'a>> {
        self.attributes().find(|a| names.contains(&a.name()))
    }

    /// Resolves the value of the attribute with the given name.
    pub fn value(&self, name: &str) -> AttributeValue<'a> {
        self.attribute(name)
            .map(|a| a.value())
            .unwrap_or(AttributeValue::Absent)
    }

    /// Resolves the value of the first attribute matching any of the names.
    pub fn value_any(&self, names: &[&str]) -> AttributeValue<'a> {
        self.attribute_any(names)
            .map(|a| a.value())
            .unwrap_or(AttributeValue::Absent)
    }

    /// Determines if an attribute with the given name is present.
    pub fn has(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Gets the parent element, if any.
    pub fn parent(&self) -> Option<Element<'a>> {
        let parent = self.document.nodes[self.id.0].parent?;
        self.document.element(parent)
    }

    /// Iterates the ancestors of the element, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = Element<'a>> + 'a {
        std::iter::successors(self.parent(), Element::parent)
    }

    /// Iterates the child nodes of the element in source order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let document = self.document;
        document.nodes[self.id.0]
            .children
            .iter()
            .filter_map(move |id| document.node(*id))
    }

    /// Iterates the child elements of the element in source order.
    pub fn child_elements(&self) -> impl Iterator<Item = Element<'a>> + 'a {
        self.children().filter_map(|n| n.as_element())
    }

    /// Iterates every descendant element in document order.
    pub fn descendants(&self) -> impl Iterator<Item = Element<'a>> + 'a {
        let end = self.document.nodes[self.id.0].end;
        self.document.elements_in(self.id.0 + 1, end)
    }

    /// Extracts the renderable text content of the element.
    pub fn text(&self) -> TextContent {
        text::extract(self)
    }
}

/// A read-only view of an attribute of an [`Element`].
#[derive(Debug, Clone, Copy)]
pub struct Attribute<'a> {
    /// The element carrying the attribute.
    element: NodeId,
    /// The index of the attribute on the element.
    index: usize,
    /// The serialized attribute.
    node: &'a AttributeNode,
}

impl<'a> Attribute<'a> {
    /// Gets the attribute name as written.
    pub fn name(&self) -> &'a str {
        &self.node.name
    }

    /// Resolves the attribute's value.
    pub fn value(&self) -> AttributeValue<'a> {
        AttributeValue::resolve(Some(self.node.value.as_ref()))
    }

    /// Gets the location referring to the attribute.
    pub fn location(&self) -> Location {
        Location::Attribute {
            node: self.element,
            index: self.index,
        }
    }

    /// Gets the span of the attribute, if known.
    pub fn span(&self) -> Option<Span> {
        self.node.span
    }
}

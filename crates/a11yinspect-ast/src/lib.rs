//! A read-only model of markup element trees for accessibility analysis.
//!
//! A host parser lowers its syntax tree to the serialized form in [`tree`];
//! the tree is then flattened into a [`Document`] arena whose [`Element`]
//! views expose tag names, resolved attribute values, children and parent
//! links.
//!
//! # Examples
//!
//! ```rust
//! use a11yinspect_ast::Document;
//!
//! let document = Document::from_json(
//!     r#"{ "body": [{ "type": "element", "name": "img", "attributes": [{ "name": "alt", "value": "A cat" }] }] }"#,
//! )
//! .expect("should decode");
//!
//! let img = document.elements().next().expect("should have an element");
//! assert_eq!(img.value("alt").as_str(), Some("A cat"));
//! ```

#![warn(missing_debug_implementations)]

use std::path::PathBuf;

#[cfg(any(test, feature = "builder"))]
pub mod builder;
mod diagnostic;
mod document;
mod text;
pub mod tree;
mod value;

pub use diagnostic::*;
pub use document::*;
pub use text::TextContent;
pub use tree::Expression;
pub use value::*;

/// Represents an error that occurs when loading a serialized document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read `{}`", .path.display())]
    Io {
        /// The path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid serialized tree.
    #[error("failed to decode `{}`", .path.display())]
    Json {
        /// The path of the file.
        path: PathBuf,
        /// The underlying decoding error.
        #[source]
        source: serde_json::Error,
    },
}

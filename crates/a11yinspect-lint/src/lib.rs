//! Accessibility lint rules for markup element trees.
//!
//! Every rule family is implemented once and registered under up to three
//! names: the combined rule, an `-error` rule reporting the blocking subset
//! and a `-warning` rule reporting the advisory subset. A host selects among
//! them by name, usually through a [`Profile`].
//!
//! # Examples
//!
//! An example of linting a serialized tree:
//!
//! ```rust
//! use a11yinspect_lint::Linter;
//! use a11yinspect_lint::ast::Document;
//!
//! let document = Document::from_json(
//!     r#"{ "body": [{ "type": "element", "name": "img", "attributes": [{ "name": "src", "value": "cat.png" }] }] }"#,
//! )
//! .expect("should decode");
//!
//! let diagnostics = Linter::default().lint(&document);
//! assert!(
//!     diagnostics
//!         .iter()
//!         .any(|d| d.key() == Some("imgMissingAltNoAria"))
//! );
//! ```

#![warn(missing_debug_implementations)]

mod config;
pub mod knowledge;
mod linter;
mod profile;
pub mod resolve;
mod rule;
pub mod rules;
mod state;
mod tags;

pub use a11yinspect_ast as ast;
pub use config::*;
pub use linter::*;
pub use profile::*;
pub use rule::*;
pub use rules::rules;
pub use state::*;
pub use tags::*;

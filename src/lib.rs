//! A command line tool for checking markup trees for accessibility problems.
//!
//! The tool reads serialized element trees (see [`a11yinspect_ast::Document`])
//! and runs the [`a11yinspect_lint`] rules over them.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod commands;
pub mod config;
pub mod diagnostics;

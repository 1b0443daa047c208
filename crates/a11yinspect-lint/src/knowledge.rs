//! Static accessibility tables.
//!
//! These tables are the single source of truth for which roles, properties
//! and values are valid.

pub mod aria;
pub mod html;
pub mod phrases;

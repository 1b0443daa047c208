//! Implementation of a11yinspect CLI commands.

pub mod check;
pub mod config;
pub mod explain;
pub mod profile;

//! Internal support utilities for the derive.
//!
//! Attribute parsing, diagnostics and small syn helpers.

pub mod attrs;
pub mod diag;
pub mod utils;

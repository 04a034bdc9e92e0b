//! Prelude module for convenient imports.
//!
//! ```rust
//! use emptycheck::prelude::*;
//! ```

pub use crate::capability::{Emptiable, Zeroable};
pub use crate::engine::{empty_check, empty_check_dyn};
pub use crate::error::RequiredFieldError;
pub use crate::inspect::{Field, Inspect, Record, Shape};
pub use crate::EmptyCheckExt;

#[cfg(feature = "derive")]
pub use crate::EmptyCheck;

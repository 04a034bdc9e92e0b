//! # emptycheck
//!
//! Recursive "is every required field filled in?" checks for structured
//! values: records, nested records, sequences of records and scalars.
//!
//! ## Quick Start
//!
//! ```rust
//! use emptycheck::prelude::*;
//!
//! #[derive(EmptyCheck)]
//! struct Address {
//!     street: String,
//!     zip: u32,
//! }
//!
//! #[derive(EmptyCheck)]
//! struct Order {
//!     id: uuid::Uuid,
//!     items: Vec<Address>,
//!     express: bool,
//!     #[emptycheck(not_required)]
//!     comment: String,
//! }
//!
//! let order = Order {
//!     id: uuid::Uuid::from_u128(7),
//!     items: vec![Address { street: "Main".into(), zip: 0 }],
//!     express: false,
//!     comment: String::new(),
//! };
//! let error = order.empty_check().unwrap_err();
//! assert_eq!(error.to_string(), "required field zip is empty");
//! ```
//!
//! ## What counts as empty
//!
//! - `None`, `""`, numeric zero and the nil UUID
//! - a sequence with no elements (element *values* of scalar sequences are
//!   not inspected)
//! - whatever a type says through [`Emptiable`] or [`Zeroable`]
//!
//! `bool` is never empty. A field marked `#[emptycheck(not_required)]` is
//! never looked at.
//!
//! ## Failure classes
//!
//! An empty field is an `Err(`[`RequiredFieldError`]`)`. A value no rule can
//! classify is a bug in the calling code and panics instead.
//!
//! ## Features
//!
//! - `derive` (default): `#[derive(EmptyCheck)]`
//! - `temporal` (default): [`Zeroable`] for `chrono` date and time types

extern crate self as emptycheck;

pub mod capability;
pub mod classify;
pub mod engine;
pub mod error;
pub mod inspect;
pub mod prelude;

pub use capability::{Emptiable, Zeroable};
pub use classify::is_empty;
pub use engine::{check_value, empty_check, empty_check_dyn};
pub use error::{RequiredFieldError, Result};
pub use inspect::{Elements, Field, FieldValue, Inspect, Record, Scalar, Sequence, Shape};

#[cfg(feature = "derive")]
pub use emptycheck_macros::EmptyCheck;

/// Method-call form of [`empty_check`] for every [`Record`].
pub trait EmptyCheckExt: Record {
    /// See [`empty_check`].
    fn empty_check(&self) -> Result {
        empty_check(self)
    }
}

impl<R: Record + ?Sized> EmptyCheckExt for R {}

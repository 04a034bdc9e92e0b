//! # emptycheck-macros
//!
//! `#[derive(EmptyCheck)]` for the `emptycheck` crate. Use it through the
//! re-export `emptycheck::EmptyCheck`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod empty_check;
mod support;

/// Derives `Inspect` and `Record` for a struct.
///
/// The generated field table lists every named field in declaration order.
/// Each checked field's type must implement `Inspect`.
///
/// # Attributes
///
/// ## Container attributes (`#[emptycheck(...)]` on the item)
///
/// - `emptiable` - report the `Emptiable` capability (implement it by hand)
/// - `zeroable` - report the `Zeroable` capability (implement it by hand)
/// - `crate = "..."` - path to the `emptycheck` crate (default: `::emptycheck`)
///
/// With a capability the derive also accepts enums, tuple structs and unit
/// structs; the value is then classified only through the capability.
///
/// ## Field attributes
///
/// - `#[emptycheck(not_required)]` - never check this field or anything
///   inside it; its type needs no `Inspect` implementation
///
/// # Example
///
/// ```ignore
/// use emptycheck::{EmptyCheck, Emptiable};
///
/// #[derive(EmptyCheck)]
/// struct Profile {
///     name: String,
///     nickname: Nickname,
///     #[emptycheck(not_required)]
///     bio: String,
/// }
///
/// #[derive(EmptyCheck)]
/// #[emptycheck(emptiable)]
/// struct Nickname(String);
///
/// impl Emptiable for Nickname {
///     fn is_empty(&self) -> bool {
///         self.0.trim().is_empty()
///     }
/// }
/// ```
#[proc_macro_derive(EmptyCheck, attributes(emptycheck))]
pub fn derive_empty_check(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match empty_check::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => support::diag::to_compile_error(err),
    }
}

//! The traversal engine.
//!
//! Walks a record's fields in declaration order and stops at the first empty
//! required field:
//!
//! - a field marked not required is skipped along with its subtree
//! - a value with a capability is a leaf, classified through the capability
//! - a record is descended into, using the field name as the new label
//! - a sequence is empty when it has no elements; otherwise its record,
//!   sequence, identifier and capability elements are checked and reported
//!   under the label of the field holding the sequence
//! - anything else goes to the classifier

use tracing::{debug, trace};

use crate::classify::is_empty;
use crate::error::{RequiredFieldError, Result};
use crate::inspect::{Elements, FieldValue, Inspect, Record, Scalar, Shape};

/// Checks that every required field of `record` is populated.
///
/// Returns the first empty required field, in declaration order, as a
/// [`RequiredFieldError`].
///
/// # Panics
///
/// Panics when a field holds a value no classification rule covers.
///
/// # Examples
///
/// ```rust
/// use emptycheck::{EmptyCheck, empty_check};
///
/// #[derive(EmptyCheck)]
/// struct Signup {
///     email: String,
///     age: u8,
///     #[emptycheck(not_required)]
///     referrer: Option<String>,
/// }
///
/// let signup = Signup { email: "a@b.c".into(), age: 0, referrer: None };
/// assert_eq!(empty_check(&signup).unwrap_err().field(), "age");
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(record = std::any::type_name::<R>()))]
pub fn empty_check<R: Record + ?Sized>(record: &R) -> Result {
    check_record(record, "")
}

/// Like [`empty_check`], for a root only known as `dyn Inspect`.
///
/// # Panics
///
/// Panics when `value` is not a record, and in the same cases as
/// [`empty_check`].
#[tracing::instrument(level = "trace", skip_all, fields(record = value.type_name()))]
pub fn empty_check_dyn(value: &dyn Inspect) -> Result {
    match value.shape() {
        Shape::Record(record) => check_record(record, ""),
        _ => panic!("arg must be a record, got {}", value.type_name()),
    }
}

/// Checks any value under a context label.
///
/// Records and sequences are walked; terminal values go straight to the
/// classifier and report `label` when empty.
pub fn check_value(value: &dyn Inspect, label: &str) -> Result {
    match value.shape() {
        Shape::Record(record) => check_record(record, label),
        Shape::Sequence(sequence) => check_sequence(sequence, label),
        Shape::Scalar(_) | Shape::Opaque => leaf(value, label),
    }
}

fn check_record(record: &(impl Record + ?Sized), label: &str) -> Result {
    trace!(label = label, "checking record");
    for field in record.fields() {
        let value = match field.value {
            FieldValue::Required(value) => value,
            FieldValue::NotRequired => {
                trace!(field = field.name, "skipping not-required field");
                continue;
            }
        };

        if value.has_capability() {
            leaf(value, field.name)?;
            continue;
        }

        match value.shape() {
            Shape::Record(nested) => check_record(nested, field.name)?,
            Shape::Sequence(sequence) => check_sequence(sequence, field.name)?,
            Shape::Scalar(_) | Shape::Opaque => leaf(value, field.name)?,
        }
    }
    Ok(())
}

fn check_sequence(elements: Elements<'_>, label: &str) -> Result {
    if elements.is_empty() {
        return violation(label);
    }
    trace!(label = label, len = elements.len(), "checking sequence");

    for element in elements {
        if element.has_capability() {
            leaf(element, label)?;
            continue;
        }

        match element.shape() {
            Shape::Record(record) => check_record(record, label)?,
            Shape::Sequence(nested) => check_sequence(nested, label)?,
            Shape::Scalar(Scalar::Identifier(_)) => leaf(element, label)?,
            // Only the sequence's own length counts for other scalars.
            Shape::Scalar(_) | Shape::Opaque => {}
        }
    }
    Ok(())
}

fn leaf(value: &dyn Inspect, label: &str) -> Result {
    if is_empty(value) {
        violation(label)
    } else {
        Ok(())
    }
}

fn violation(label: &str) -> Result {
    debug!(field = label, "required field is empty");
    Err(RequiredFieldError::new(label.to_owned()))
}

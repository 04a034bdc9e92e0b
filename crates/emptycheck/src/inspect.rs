//! Structural view of checked values.
//!
//! Rust has no runtime reflection, so every checked type describes itself
//! through [`Inspect`]: it is a [`Record`] with named fields, a [`Sequence`]
//! of elements, a [`Scalar`] with a built-in emptiness rule, or
//! [`Shape::Opaque`] (classifiable only through a capability).
//!
//! Records are usually described by `#[derive(EmptyCheck)]`; the remaining
//! implementations in this module cover the standard scalar, pointer and
//! collection types.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use uuid::Uuid;

use crate::capability::{Emptiable, Zeroable};

// ============================================================================
// INSPECT
// ============================================================================

/// A value the checker can walk.
///
/// The capability queries default to `None`. They are answered by the
/// concrete value, so a `Box<dyn Inspect>` field resolves capabilities for
/// whatever it holds at check time.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be checked for emptiness",
    label = "no emptiness rule for `{Self}`",
    note = "derive `EmptyCheck` for it, or mark the field `#[emptycheck(not_required)]`"
)]
pub trait Inspect {
    /// How the traversal should treat this value.
    fn shape(&self) -> Shape<'_>;

    /// The self-reporting capability, if this value has one.
    fn as_emptiable(&self) -> Option<&dyn Emptiable> {
        None
    }

    /// The zero-checkable capability, if this value has one.
    fn as_zeroable(&self) -> Option<&dyn Zeroable> {
        None
    }

    /// Name of the concrete type, used in programmer-error panics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Whether either capability is present.
    fn has_capability(&self) -> bool {
        self.as_emptiable().is_some() || self.as_zeroable().is_some()
    }
}

/// The structural kind of a value.
pub enum Shape<'a> {
    /// Fixed named fields; the traversal descends into them.
    Record(&'a dyn Record),
    /// Ordered elements; the traversal checks the length, then the elements.
    Sequence(Elements<'a>),
    /// A terminal value with a built-in rule.
    Scalar(Scalar<'a>),
    /// A terminal value with no built-in rule.
    Opaque,
}

impl std::fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Record(record) => f
                .debug_struct("Record")
                .field("fields", &record.fields().len())
                .finish(),
            Self::Sequence(elements) => f
                .debug_struct("Sequence")
                .field("len", &elements.len())
                .finish(),
            Self::Scalar(scalar) => f.debug_tuple("Scalar").field(scalar).finish(),
            Self::Opaque => f.write_str("Opaque"),
        }
    }
}

/// Terminal values with a built-in emptiness rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    /// An optional reference; empty when absent.
    Nullable {
        /// Whether a value is present.
        present: bool,
    },
    /// Text; empty when zero-length.
    Str(&'a str),
    /// Any signed integer, widened; empty when zero.
    Signed(i128),
    /// Any unsigned integer, widened; empty when zero.
    Unsigned(u128),
    /// Any float, widened; empty when zero.
    Float(f64),
    /// Never empty.
    Bool(bool),
    /// A UUID; empty when nil.
    Identifier(Uuid),
}

// ============================================================================
// RECORDS
// ============================================================================

/// A value with fixed named fields.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a record",
    label = "not a record",
    note = "only structs with named fields can be the root of a check"
)]
pub trait Record {
    /// Field descriptors in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// One entry in a record's field table.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    /// The field name, reported on violation.
    pub name: &'a str,
    /// The value, or the skip marker.
    pub value: FieldValue<'a>,
}

/// Whether a field takes part in the check.
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    /// Checked, and descended into when it is a record or sequence.
    Required(&'a dyn Inspect),
    /// Skipped together with its whole subtree.
    NotRequired,
}

impl<'a> Field<'a> {
    /// A field that must not be empty.
    pub fn required(name: &'a str, value: &'a dyn Inspect) -> Self {
        Self {
            name,
            value: FieldValue::Required(value),
        }
    }

    /// A field marked not required.
    pub fn not_required(name: &'a str) -> Self {
        Self {
            name,
            value: FieldValue::NotRequired,
        }
    }

    /// Whether the field is checked.
    pub fn is_required(&self) -> bool {
        matches!(self.value, FieldValue::Required(_))
    }
}

impl std::fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("required", &self.is_required())
            .finish()
    }
}

// ============================================================================
// SEQUENCES
// ============================================================================

/// An ordered collection of elements.
pub trait Sequence {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements in order.
    fn elements(&self) -> Box<dyn Iterator<Item = &dyn Inspect> + '_>;
}

/// A sequence's length together with its elements in order.
///
/// Built from any [`Sequence`], sized or not, so slices take the same path
/// as owned collections.
pub struct Elements<'a> {
    len: usize,
    iter: Box<dyn Iterator<Item = &'a dyn Inspect> + 'a>,
}

impl<'a> Elements<'a> {
    /// Captures the length and element iterator of `sequence`.
    pub fn new<S: Sequence + ?Sized>(sequence: &'a S) -> Self {
        Self {
            len: sequence.len(),
            iter: sequence.elements(),
        }
    }

    /// Length of the whole sequence, independent of iteration progress.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a dyn Inspect;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl std::fmt::Debug for Elements<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Elements").field("len", &self.len).finish()
    }
}

macro_rules! impl_sequence {
    ($($ty:ty => [$($generics:tt)*]),* $(,)?) => {
        $(
            impl<$($generics)*> Sequence for $ty {
                fn len(&self) -> usize {
                    <$ty>::len(self)
                }

                fn elements(&self) -> Box<dyn Iterator<Item = &dyn Inspect> + '_> {
                    Box::new(self.iter().map(|element| element as &dyn Inspect))
                }
            }

            impl<$($generics)*> Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Sequence(Elements::new(self))
                }
            }
        )*
    };
}

impl_sequence! {
    [T] => [T: Inspect],
    Vec<T> => [T: Inspect],
    VecDeque<T> => [T: Inspect],
    BTreeSet<T> => [T: Inspect],
    HashSet<T, S> => [T: Inspect, S],
}

impl<T: Inspect, const N: usize> Sequence for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &dyn Inspect> + '_> {
        Box::new(self.iter().map(|element| element as &dyn Inspect))
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Elements::new(self))
    }
}

// ============================================================================
// SCALARS
// ============================================================================

macro_rules! impl_scalar {
    ($variant:ident as $wide:ty: $($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar(Scalar::$variant(*self as $wide))
                }
            }
        )*
    };
}

impl_scalar!(Signed as i128: i8, i16, i32, i64, isize);
impl_scalar!(Unsigned as u128: u8, u16, u32, u64, usize);
impl_scalar!(Float as f64: f32);

impl Inspect for i128 {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Signed(*self))
    }
}

impl Inspect for u128 {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Unsigned(*self))
    }
}

impl Inspect for f64 {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Float(*self))
    }
}

impl Inspect for char {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Unsigned(u128::from(u32::from(*self))))
    }
}

impl Inspect for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Bool(*self))
    }
}

impl Inspect for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Str(self))
    }
}

impl Inspect for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Str(self.as_str()))
    }
}

impl Inspect for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Str(self.as_ref()))
    }
}

impl Inspect for Uuid {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Identifier(*self))
    }
}

/// Only presence is checked; a `Some` is never descended into.
impl<T> Inspect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Nullable {
            present: self.is_some(),
        })
    }
}

// ============================================================================
// POINTERS
// ============================================================================

// Rust pointers are never null, so they are transparent to the check.
macro_rules! impl_forward {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: Inspect + ?Sized> Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    (**self).shape()
                }

                fn as_emptiable(&self) -> Option<&dyn Emptiable> {
                    (**self).as_emptiable()
                }

                fn as_zeroable(&self) -> Option<&dyn Zeroable> {
                    (**self).as_zeroable()
                }

                fn type_name(&self) -> &'static str {
                    (**self).type_name()
                }
            }
        )*
    };
}

impl_forward!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

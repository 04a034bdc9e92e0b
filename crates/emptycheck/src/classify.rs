//! The emptiness classifier for terminal values.

use crate::inspect::{Inspect, Scalar, Shape};

/// Whether a terminal value counts as empty.
///
/// Rules, first match wins:
///
/// 1. absent optional → empty
/// 2. zero-length string → empty
/// 3. zero integer → empty
/// 4. zero float → empty
/// 5. nil UUID → empty
/// 6. self-reporting capability → its answer
/// 7. zero-checkable capability → its answer
///
/// Booleans are never empty: `false` is data, not a missing value.
///
/// # Panics
///
/// Panics when none of the rules applies (an opaque value without a
/// capability, or a record or sequence without a capability). That is a
/// type-coverage bug in the caller, not a validation result.
///
/// # Examples
///
/// ```rust
/// use emptycheck::is_empty;
///
/// assert!(is_empty(&""));
/// assert!(is_empty(&0u16));
/// assert!(is_empty(&None::<i32>));
/// assert!(is_empty(&uuid::Uuid::nil()));
/// assert!(!is_empty(&false));
/// assert!(!is_empty(&Some(0)));
/// ```
pub fn is_empty(value: &dyn Inspect) -> bool {
    if let Shape::Scalar(scalar) = value.shape() {
        return scalar_is_empty(scalar);
    }
    if let Some(emptiable) = value.as_emptiable() {
        return emptiable.is_empty();
    }
    if let Some(zeroable) = value.as_zeroable() {
        return zeroable.is_zero();
    }
    panic!("unexpected type: {}", value.type_name())
}

fn scalar_is_empty(scalar: Scalar<'_>) -> bool {
    match scalar {
        Scalar::Nullable { present } => !present,
        Scalar::Str(text) => text.is_empty(),
        Scalar::Signed(number) => number == 0,
        Scalar::Unsigned(number) => number == 0,
        Scalar::Float(number) => number == 0.0,
        Scalar::Identifier(id) => id.is_nil(),
        Scalar::Bool(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use uuid::Uuid;

    use super::*;
    use crate::capability::{Emptiable, Zeroable};

    struct Both {
        empty: bool,
        zero: bool,
    }

    impl Emptiable for Both {
        fn is_empty(&self) -> bool {
            self.empty
        }
    }

    impl Zeroable for Both {
        fn is_zero(&self) -> bool {
            self.zero
        }
    }

    impl Inspect for Both {
        fn shape(&self) -> Shape<'_> {
            Shape::Opaque
        }

        fn as_emptiable(&self) -> Option<&dyn Emptiable> {
            Some(self)
        }

        fn as_zeroable(&self) -> Option<&dyn Zeroable> {
            Some(self)
        }
    }

    struct Unknown;

    impl Inspect for Unknown {
        fn shape(&self) -> Shape<'_> {
            Shape::Opaque
        }
    }

    #[test]
    fn populated_values_are_not_empty() {
        assert!(!is_empty(&"test"));
        assert!(!is_empty(&3));
        assert!(!is_empty(&Some(3)));
        assert!(!is_empty(&Some("test")));
        assert!(!is_empty(&-0.5f64));
        assert!(!is_empty(&Uuid::new_v4()));
        assert!(!is_empty(&Duration::from_secs(1)));
        assert!(!is_empty(&SystemTime::now()));
    }

    #[test]
    fn zero_values_are_empty() {
        assert!(is_empty(&String::new()));
        assert!(is_empty(&0i64));
        assert!(is_empty(&0u8));
        assert!(is_empty(&0.0f32));
        assert!(is_empty(&'\0'));
        assert!(is_empty(&Uuid::nil()));
        assert!(is_empty(&Duration::ZERO));
        assert!(is_empty(&SystemTime::UNIX_EPOCH));
    }

    #[test]
    fn option_checks_presence_not_content() {
        assert!(is_empty(&None::<SystemTime>));
        assert!(!is_empty(&Some(SystemTime::UNIX_EPOCH)));
        assert!(!is_empty(&Some(String::new())));
    }

    #[test]
    fn booleans_are_never_empty() {
        assert!(!is_empty(&true));
        assert!(!is_empty(&false));
    }

    #[test]
    fn self_reporting_wins_over_zero_checkable() {
        assert!(is_empty(&Both { empty: true, zero: false }));
        assert!(!is_empty(&Both { empty: false, zero: true }));
    }

    #[test]
    #[should_panic(expected = "unexpected type")]
    fn opaque_without_capability_panics() {
        is_empty(&Unknown);
    }

    #[test]
    #[should_panic(expected = "unexpected type")]
    fn sequence_without_capability_panics() {
        is_empty(&vec![1, 2]);
    }
}

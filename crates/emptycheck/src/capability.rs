//! Extension capabilities that override the default emptiness rules.
//!
//! A type opts in by implementing [`Emptiable`] or [`Zeroable`] and answering
//! the matching query on [`Inspect`](crate::Inspect)
//! ([`as_emptiable`](crate::Inspect::as_emptiable) /
//! [`as_zeroable`](crate::Inspect::as_zeroable)). The derive does the second
//! half with `#[emptycheck(emptiable)]` or `#[emptycheck(zeroable)]`.
//!
//! A value that reports a capability is a leaf: the traversal classifies it
//! through the capability and never looks at its fields or elements.
//!
//! When a value reports both, [`Emptiable`] is consulted and [`Zeroable`] is
//! ignored.

use std::time::{Duration, SystemTime};

use crate::inspect::{Inspect, Shape};

// ============================================================================
// CAPABILITY TRAITS
// ============================================================================

/// Values that have a natural zero instant or amount.
///
/// Implemented here for [`Duration`], [`SystemTime`] (zero is
/// [`UNIX_EPOCH`](std::time::UNIX_EPOCH)) and, with the `temporal` feature,
/// for `chrono` date and time types.
pub trait Zeroable {
    /// Whether the value equals its zero instant.
    fn is_zero(&self) -> bool;
}

/// Values that decide their own emptiness.
///
/// # Examples
///
/// ```rust
/// use emptycheck::{Emptiable, Inspect, Shape};
///
/// struct Tags(String);
///
/// impl Emptiable for Tags {
///     fn is_empty(&self) -> bool {
///         self.0.split(',').all(|tag| tag.trim().is_empty())
///     }
/// }
///
/// impl Inspect for Tags {
///     fn shape(&self) -> Shape<'_> {
///         Shape::Opaque
///     }
///
///     fn as_emptiable(&self) -> Option<&dyn Emptiable> {
///         Some(self)
///     }
/// }
///
/// assert!(emptycheck::is_empty(&Tags(" , ".to_owned())));
/// assert!(!emptycheck::is_empty(&Tags("rust".to_owned())));
/// ```
pub trait Emptiable {
    /// Whether the value is empty.
    fn is_empty(&self) -> bool;
}

// ============================================================================
// STD IMPLEMENTATIONS
// ============================================================================

impl Zeroable for Duration {
    fn is_zero(&self) -> bool {
        Duration::is_zero(self)
    }
}

impl Inspect for Duration {
    fn shape(&self) -> Shape<'_> {
        Shape::Opaque
    }

    fn as_zeroable(&self) -> Option<&dyn Zeroable> {
        Some(self)
    }
}

impl Zeroable for SystemTime {
    fn is_zero(&self) -> bool {
        *self == SystemTime::UNIX_EPOCH
    }
}

impl Inspect for SystemTime {
    fn shape(&self) -> Shape<'_> {
        Shape::Opaque
    }

    fn as_zeroable(&self) -> Option<&dyn Zeroable> {
        Some(self)
    }
}

// ============================================================================
// CHRONO IMPLEMENTATIONS
// ============================================================================

/// `chrono` types. The zero instant is chrono's `Default`: the Unix epoch.
#[cfg(feature = "temporal")]
mod temporal {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

    use super::Zeroable;
    use crate::inspect::{Inspect, Shape};

    impl<Tz: TimeZone> Zeroable for DateTime<Tz> {
        fn is_zero(&self) -> bool {
            self.timestamp() == 0 && self.timestamp_subsec_nanos() == 0
        }
    }

    impl<Tz: TimeZone> Inspect for DateTime<Tz> {
        fn shape(&self) -> Shape<'_> {
            Shape::Opaque
        }

        fn as_zeroable(&self) -> Option<&dyn Zeroable> {
            Some(self)
        }
    }

    impl Zeroable for NaiveDateTime {
        fn is_zero(&self) -> bool {
            *self == NaiveDateTime::default()
        }
    }

    impl Inspect for NaiveDateTime {
        fn shape(&self) -> Shape<'_> {
            Shape::Opaque
        }

        fn as_zeroable(&self) -> Option<&dyn Zeroable> {
            Some(self)
        }
    }

    impl Zeroable for NaiveDate {
        fn is_zero(&self) -> bool {
            *self == NaiveDate::default()
        }
    }

    impl Inspect for NaiveDate {
        fn shape(&self) -> Shape<'_> {
            Shape::Opaque
        }

        fn as_zeroable(&self) -> Option<&dyn Zeroable> {
            Some(self)
        }
    }

}

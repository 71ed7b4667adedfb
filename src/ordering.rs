//! The ordering contract shared by every sort in this crate.
//!
//! All algorithms are written against `is_less(a, b)`, which must be a strict weak ordering:
//! irreflexive, transitive, and with "neither is less than the other" being an equivalence. If
//! it isn't, the resulting order is unspecified but the slice still holds exactly the elements it
//! held before.

use std::cmp::Ordering;

/// Adapts a three-way comparison into the `is_less` form the algorithms use.
#[inline]
pub fn lt_by<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a, b| compare(a, b) == Ordering::Less
}

/// Returns `true` if no element of `v` is less than its predecessor.
pub fn is_sorted_by<T, F>(v: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    v.windows(2).all(|w| !is_less(&w[1], &w[0]))
}

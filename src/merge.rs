//! Stable merge of two adjacent non-decreasing runs, shared by all merge sort variants.

use std::cmp::Ordering;
use std::mem::{self, MaybeUninit};
use std::ptr;

use crate::ordering;

/// Same as [`merge`], but with a three-way comparison.
pub fn merge_by<T, F>(
    v: &mut [T],
    aux: &mut [MaybeUninit<T>],
    lo: usize,
    mid: usize,
    hi: usize,
    compare: F,
) where
    F: FnMut(&T, &T) -> Ordering,
{
    merge(v, aux, lo, mid, hi, &mut ordering::lt_by(compare));
}

/// Merges the non-decreasing runs `v[lo..=mid]` and `v[mid + 1..=hi]` into a non-decreasing
/// `v[lo..=hi]`, using `aux[lo..=hi]` as scratch space.
///
/// When the two candidates compare equal the element of the left run is taken first, so the merge
/// is stable.
///
/// `aux` is usually the spare capacity of a `Vec<T>` allocated once per sort call. Its contents
/// are never read before being written and are left logically uninitialized afterwards.
///
/// # Panics
///
/// Panics if `lo <= mid <= hi` does not hold, or if `hi` is out of bounds for `v` or `aux`.
///
/// If `is_less` panics, `v[lo..=hi]` still holds every element it held before, in unspecified
/// order.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn merge<T, F>(
    v: &mut [T],
    aux: &mut [MaybeUninit<T>],
    lo: usize,
    mid: usize,
    hi: usize,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    assert!(
        lo <= mid && mid <= hi,
        "merge bounds must satisfy lo <= mid <= hi, got lo: {lo} mid: {mid} hi: {hi}"
    );
    assert!(
        hi < v.len() && hi < aux.len(),
        "merge range ends at {hi}, but v has len {} and aux has len {}",
        v.len(),
        aux.len()
    );

    if mid == hi || mem::size_of::<T>() == 0 {
        // Empty right run, or nothing observable to move.
        return;
    }

    let len = hi + 1 - lo;
    let left_len = mid + 1 - lo;

    // SAFETY: `lo..=hi` is in bounds for both `v` and `aux`, checked above, and the two slices are
    // distinct borrows so they can't overlap. `MaybeUninit<T>` has the same layout as `T`. After
    // the copy every element of `v[lo..=hi]` exists twice bitwise, the copy in `aux` is treated as
    // the owner from here on. Each `aux` element is copied back into `v` exactly once, either by
    // the loop or by `MergeHole::drop`, which also runs if `is_less` panics.
    unsafe {
        let dest = v.as_mut_ptr().add(lo);
        let buf = aux.as_mut_ptr().add(lo) as *mut T;
        ptr::copy_nonoverlapping(dest, buf, len);

        let mut hole = MergeHole {
            left: buf,
            left_end: buf.add(left_len),
            right: buf.add(left_len),
            right_end: buf.add(len),
            dest,
        };

        while hole.left < hole.left_end && hole.right < hole.right_end {
            // If equal, prefer the left run to maintain stability.
            if is_less(&*hole.right, &*hole.left) {
                ptr::copy_nonoverlapping(hole.right, hole.dest, 1);
                hole.right = hole.right.add(1);
            } else {
                ptr::copy_nonoverlapping(hole.left, hole.dest, 1);
                hole.left = hole.left.add(1);
            }
            hole.dest = hole.dest.add(1);
        }

        // `hole` gets dropped here and moves whatever is left of either run into place.
    }
}

/// Tracks the unconsumed parts of both runs in `aux` and the next slot to fill in `v`. When
/// dropped, copies the rest of the left run and then the rest of the right run to `dest..`.
///
/// The number of unconsumed elements always equals the number of unfilled slots in `v`.
struct MergeHole<T> {
    left: *mut T,
    left_end: *mut T,
    right: *mut T,
    right_end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `T` is not a zero-sized type, and all pointers point into the same `aux` range
        // or the matching `v` range, with `left <= left_end` and `right <= right_end`.
        unsafe {
            let left_len = self.left_end.offset_from(self.left) as usize;
            ptr::copy_nonoverlapping(self.left, self.dest, left_len);

            let right_len = self.right_end.offset_from(self.right) as usize;
            ptr::copy_nonoverlapping(self.right, self.dest.add(left_len), right_len);
        }
    }
}

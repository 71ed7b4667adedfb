//! Recursive top-down merge sort.

use std::cmp::Ordering;
use std::mem::{self, MaybeUninit};

use crate::merge::merge;
use crate::ordering;

sort_impl!("top_down_merge_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut ordering::lt_by(compare));
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if mem::size_of::<T>() == 0 || len < 2 {
        return;
    }

    // One buffer for the whole call, every level of the recursion merges through it.
    let mut buf = Vec::<T>::with_capacity(len);
    sort_range(v, buf.spare_capacity_mut(), 0, len - 1, is_less);
}

fn sort_range<T, F>(v: &mut [T], aux: &mut [MaybeUninit<T>], lo: usize, hi: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if lo >= hi {
        return;
    }

    let mid = lo + (hi - lo) / 2;
    sort_range(v, aux, lo, mid, is_less);
    sort_range(v, aux, mid + 1, hi, is_less);

    // Both halves together already form one run, nothing to merge.
    if !is_less(&v[mid + 1], &v[mid]) {
        return;
    }

    merge(v, aux, lo, mid, hi, is_less);
}

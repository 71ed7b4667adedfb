//! Top-down merge sort that alternates the roles of the input and the buffer on every level.
//!
//! The buffer starts out as a clone of the input. Sorting a range into one of the two slices
//! first sorts both halves into the other one, then merges them across. That way no merge ever has
//! to copy its range into scratch space first. In exchange elements are cloned rather than moved,
//! and there is no skip-merge shortcut for already ordered halves.
//!
//! Because of the `Clone` bound this sort has no `SortImpl`.

use std::cmp::Ordering;

use crate::ordering;

/// Sorts `v`, preserving the order of equal elements.
///
/// If the comparison panics, `v` is left holding clones of its elements in unspecified order,
/// possibly with some elements duplicated and others missing.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    ping_pong_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    ping_pong_sort(v, &mut ordering::lt_by(compare));
}

fn ping_pong_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut aux = v.to_vec();
    sort_into(&mut aux, v, 0, len - 1, is_less);
}

/// Sorts the elements of `src[lo..=hi]` into `dst[lo..=hi]`. Both must hold the same elements in
/// that range on entry, `src` is used as scratch space.
fn sort_into<T, F>(src: &mut [T], dst: &mut [T], lo: usize, hi: usize, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if lo >= hi {
        // `dst[lo]` already equals `src[lo]`.
        return;
    }

    let mid = lo + (hi - lo) / 2;
    sort_into(dst, src, lo, mid, is_less);
    sort_into(dst, src, mid + 1, hi, is_less);

    merge_into(src, dst, lo, mid, hi, is_less);
}

/// Merges the sorted runs `src[lo..=mid]` and `src[mid + 1..=hi]` into `dst[lo..=hi]`, taking
/// from the left run on ties.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn merge_into<T, F>(src: &[T], dst: &mut [T], lo: usize, mid: usize, hi: usize, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut left = lo;
    let mut right = mid + 1;

    for out in &mut dst[lo..=hi] {
        let take_right = if left > mid {
            true
        } else if right > hi {
            false
        } else {
            is_less(&src[right], &src[left])
        };

        if take_right {
            out.clone_from(&src[right]);
            right += 1;
        } else {
            out.clone_from(&src[left]);
            left += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_into_takes_left_on_ties() {
        let src = [(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd')];
        let mut dst = src;
        merge_into(&src, &mut dst, 0, 1, 3, &mut |a, b| a.0 < b.0);
        assert_eq!(dst, [(1, 'a'), (1, 'c'), (2, 'b'), (2, 'd')]);
    }

    #[test]
    fn example() {
        let mut v = [5, 3, 8, 1, 9, 2];
        sort(&mut v);
        assert_eq!(v, [1, 2, 3, 5, 8, 9]);
    }
}

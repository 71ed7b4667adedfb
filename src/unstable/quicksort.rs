//! Randomized recursive quicksort with a Hoare-style partition.
//!
//! The whole slice is shuffled once up front instead of picking a random pivot per partition.
//! After that the first element of each range is its pivot. `sort` and `sort_by` shuffle with the
//! thread-local generator, the `_with_rng` variants take the generator from the caller.

use std::cmp::Ordering;
use std::mem;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ordering;

sort_impl!("quicksort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_with_rng(v, &mut rand::thread_rng());
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_with_rng(v, compare, &mut rand::thread_rng());
}

/// Sorts `v`, shuffling it with `rng` first. The same seed and input give the same result,
/// including the relative order of equal elements.
#[inline]
pub fn sort_with_rng<T, R>(v: &mut [T], rng: &mut R)
where
    T: Ord,
    R: Rng + ?Sized,
{
    quicksort_shuffled(v, &mut |a: &T, b: &T| a.lt(b), rng);
}

#[inline]
pub fn sort_by_with_rng<T, F, R>(v: &mut [T], compare: F, rng: &mut R)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    quicksort_shuffled(v, &mut ordering::lt_by(compare), rng);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn quicksort_shuffled<T, F, R>(v: &mut [T], is_less: &mut F, rng: &mut R)
where
    F: FnMut(&T, &T) -> bool,
    R: Rng + ?Sized,
{
    if mem::size_of::<T>() == 0 || v.len() < 2 {
        // Sorting has no meaningful behavior on zero-sized types, and short inputs are sorted.
        return;
    }

    // Shuffling defeats presorted and adversarial inputs, which would otherwise make the fixed
    // first-element pivot degenerate.
    v.shuffle(rng);

    quicksort(v, is_less);
}

/// Recurses into the shorter side of each partition and loops on the longer one, so the stack
/// depth stays below `log2(len)` even when every pivot is the minimum.
fn quicksort<'a, T, F>(mut v: &'a mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > 1 {
        let pivot_pos = partition(v, is_less);
        let (left, right) = v.split_at_mut(pivot_pos);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around its first element and returns the final position of that element.
/// Everything before the returned index is not greater than the pivot, everything after it is not
/// less than the pivot.
///
/// Both scans stop on elements equal to the pivot, so runs of equal elements are split evenly
/// instead of all landing on one side.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return 0;
    }

    let last = len - 1;
    let mut l = 1;
    let mut r = last;

    loop {
        while l <= last && is_less(&v[l], &v[0]) {
            l += 1;
        }

        while r >= l && is_less(&v[0], &v[r]) {
            r -= 1;
        }

        if r > l {
            v.swap(l, r);
            l += 1;
            r -= 1;
        } else {
            // The cursors crossed, `l - 1` is the last element not greater than the pivot.
            v.swap(0, l - 1);
            return l - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    // Input that the shuffle driven by `seed` turns into `0..len`, so every pivot is the minimum.
    fn ascending_after_shuffle(len: usize, seed: u64) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..len).collect();
        perm.shuffle(&mut StdRng::seed_from_u64(seed));

        let mut v = vec![0; len];
        for (k, &p) in perm.iter().enumerate() {
            v[p] = k;
        }
        v
    }

    fn check_partitioned(v: &[i32], pivot_pos: usize) {
        let pivot = v[pivot_pos];
        assert!(v[..pivot_pos].iter().all(|x| *x <= pivot));
        assert!(v[pivot_pos + 1..].iter().all(|x| *x >= pivot));
    }

    #[test]
    fn partition_places_pivot() {
        let mut v = [5, 3, 8, 1, 9, 2];
        let pivot_pos = partition(&mut v, &mut |a, b| a < b);

        assert_eq!(pivot_pos, 3);
        assert_eq!(v[pivot_pos], 5);
        check_partitioned(&v, pivot_pos);
    }

    #[test]
    fn partition_pivot_is_max() {
        let mut v = [9, 3, 8, 1];
        let pivot_pos = partition(&mut v, &mut |a, b| a < b);

        assert_eq!(pivot_pos, 3);
        check_partitioned(&v, pivot_pos);
    }

    #[test]
    fn partition_pivot_is_min() {
        let mut v = [0, 3, 8, 1];
        let pivot_pos = partition(&mut v, &mut |a, b| a < b);

        assert_eq!(pivot_pos, 0);
        assert_eq!(v, [0, 3, 8, 1]);
    }

    #[test]
    fn partition_splits_equal_elements_evenly() {
        let mut v = [7; 101];
        let pivot_pos = partition(&mut v, &mut |a, b| a < b);

        assert_eq!(pivot_pos, 50);
    }

    #[test]
    fn partition_single_element() {
        let mut v = [42];
        assert_eq!(partition(&mut v, &mut |a, b| a < b), 0);
    }

    #[test]
    fn same_seed_same_result() {
        let input: Vec<(i32, usize)> = sort_test_tools::patterns::random_uniform(500, 0..10)
            .into_iter()
            .enumerate()
            .map(|(i, key)| (key, i))
            .collect();

        let mut a = input.clone();
        let mut b = input;
        sort_by_with_rng(&mut a, |x, y| x.0.cmp(&y.0), &mut StdRng::seed_from_u64(23));
        sort_by_with_rng(&mut b, |x, y| x.0.cmp(&y.0), &mut StdRng::seed_from_u64(23));

        assert_eq!(a, b);
        assert!(ordering::is_sorted_by(&a, |x, y| x.0 < y.0));
    }

    #[test]
    fn caller_supplied_thread_rng() {
        let mut v = sort_test_tools::patterns::random(1_000);
        let mut expected = v.clone();
        expected.sort();

        sort_with_rng(&mut v, &mut rand::thread_rng());
        assert_eq!(v, expected);
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn known_seed_worst_case_keeps_stack_flat() {
        // Every partition peels off one element. Recursing into both sides would need one frame
        // per element, far more than this stack holds.
        let sorted = thread::Builder::new()
            .stack_size(128 * 1024)
            .spawn(|| {
                let mut v = ascending_after_shuffle(4_000, 11);
                sort_with_rng(&mut v, &mut StdRng::seed_from_u64(11));
                v
            })
            .unwrap()
            .join()
            .unwrap();

        assert_eq!(sorted, (0..4_000).collect::<Vec<_>>());
    }

    #[test]
    fn example() {
        let mut v = [5, 3, 8, 1, 9, 2];
        sort(&mut v);
        assert_eq!(v, [1, 2, 3, 5, 8, 9]);
    }
}

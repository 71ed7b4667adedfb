//! Natural merge sort, merges the non-decreasing runs already present in the input.
//!
//! Each pass walks the slice from the front, finds two adjacent runs, merges them and continues
//! after the merged region. A pass ends when the scan hits the end of the slice, the next pass
//! starts from the front again. The sort is done once the run starting at the front spans the
//! whole slice.

use std::cmp::Ordering;
use std::mem;

use log::{debug, trace};

use crate::merge::merge;
use crate::ordering;

// Run detection re-scans merged regions, with an invalid order that may go on forever.
sort_impl!(
    "natural_merge_stable",
    max_test_len = usize::MAX,
    requires_total_order
);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    natural_merge_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    natural_merge_sort(v, &mut ordering::lt_by(compare));
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct NaturalMergeStats {
    /// Scans started from the front of the slice, including the final one that finds a single run.
    passes: usize,
    merges: usize,
}

fn natural_merge_sort<T, F>(v: &mut [T], is_less: &mut F) -> NaturalMergeStats
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut stats = NaturalMergeStats::default();

    if mem::size_of::<T>() == 0 || len < 2 {
        return stats;
    }

    let mut buf = Vec::<T>::with_capacity(len);
    let aux = buf.spare_capacity_mut();

    let last = len - 1;
    let mut start = 0;
    stats.passes = 1;

    loop {
        let run_end = find_run_end(v, start, is_less);

        if run_end == last {
            if start == 0 {
                break;
            }

            // The unpaired tail run waits for the next pass.
            start = 0;
            stats.passes += 1;
            trace!("natural merge pass {} starts, {} merges so far", stats.passes, stats.merges);
            continue;
        }

        let next_run_end = find_run_end(v, run_end + 1, is_less);
        merge(v, aux, start, run_end, next_run_end, is_less);
        stats.merges += 1;

        if next_run_end == last {
            start = 0;
            stats.passes += 1;
            trace!("natural merge pass {} starts, {} merges so far", stats.passes, stats.merges);
        } else {
            start = next_run_end + 1;
        }
    }

    debug!(
        "natural merge sort of {len} elements: {} passes, {} merges",
        stats.passes, stats.merges
    );

    stats
}

/// Returns the index of the last element of the non-decreasing run starting at `start`.
#[inline]
fn find_run_end<T, F>(v: &[T], start: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut end = start;
    while end + 1 < v.len() && !is_less(&v[end + 1], &v[end]) {
        end += 1;
    }

    end
}

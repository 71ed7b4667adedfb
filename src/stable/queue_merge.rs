//! Bottom-up merge sort driven by a queue of queues.
//!
//! Every element starts out as its own single-element run-queue. Two run-queues are taken from the
//! front, merged, and the result is put at the back, until only one run-queue is left. No
//! recursion, so the stack depth doesn't depend on the input.
//!
//! The run-queues hold slots into the input rather than the elements themselves, the slice is
//! rearranged once at the end.

use std::cmp::Ordering;
use std::collections::VecDeque;

use log::debug;

use crate::ordering;
use crate::permutation;

sort_impl!("queue_merge_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    queue_merge_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    queue_merge_sort(v, &mut ordering::lt_by(compare));
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

type RunQueue = VecDeque<usize>;

fn queue_merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut runs: VecDeque<RunQueue> = (0..len).map(|slot| RunQueue::from([slot])).collect();
    let mut rounds = 0usize;

    while runs.len() > 1 {
        rounds += 1;
        let odd = runs.len() % 2 == 1;

        // Neighbouring pairs are merged front to back and their results queued in the same
        // order, so the queue keeps following input order. That is what makes ties stable.
        for _ in 0..runs.len() / 2 {
            if let (Some(first), Some(second)) = (runs.pop_front(), runs.pop_front()) {
                runs.push_back(merge_run_queues(first, second, &mut |a, b| {
                    is_less(&v[a], &v[b])
                }));
            }
        }

        // The unpaired last run-queue is now at the front, move it behind this round's results.
        if odd {
            runs.rotate_left(1);
        }
    }

    debug!("queue merge sort of {len} elements: {rounds} rounds");

    let sorted = runs.pop_front().unwrap_or_default();
    debug_assert_eq!(sorted.len(), len);

    permutation::apply(v, sorted.into());
}

/// Merges two non-decreasing run-queues. On equal keys the element of `first` is taken, so merging
/// queues in input order keeps the sort stable.
fn merge_run_queues<F>(mut first: RunQueue, mut second: RunQueue, is_less: &mut F) -> RunQueue
where
    F: FnMut(usize, usize) -> bool,
{
    let mut merged = RunQueue::with_capacity(first.len() + second.len());

    while let (Some(&a), Some(&b)) = (first.front(), second.front()) {
        if is_less(b, a) {
            second.pop_front();
            merged.push_back(b);
        } else {
            first.pop_front();
            merged.push_back(a);
        }
    }

    // At most one of them still holds elements.
    merged.extend(first);
    merged.extend(second);

    merged
}

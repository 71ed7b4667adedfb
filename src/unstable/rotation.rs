//! Exchange sort over a rotating double-ended queue.
//!
//! Produces the same result as a bubble sort that always runs full-length passes, but only ever
//! touches the queue at its head and tail: peek the first two elements, swap them, or rotate the
//! head to the back. Without indices, the end of a pass ("lap") is detected with a marker placed
//! on the element that was at the head when the lap started. Once that element is back at the
//! head, every adjacent pair has been visited once.
//!
//! The queue holds references to the elements plus the slot they came from. The slice itself is
//! not touched until the final write-back, which makes the sort trivially panic safe.

use std::cmp::Ordering;
use std::collections::VecDeque;

use log::{debug, trace};

use crate::ordering;
use crate::permutation;

// Quadratic, and its termination relies on a valid order.
sort_impl!(
    "rotation_sort_unstable",
    max_test_len = 500,
    requires_total_order
);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    rotation_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    rotation_sort(v, &mut ordering::lt_by(compare));
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

/// Element of the rotating queue.
struct Markable<'a, T> {
    value: &'a T,
    slot: usize,
    /// Set on exactly one element while a lap is running, the one that was at the head when the
    /// lap started.
    marked: bool,
}

/// Returns the number of laps it took until a lap made no exchange.
fn rotation_sort<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return 0;
    }

    let mut queue: VecDeque<Markable<'_, T>> = v
        .iter()
        .enumerate()
        .map(|(slot, value)| Markable {
            value,
            slot,
            marked: false,
        })
        .collect();

    let mut laps = 0;
    let mut has_swapped = true;

    while has_swapped {
        has_swapped = false;
        laps += 1;

        // The first pair of a lap is compared before the head gets marked.
        has_swapped |= exchange_front_if_less(&mut queue, is_less);
        queue[0].marked = true;
        rotate(&mut queue);

        while !queue[0].marked {
            // A marked second element means the head is the last element of the lap, comparing it
            // with the marked one would wrap around.
            if !queue[1].marked {
                has_swapped |= exchange_front_if_less(&mut queue, is_less);
            }
            rotate(&mut queue);
        }

        queue[0].marked = false;
        trace!("rotation lap {laps} done, swapped: {has_swapped}");
    }

    debug!("rotation sort of {} elements took {laps} laps", queue.len());

    // Unwind head to tail.
    let order = queue.into_iter().map(|m| m.slot).collect();
    permutation::apply(v, order);

    laps
}

/// Exchanges the first two elements if the second is less than the first. Returns whether it did.
#[inline]
fn exchange_front_if_less<T, F>(queue: &mut VecDeque<Markable<'_, T>>, is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(queue[1].value, queue[0].value) {
        queue.swap(0, 1);
        true
    } else {
        false
    }
}

#[inline]
fn rotate<T>(queue: &mut VecDeque<T>) {
    if let Some(head) = queue.pop_front() {
        queue.push_back(head);
    }
}

//! A small suite of comparison sorts over slices: a randomized Hoare-partition quicksort, a
//! rotation based exchange sort driven through a double-ended queue, and several merge sort
//! variants built on a shared, stable merge primitive.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
    ($name:expr, max_test_len = $max_len:expr, requires_total_order) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn max_test_len() -> usize {
                $max_len
            }

            fn requires_total_order() -> bool {
                true
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod merge;
pub mod ordering;
pub mod stable;
pub mod unstable;

mod permutation;

pub use sort_test_tools::Sort;

pub trait Sort {
    fn name() -> String;

    /// Largest input the shared tests feed this sort. Quadratic sorts lower it to keep the suite
    /// fast in debug builds.
    fn max_test_len() -> usize {
        usize::MAX
    }

    /// Sorts that may not terminate when `compare` is not a total order opt out of the
    /// invalid-order tests.
    fn requires_total_order() -> bool {
        false
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;

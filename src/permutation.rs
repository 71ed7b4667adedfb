/// Rearranges `v` so that `v[k]` afterwards holds the element that was at `order[k]`.
///
/// `order` must be a permutation of `0..v.len()`. Only swaps are used, so `v` holds a permutation
/// of its original elements at every point.
pub(crate) fn apply<T>(v: &mut [T], mut order: Vec<usize>) {
    assert_eq!(v.len(), order.len());

    for start in 0..v.len() {
        // Follow the cycle through `start`. Every visited slot is marked done by pointing it at
        // itself, so later starts skip it.
        let mut current = start;
        while order[current] != start {
            let next = order[current];
            v.swap(current, next);
            order[current] = current;
            current = next;
        }
        order[current] = current;
    }
}

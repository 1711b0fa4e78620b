//! Multi-card combination search.

use alloc::vec::Vec;

/// Returns every sub-selection of two or more items, in depth-first order.
///
/// Items keep their input order inside each combination, and every subset is
/// produced exactly once. Combinations sharing a prefix are adjacent: for
/// `[a, b, c]` the result is `[a, b]`, `[a, b, c]`, `[a, c]`, `[b, c]`.
///
/// ```
/// use tower_solitaire::combo::combinations;
///
/// let combos = combinations(&['a', 'b', 'c']);
/// assert_eq!(
///     combos,
///     vec![vec!['a', 'b'], vec!['a', 'b', 'c'], vec!['a', 'c'], vec!['b', 'c']]
/// );
/// ```
#[must_use]
pub fn combinations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut results = Vec::new();
    let mut current = Vec::with_capacity(items.len());
    backtrack(items, 0, &mut current, &mut results);
    results
}

fn backtrack<T: Clone>(items: &[T], start: usize, current: &mut Vec<T>, results: &mut Vec<Vec<T>>) {
    if current.len() >= 2 {
        results.push(current.clone());
    }

    for (offset, item) in items[start..].iter().enumerate() {
        current.push(item.clone());
        backtrack(items, start + offset + 1, current, results);
        current.pop();
    }
}

//! Positional information for container children.

/// A child paired with its position among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildPosition<'a, T> {
    /// Zero-based index
    pub index: usize,
    /// Whether this is the final child
    pub is_last: bool,
    /// The child itself
    pub item: &'a T,
}

/// Pair every item with its index and an is-last flag.
///
/// ```
/// use flexlayout_core::positioned;
///
/// let flags: Vec<bool> = positioned(&["a", "b", "c"]).iter().map(|p| p.is_last).collect();
/// assert_eq!(flags, [false, false, true]);
/// ```
#[must_use]
pub fn positioned<T>(items: &[T]) -> Vec<ChildPosition<'_, T>> {
    let count = items.len();
    items
        .iter()
        .enumerate()
        .map(|(index, item)| ChildPosition {
            index,
            is_last: index + 1 == count,
            item,
        })
        .collect()
}

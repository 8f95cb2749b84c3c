//! Trailing-window selection over an ordered match list.

/// The last `min(amount, items.len())` elements, in their original order.
///
/// A zero or negative `amount` selects nothing.
pub fn trailing_window<T>(items: &[T], amount: i64) -> &[T] {
    let take = usize::try_from(amount)
        .unwrap_or(if amount > 0 { usize::MAX } else { 0 })
        .min(items.len());
    &items[items.len() - take..]
}

//! Reorder Protocol
//!
//! Turns a drag gesture over the displayed list into a new dense order.
//! Gesture indices are relative to the *visible* (possibly filtered) list
//! and are mapped back into the full collection before splicing, so items
//! hidden by the filter keep their relative order.

use crate::domain::{DomainError, DomainResult, Entity};

/// Indices of one drag gesture. `destination` is None when the drop was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragMove {
    pub source: usize,
    pub destination: Option<usize>,
}

impl DragMove {
    pub fn new(source: usize, destination: usize) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    pub fn cancelled(source: usize) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

/// Assign `order = position + 1` to every item
pub fn renumber<T: Entity>(items: &mut [T]) {
    for (i, item) in items.iter_mut().enumerate() {
        item.set_order(i as u32 + 1);
    }
}

/// Whether orders are exactly 1..=N in sequence
pub fn is_dense<T: Entity>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, item)| item.order() as usize == i + 1)
}

/// Stable single-element move: remove at `from`, insert at `to`
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> DomainResult<()> {
    let len = items.len();
    if from >= len {
        return Err(DomainError::InvalidIndex { index: from, len });
    }
    if to >= len {
        return Err(DomainError::InvalidIndex { index: to, len });
    }
    let item = items.remove(from);
    items.insert(to, item);
    Ok(())
}

/// Translate a move between two visible positions into `(from, to)` for
/// [`move_item`] on the full collection.
///
/// `visible` holds the full-collection index of each displayed item, in
/// display order. Moving down drops the item just after the target, moving
/// up drops it just before, which is the plain splice when nothing is hidden.
pub fn map_visible_move(
    visible: &[usize],
    source: usize,
    destination: usize,
) -> DomainResult<(usize, usize)> {
    let len = visible.len();
    let from = *visible
        .get(source)
        .ok_or(DomainError::InvalidIndex { index: source, len })?;
    let anchor = *visible
        .get(destination)
        .ok_or(DomainError::InvalidIndex { index: destination, len })?;

    // Anchor position once the dragged item is out of the list
    let anchor = if anchor > from { anchor - 1 } else { anchor };
    let to = if source < destination { anchor + 1 } else { anchor };
    Ok((from, to))
}

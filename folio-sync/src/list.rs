//! In-place edits of a locally held row list, keyed by row id.

use folio_types::{Record, RowId};

/// Prepends `row`, or replaces the row with the same id where it stands.
pub(crate) fn insert_front<E: Record>(items: &mut Vec<E>, row: E) {
    match items.iter().position(|r| r.id() == row.id()) {
        Some(i) => items[i] = row,
        None => items.insert(0, row),
    }
}

/// Replaces the row with `id`. Returns false when it is not held locally.
pub(crate) fn replace<E: Record>(items: &mut [E], id: &RowId, row: E) -> bool {
    match items.iter_mut().find(|r| r.id() == id) {
        Some(slot) => {
            *slot = row;
            true
        }
        None => false,
    }
}

/// Drops the row with `id`, keeping the order of the rest.
pub(crate) fn remove<E: Record>(items: &mut Vec<E>, id: &RowId) -> bool {
    let before = items.len();
    items.retain(|r| r.id() != id);
    items.len() != before
}

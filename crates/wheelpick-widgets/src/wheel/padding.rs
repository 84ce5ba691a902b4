//! Padding the caller's items into the display sequence.

use super::item::{DisplayRow, WheelItem};
use super::SENTINEL_ROWS;

/// Build the display sequence: sentinels, the items, sentinels.
///
/// An empty collection yields an empty sequence, and the wheel then paints
/// nothing.
#[must_use]
pub fn pad_items(items: &[WheelItem]) -> Vec<DisplayRow> {
    if items.is_empty() {
        return Vec::new();
    }

    let mut rows = Vec::with_capacity(items.len() + 2 * SENTINEL_ROWS);
    rows.extend((0..SENTINEL_ROWS).map(|_| DisplayRow::Sentinel));
    rows.extend(
        items
            .iter()
            .enumerate()
            .map(|(index, item)| DisplayRow::Item {
                index,
                item: item.clone(),
            }),
    );
    rows.extend((0..SENTINEL_ROWS).map(|_| DisplayRow::Sentinel));
    rows
}

/// Display-sequence position of a real index.
#[must_use]
pub const fn display_index_of(real_index: usize) -> usize {
    real_index + SENTINEL_ROWS
}

/// Real index of a display row, `None` for sentinel positions.
#[must_use]
pub fn real_index_of(display_index: usize, item_count: usize) -> Option<usize> {
    display_index
        .checked_sub(SENTINEL_ROWS)
        .filter(|&i| i < item_count)
}

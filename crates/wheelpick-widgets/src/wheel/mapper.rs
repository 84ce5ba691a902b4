//! Mapping between scroll offsets and item indices.
//!
//! Offsets are centre-line offsets: the display row whose index is
//! `round(offset / row_height)` occupies the centre slot. Subtracting the
//! leading [`SENTINEL_ROWS`] gives the real index.
//!
//! The absolute value taken on the raw index only absorbs small negative
//! overscroll (less than half a row, or up to two rows, which still maps
//! outside the item range). Larger negative offsets fold back onto
//! positive indices, so `-160.0` at 40px rows maps to real index 2 just as
//! `+160.0` does. That mirror is a known limitation and is kept as is.

use super::padding::display_index_of;
use super::SENTINEL_ROWS;

/// Display row at the centre line: `offset / row_height` rounded half up.
#[must_use]
pub fn raw_index(offset_y: f32, row_height: f32) -> i64 {
    (offset_y / row_height + 0.5).floor() as i64
}

/// Real index selected by a centre-line offset, if it names a real item.
#[must_use]
pub fn real_index_for_offset(offset_y: f32, row_height: f32, item_count: usize) -> Option<usize> {
    let candidate = raw_index(offset_y, row_height).abs() - SENTINEL_ROWS as i64;
    usize::try_from(candidate)
        .ok()
        .filter(|&index| index < item_count)
}

/// Centre-line offset that centres a real index.
#[must_use]
pub fn offset_for_index(real_index: usize, row_height: f32) -> f32 {
    display_index_of(real_index) as f32 * row_height
}

/// Offset range covering every display row, sentinels included.
#[must_use]
pub fn offset_extent(row_height: f32, display_len: usize) -> (f32, f32) {
    let last = display_len.saturating_sub(1);
    (0.0, last as f32 * row_height)
}

/// Nearest offset that centres a real item.
#[must_use]
pub fn snap_offset(offset_y: f32, row_height: f32, item_count: usize) -> f32 {
    if item_count == 0 {
        return offset_y;
    }
    let first = SENTINEL_ROWS as i64;
    let last = first + item_count as i64 - 1;
    raw_index(offset_y, row_height).clamp(first, last) as f32 * row_height
}

/// Request to move the wheel so a real item is centred.
///
/// `index` is handed to the host's scroll-to-index primitive over the
/// display sequence. A host that lays the sequence out top-aligned puts
/// display row `index` at the top edge, which leaves real item `index` in
/// the centre slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollCommand {
    /// Target index
    pub index: usize,
    /// Whether the host should animate the move
    pub animated: bool,
}

impl ScrollCommand {
    /// Animated scroll to a real index.
    #[must_use]
    pub const fn animated(index: usize) -> Self {
        Self {
            index,
            animated: true,
        }
    }

    /// Centre-line offset this command settles at.
    #[must_use]
    pub fn target_offset(&self, row_height: f32) -> f32 {
        offset_for_index(self.index, row_height)
    }
}

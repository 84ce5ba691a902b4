//! Selection state and its transitions.
//!
//! State changes are computed here as a [`Transition`]; the picker carries
//! out the effects it names (callback, haptic pulse, scroll command).

use super::item::WheelItem;
use super::mapper::ScrollCommand;

/// Message emitted when the selected item changes.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChanged {
    /// Real index of the newly selected item
    pub index: usize,
    /// The item at that index
    pub item: WheelItem,
}

/// Effects produced by one state update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transition {
    /// Selection message, when listeners must be notified
    pub changed: Option<SelectionChanged>,
    /// Whether a light haptic pulse should be requested
    pub haptic: bool,
    /// Scroll command for the surface
    pub scroll: Option<ScrollCommand>,
}

impl Transition {
    /// A transition with no effects.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Check if nothing needs to happen.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.changed.is_none() && !self.haptic && self.scroll.is_none()
    }
}

/// Selected index plus the bookkeeping that decides notifications.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected_index: usize,
    last_update_was_user_gesture: bool,
    haptics: bool,
    /// Last externally supplied index that was acted on
    applied_external: Option<usize>,
}

impl SelectionState {
    /// Create state at index 0.
    #[must_use]
    pub const fn new(haptics: bool) -> Self {
        Self {
            selected_index: 0,
            last_update_was_user_gesture: false,
            haptics,
            applied_external: None,
        }
    }

    /// Currently selected real index.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Whether the current interaction started with a touch.
    #[must_use]
    pub const fn is_user_gesture(&self) -> bool {
        self.last_update_was_user_gesture
    }

    /// Enable or disable haptic pulses.
    pub fn set_haptics(&mut self, enabled: bool) {
        self.haptics = enabled;
    }

    /// Record that a touch began on the wheel.
    pub fn touch_started(&mut self) {
        self.last_update_was_user_gesture = true;
    }

    /// Record that the next updates are not touch driven.
    pub fn clear_user_gesture(&mut self) {
        self.last_update_was_user_gesture = false;
    }

    /// Keep the selection inside a shrunken collection.
    pub fn clamp_to(&mut self, item_count: usize) {
        if item_count > 0 && self.selected_index >= item_count {
            log::debug!(
                "selection {} clamped to {}",
                self.selected_index,
                item_count - 1
            );
            self.selected_index = item_count - 1;
        }
    }

    /// Select `index` after the surface settled on it.
    ///
    /// Out-of-range indices are ignored. Re-selecting the current index is
    /// a no-op. A haptic pulse is requested only when haptics are enabled
    /// and the update came from a touch.
    pub fn set_selection(&mut self, index: usize, items: &[WheelItem]) -> Transition {
        let Some(item) = items.get(index) else {
            log::trace!("selection {index} ignored: {} items", items.len());
            return Transition::none();
        };
        if index == self.selected_index {
            return Transition::none();
        }

        let haptic = self.haptics && self.last_update_was_user_gesture;
        log::debug!(
            "selection {} -> {index} (touch: {})",
            self.selected_index,
            self.last_update_was_user_gesture
        );
        self.selected_index = index;
        Transition {
            changed: Some(SelectionChanged {
                index,
                item: item.clone(),
            }),
            haptic,
            scroll: None,
        }
    }

    /// React to the externally controlled index.
    ///
    /// Acts only when `external` differs from the last value acted on, or
    /// when `force` is set (mount, new items). In range, it moves the
    /// selection, scrolls the wheel there and notifies if forced or the
    /// index actually changed. Never requests haptics.
    pub fn sync_external(
        &mut self,
        external: Option<usize>,
        items: &[WheelItem],
        force: bool,
    ) -> Transition {
        let Some(index) = external else {
            self.applied_external = None;
            return Transition::none();
        };
        if !force && self.applied_external == Some(index) {
            return Transition::none();
        }
        self.applied_external = Some(index);

        let Some(item) = items.get(index) else {
            log::trace!(
                "external selection {index} ignored: {} items",
                items.len()
            );
            return Transition::none();
        };

        self.last_update_was_user_gesture = false;
        let notify = force || index != self.selected_index;
        self.selected_index = index;
        Transition {
            changed: notify.then(|| SelectionChanged {
                index,
                item: item.clone(),
            }),
            haptic: false,
            scroll: Some(ScrollCommand::animated(index)),
        }
    }

    /// Drop all state, keeping the haptics preference.
    pub fn reset(&mut self) {
        *self = Self::new(self.haptics);
    }
}

//! Picker state machine: selection, hover, reveal, and the move window.
//!
//! All four pieces of view state live here, behind transition methods
//! that enforce the interaction rules:
//!
//! - at most one card is selected until a reset
//! - hover only changes while nothing is selected
//! - reveal only happens after a selection, and only once per selection
//!
//! The two timed transitions (stop moving at +500 ms, reveal at
//! +1000 ms) are scheduled by the caller. Each scheduled callback
//! carries the [`Epoch`] returned by [`PickerState::select`]; `reset`
//! bumps the epoch, so a timer that fires after a reset observes a
//! mismatch and leaves the state alone. This is the cancellation
//! mechanism — there are no timer handles to track.

use std::time::Duration;

use crate::deck::DECK_SIZE;

/// How long the picked card spends gliding to the reveal position.
pub const MOVE_DURATION: Duration = Duration::from_millis(500);

/// Delay between picking a card and flipping it face-up.
pub const REVEAL_DELAY: Duration = Duration::from_millis(1000);

/// Token tying a scheduled transition to the selection that created it.
///
/// Opaque outside this module; obtained from [`PickerState::select`]
/// and handed back to [`PickerState::finish_move`] / [`PickerState::reveal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Epoch(u64);

/// Transient view state of the picker widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerState {
    selected: Option<u8>,
    revealed: bool,
    hovered: Option<u8>,
    moving: bool,
    epoch: u64,
}

impl PickerState {
    /// Fresh state: nothing selected, hovered, revealed, or moving.
    pub fn new() -> Self {
        Self {
            selected: None,
            revealed: false,
            hovered: None,
            moving: false,
            epoch: 0,
        }
    }

    /// Pick a card.
    ///
    /// Returns the epoch token the caller must attach to the two timer
    /// callbacks it schedules ([`finish_move`](Self::finish_move) at
    /// +[`MOVE_DURATION`], [`reveal`](Self::reveal) at +[`REVEAL_DELAY`]).
    /// Returns `None` without changing anything if a card is already
    /// selected or `id` is not a deck card.
    pub fn select(&mut self, id: u8) -> Option<Epoch> {
        if self.selected.is_some() {
            tracing::debug!("ignoring pick of card {id}: a card is already drawn");
            return None;
        }
        if id >= DECK_SIZE {
            tracing::warn!("ignoring pick of unknown card id {id}");
            return None;
        }
        self.selected = Some(id);
        self.moving = true;
        tracing::debug!("card {id} picked (epoch {})", self.epoch);
        Some(Epoch(self.epoch))
    }

    /// Timed transition at +500 ms: the picked card has arrived at the
    /// reveal position. Ignored if the epoch is stale or nothing is
    /// selected anymore.
    ///
    /// Returns whether the transition applied.
    pub fn finish_move(&mut self, epoch: Epoch) -> bool {
        if epoch.0 != self.epoch || self.selected.is_none() {
            tracing::debug!("stale finish_move (epoch {})", epoch.0);
            return false;
        }
        self.moving = false;
        true
    }

    /// Timed transition at +1000 ms: flip the picked card face-up.
    /// Ignored if the epoch is stale or nothing is selected anymore.
    ///
    /// Returns whether the transition applied.
    pub fn reveal(&mut self, epoch: Epoch) -> bool {
        if epoch.0 != self.epoch || self.selected.is_none() {
            tracing::debug!("stale reveal (epoch {})", epoch.0);
            return false;
        }
        self.revealed = true;
        true
    }

    /// Pointer entered a card. No-op once a card is selected.
    pub fn hover_enter(&mut self, id: u8) {
        if self.selected.is_none() {
            self.hovered = Some(id);
        }
    }

    /// Pointer left a card. No-op once a card is selected.
    pub fn hover_leave(&mut self) {
        if self.selected.is_none() {
            self.hovered = None;
        }
    }

    /// Return to the initial state and invalidate every timer scheduled
    /// before this call.
    pub fn reset(&mut self) {
        tracing::debug!("picker reset (epoch {} -> {})", self.epoch, self.epoch + 1);
        self.selected = None;
        self.revealed = false;
        self.hovered = None;
        self.moving = false;
        self.epoch += 1;
    }

    /// Currently selected card id, if any.
    pub fn selected(&self) -> Option<u8> {
        self.selected
    }

    /// Whether this card is the selected one.
    pub fn is_selected(&self, id: u8) -> bool {
        self.selected == Some(id)
    }

    /// Whether the selected card has been flipped face-up.
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Currently hovered card id, if any.
    pub fn hovered(&self) -> Option<u8> {
        self.hovered
    }

    /// Whether the selected card is still gliding to the reveal position.
    pub fn is_moving(&self) -> bool {
        self.moving
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_sets_moving_and_returns_epoch() {
        let mut state = PickerState::new();
        let epoch = state.select(5).expect("first pick succeeds");
        assert_eq!(state.selected(), Some(5));
        assert!(state.is_moving());
        assert!(!state.revealed());

        assert!(state.finish_move(epoch));
        assert!(!state.is_moving());
        assert!(state.reveal(epoch));
        assert!(state.revealed());
    }

    #[test]
    fn test_second_pick_is_ignored() {
        let mut state = PickerState::new();
        state.select(3).unwrap();
        assert!(state.select(7).is_none());
        assert_eq!(state.selected(), Some(3));
    }

    #[test]
    fn test_out_of_range_pick_is_ignored() {
        let mut state = PickerState::new();
        assert!(state.select(22).is_none());
        assert_eq!(state.selected(), None);
        assert!(!state.is_moving());
    }

    #[test]
    fn test_hover_rejected_after_selection() {
        let mut state = PickerState::new();
        state.hover_enter(2);
        assert_eq!(state.hovered(), Some(2));

        state.select(2).unwrap();
        state.hover_enter(9);
        assert_eq!(state.hovered(), Some(2));
        state.hover_leave();
        assert_eq!(state.hovered(), Some(2));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = PickerState::new();
        state.hover_enter(1);
        let epoch = state.select(1).unwrap();
        state.finish_move(epoch);
        state.reveal(epoch);

        state.reset();
        assert_eq!(state.selected(), None);
        assert_eq!(state.hovered(), None);
        assert!(!state.revealed());
        assert!(!state.is_moving());
    }

    #[test]
    fn test_stale_timers_do_nothing_after_reset() {
        let mut state = PickerState::new();
        let epoch = state.select(4).unwrap();
        state.reset();

        assert!(!state.finish_move(epoch));
        assert!(!state.reveal(epoch));
        assert!(!state.is_moving());
        assert!(!state.revealed());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_stale_timers_do_not_leak_into_next_selection() {
        let mut state = PickerState::new();
        let first = state.select(4).unwrap();
        state.reset();
        let second = state.select(8).unwrap();

        // first selection's reveal fires late
        assert!(!state.reveal(first));
        assert!(!state.revealed());

        // current selection's timers still work
        assert!(state.finish_move(second));
        assert!(state.reveal(second));
        assert!(state.revealed());
    }
}

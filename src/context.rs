//! Context hooks for the Arcana widget.
//!
//! The deck and picker state are provided once by the App component
//! and read by every card through use_context.

use arcana_core::{Deck, PickerState};
use dioxus::prelude::*;

/// Hook to access the immutable deck from context.
pub fn use_deck() -> Signal<Deck> {
    use_context::<Signal<Deck>>()
}

/// Hook to access the picker state from context.
///
/// Writing through the returned signal re-renders every card, which is
/// what drives the fan/hover/move/flip styling.
pub fn use_picker() -> Signal<PickerState> {
    use_context::<Signal<PickerState>>()
}

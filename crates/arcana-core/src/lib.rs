//! Arcana Core Library
//!
//! Behavioral core of the Arcana tarot card picker: the deck model,
//! the picker state machine, and the pure layout resolver. No UI
//! framework types appear here; the desktop shell drives this crate
//! from its event handlers and timers.
//!
//! ## Overview
//!
//! A fanned deck of 22 Major Arcana cards. Hovering lifts a card,
//! clicking picks it; the picked card glides to a reveal position for
//! 500 ms and flips face-up at 1000 ms. A reset returns everything to
//! the initial fan.
//!
//! ## Quick Start
//!
//! ```
//! use arcana_core::{CardLayout, Deck, PickerState};
//!
//! let deck = Deck::default();
//! let mut picker = PickerState::new();
//!
//! let epoch = picker.select(5).expect("nothing selected yet");
//! // ... at +500 ms:
//! picker.finish_move(epoch);
//! // ... at +1000 ms:
//! picker.reveal(epoch);
//!
//! assert!(picker.revealed());
//! let layout = CardLayout::resolve(5, 5, &picker);
//! assert_eq!(layout.rotation_deg, 0);
//! # let _ = deck;
//! ```

pub mod deck;
pub mod error;
pub mod layout;
pub mod picker;

// Re-exports
pub use deck::{AssetConfig, Card, Deck, DECK_SIZE, DEFAULT_ASSET_BASE, DEFAULT_LOCALE};
pub use error::{DeckError, DeckResult};
pub use layout::{CardLayout, CARD_HEIGHT_PX, CARD_WIDTH_PX};
pub use picker::{Epoch, PickerState, MOVE_DURATION, REVEAL_DELAY};

//! UI components for the Arcana tarot picker.

mod card_deck;
mod result_panel;
mod tarot_card;

pub use card_deck::CardDeck;
pub use result_panel::ResultPanel;
pub use tarot_card::TarotCard;

//! Deck model: the 22 Major Arcana cards and their artwork URLs.
//!
//! The deck is built once at startup and never mutated. Cards carry
//! their front-image URL; the shared back image lives on the deck.

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

/// Number of cards in the deck (Major Arcana 0..=21).
pub const DECK_SIZE: u8 = 22;

/// Default static asset host serving the card artwork.
pub const DEFAULT_ASSET_BASE: &str = "https://creactive.astrocenter.fr/tarotouinon/assets";

/// Default locale segment for the localized card faces.
pub const DEFAULT_LOCALE: &str = "fr";

/// Where card artwork is served from.
///
/// Front faces resolve to `<base>/localized/<locale>/cards/<id>.png`,
/// the shared back to `<base>/card_back.png`. The host is an external
/// collaborator: URLs are constructed, never validated or cached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Base URL of the asset host, without trailing slash
    pub base: String,
    /// Locale segment for the localized faces
    pub locale: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_ASSET_BASE.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl AssetConfig {
    /// Create a config from an explicit base URL and locale.
    ///
    /// Rejects an empty/whitespace base; a trailing slash is trimmed
    /// so URL joining stays single-slashed.
    pub fn new(base: impl Into<String>, locale: impl Into<String>) -> DeckResult<Self> {
        let base = base.into();
        let trimmed = base.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(DeckError::InvalidAssetBase(base));
        }
        Ok(Self {
            base: trimmed.to_string(),
            locale: locale.into(),
        })
    }

    /// URL of the front image for a card id.
    pub fn card_front_url(&self, id: u8) -> String {
        format!("{}/localized/{}/cards/{}.png", self.base, self.locale, id)
    }

    /// URL of the shared card-back image.
    pub fn card_back_url(&self) -> String {
        format!("{}/card_back.png", self.base)
    }
}

/// A single Major Arcana card. Immutable once the deck is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Arcana number, 0..=21
    pub id: u8,
    /// URL of the card's front image
    pub image_url: String,
}

/// Ordered, fixed-size deck of [`DECK_SIZE`] cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    back_url: String,
}

impl Deck {
    /// Build the deck from an asset config.
    pub fn new(assets: &AssetConfig) -> Self {
        let cards = (0..DECK_SIZE)
            .map(|id| Card {
                id,
                image_url: assets.card_front_url(id),
            })
            .collect();
        Self {
            cards,
            back_url: assets.card_back_url(),
        }
    }

    /// All cards, in fan order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id.
    pub fn card(&self, id: u8) -> DeckResult<&Card> {
        self.cards
            .get(id as usize)
            .ok_or(DeckError::CardOutOfRange(id))
    }

    /// URL of the shared card-back image.
    pub fn back_url(&self) -> &str {
        &self.back_url
    }

    /// Number of cards in the deck. Always [`DECK_SIZE`].
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Never true for a constructed deck.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(&AssetConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_has_22_ordered_cards() {
        let deck = Deck::default();
        assert_eq!(deck.len(), 22);
        for (index, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.id as usize, index);
        }
    }

    #[test]
    fn test_default_urls_match_asset_host() {
        let deck = Deck::default();
        assert_eq!(
            deck.card(0).unwrap().image_url,
            "https://creactive.astrocenter.fr/tarotouinon/assets/localized/fr/cards/0.png"
        );
        assert_eq!(
            deck.card(21).unwrap().image_url,
            "https://creactive.astrocenter.fr/tarotouinon/assets/localized/fr/cards/21.png"
        );
        assert_eq!(
            deck.back_url(),
            "https://creactive.astrocenter.fr/tarotouinon/assets/card_back.png"
        );
    }

    #[test]
    fn test_card_out_of_range() {
        let deck = Deck::default();
        assert!(matches!(deck.card(22), Err(DeckError::CardOutOfRange(22))));
    }

    #[test]
    fn test_custom_base_and_locale() {
        let assets = AssetConfig::new("https://example.com/tarot/", "en").unwrap();
        assert_eq!(
            assets.card_front_url(7),
            "https://example.com/tarot/localized/en/cards/7.png"
        );
        assert_eq!(assets.card_back_url(), "https://example.com/tarot/card_back.png");
    }

    #[test]
    fn test_empty_base_rejected() {
        assert!(matches!(
            AssetConfig::new("   ", "fr"),
            Err(DeckError::InvalidAssetBase(_))
        ));
    }
}

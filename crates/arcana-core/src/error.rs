//! Error types for the Arcana deck

use thiserror::Error;

/// Main error type for deck configuration and lookup.
///
/// Interaction misuse (picking while a card is already drawn, hovering
/// after a pick) is deliberately NOT an error: those calls are silent
/// no-ops, matching the widget's observable behavior.
#[derive(Error, Debug)]
pub enum DeckError {
    /// Card id outside the Major Arcana range 0..22
    #[error("Card id out of range: {0}")]
    CardOutOfRange(u8),

    /// Asset base URL was empty or unusable
    #[error("Invalid asset base: {0}")]
    InvalidAssetBase(String),
}

/// Result type alias using DeckError
pub type DeckResult<T> = Result<T, DeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DeckError::CardOutOfRange(42);
        assert_eq!(format!("{}", err), "Card id out of range: 42");
    }
}

//! Card Deck Component
//!
//! The fanned deck: hover lift, click-to-pick, and the two timed
//! transitions (settle at +500 ms, flip at +1000 ms). Picking a card
//! spawns two sleeping tasks that re-enter the picker state with the
//! epoch captured at selection time; a reset bumps the epoch, so a
//! task that fires late finds its epoch stale and does nothing.

use dioxus::prelude::*;

use arcana_core::{CardLayout, MOVE_DURATION, REVEAL_DELAY};

use super::{ResultPanel, TarotCard};
use crate::context::{use_deck, use_picker};

/// The whole picker: title, fanned deck, and the result panel once the
/// drawn card is revealed.
#[component]
pub fn CardDeck() -> Element {
    let deck = use_deck();
    let mut picker = use_picker();

    let pick_card = move |id: u8| {
        let Some(epoch) = picker.write().select(id) else {
            // a card is already drawn; further picks are no-ops
            return;
        };

        spawn(async move {
            tokio::time::sleep(MOVE_DURATION).await;
            picker.write().finish_move(epoch);
        });

        spawn(async move {
            tokio::time::sleep(REVEAL_DELAY).await;
            if picker.write().reveal(epoch) {
                tracing::info!("card {} revealed", id);
            }
        });
    };

    let hover_card = move |entered: Option<u8>| match entered {
        Some(id) => picker.write().hover_enter(id),
        None => picker.write().hover_leave(),
    };

    let reset = move |_| {
        tracing::info!("resetting the deck");
        picker.write().reset();
    };

    let state = picker();
    let deck = deck();

    rsx! {
        div { class: "tarot-card-picker",
            h2 { class: "title", "Tarot Card Reading" }

            div { class: "card-container",
                div { class: "card-deck",
                    for (index, card) in deck.cards().iter().enumerate() {
                        TarotCard {
                            key: "{card.id}",
                            card: card.clone(),
                            back_url: deck.back_url().to_string(),
                            layout: CardLayout::resolve(card.id, index, &state),
                            selected: state.is_selected(card.id),
                            hoverable: state.selected().is_none(),
                            revealed: state.revealed(),
                            on_pick: pick_card,
                            on_hover: hover_card,
                        }
                    }
                }
            }

            if let Some(id) = state.selected() {
                if state.revealed() {
                    ResultPanel { card_id: id, on_reset: reset }
                }
            }
        }
    }
}

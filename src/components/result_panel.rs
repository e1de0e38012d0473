//! Result Panel Component
//!
//! Names the drawn arcana and offers the reset control. Only rendered
//! once the drawn card is revealed.

use dioxus::prelude::*;

/// Result panel with the drawn card and the reset button.
#[component]
pub fn ResultPanel(
    /// Id of the drawn card
    card_id: u8,
    /// Called when the user asks for a fresh deck
    on_reset: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "result",
            p { class: "result-text",
                "You have drawn Arcana {card_id}"
            }
            button {
                class: "reset-button",
                onclick: move |_| on_reset.call(()),
                "Draw a new card"
            }
        }
    }
}

//! Tarot Card Component
//!
//! One absolutely-positioned card with a two-faced flip surface. The
//! back face shows until the card is both selected and revealed; the
//! flip is a 3-D rotateY transition on the inner surface, gated by the
//! `revealed` class. A front image that fails to load degrades to its
//! alt text; that is the whole failure story.

use dioxus::prelude::*;

use arcana_core::{Card, CardLayout};

/// A single card in the fan.
#[component]
pub fn TarotCard(
    /// Card data (id and front-image URL)
    card: Card,
    /// URL of the shared card-back image
    back_url: String,
    /// Resolved positional style for this render pass
    layout: CardLayout,
    /// Whether this card is the drawn one
    selected: bool,
    /// Whether the deck still accepts hover (no card drawn yet)
    hoverable: bool,
    /// Whether the drawn card has been flipped face-up
    revealed: bool,
    /// Called with the card id on click
    on_pick: EventHandler<u8>,
    /// Called with Some(id) on pointer enter, None on pointer leave
    on_hover: EventHandler<Option<u8>>,
) -> Element {
    let id = card.id;
    let flipped = selected && revealed;

    let selected_class = if selected { " selected" } else { "" };
    let hoverable_class = if hoverable { " hoverable" } else { "" };
    let inner_class = if flipped { "card-inner revealed" } else { "card-inner" };

    rsx! {
        div {
            class: "tarot-card{selected_class}{hoverable_class}",
            style: "{layout.to_css()}",
            onclick: move |_| on_pick.call(id),
            onmouseenter: move |_| on_hover.call(Some(id)),
            onmouseleave: move |_| on_hover.call(None),

            div { class: "{inner_class}",
                img {
                    class: "card-back",
                    src: "{back_url}",
                    alt: "Card back",
                }
                img {
                    class: "card-front",
                    src: "{card.image_url}",
                    alt: "Arcana {card.id}",
                }
            }
        }
    }
}

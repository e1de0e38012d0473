use dioxus::prelude::*;

use arcana_core::{Deck, PickerState};

use crate::components::CardDeck;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the shared deck/picker context, then
/// renders the picker. The widget is a leaf: no routing, no
/// persistence, all state is transient and dies with the window.
#[component]
pub fn App() -> Element {
    // The deck is computed once per mount from the CLI asset config
    let deck: Signal<Deck> = use_signal(|| Deck::new(&crate::asset_config()));
    let picker: Signal<PickerState> = use_signal(PickerState::new);

    use_context_provider(|| deck);
    use_context_provider(|| picker);

    rsx! {
        style { {GLOBAL_STYLES} }
        CardDeck {}
    }
}

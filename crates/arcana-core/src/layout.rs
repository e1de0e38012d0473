//! Pure layout resolver: fan position, hover lift, move-to-center.
//!
//! [`CardLayout::resolve`] maps (card, index, state) to the positional
//! style of one card. Same inputs, same output — no I/O, no hidden
//! state. The flip itself is not positional and stays in the
//! stylesheet; this module only decides where the card sits and how
//! it is rotated, lifted, and stacked.

use serde::{Deserialize, Serialize};

use crate::picker::PickerState;

/// Card face width in pixels.
pub const CARD_WIDTH_PX: u32 = 100;

/// Card face height in pixels.
pub const CARD_HEIGHT_PX: u32 = 160;

/// Horizontal spacing between fanned cards.
const FAN_STEP_PX: i32 = 15;

/// Index of the fan's visual center; rotation grows away from it.
const FAN_CENTER_INDEX: i32 = 10;

/// Degrees of rotation per step away from the fan center.
const FAN_ANGLE_STEP_DEG: i32 = 2;

/// Where the picked card glides to during the move window.
const MOVE_TARGET_LEFT_PX: i32 = 170;
const MOVE_TARGET_TOP_PX: i32 = 200;

/// Vertical lift of a hovered card.
const HOVER_LIFT_PX: i32 = -20;

/// A hovered card stacks above the whole fan.
const HOVER_Z_INDEX: i32 = 22;

/// The selected card stacks above everything, hovered or not.
const SELECTED_Z_INDEX: i32 = 30;

/// Resolved positional style for one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLayout {
    pub left_px: i32,
    pub top_px: i32,
    pub rotation_deg: i32,
    pub lift_px: i32,
    pub z_index: i32,
}

impl CardLayout {
    /// Compute the layout of the card at `index` with id `card_id`
    /// under the current picker state.
    pub fn resolve(card_id: u8, index: usize, state: &PickerState) -> Self {
        let index = index as i32;
        let selected = state.is_selected(card_id);
        // Hover effects only apply while nothing is selected; the
        // hovered id itself may linger after a pick.
        let hovered = state.selected().is_none() && state.hovered() == Some(card_id);

        let (left_px, top_px) = if selected && state.is_moving() {
            (MOVE_TARGET_LEFT_PX, MOVE_TARGET_TOP_PX)
        } else {
            (index * FAN_STEP_PX, 0)
        };

        let rotation_deg = if selected {
            0
        } else {
            (index - FAN_CENTER_INDEX) * FAN_ANGLE_STEP_DEG
        };

        let z_index = if selected {
            SELECTED_Z_INDEX
        } else if hovered {
            HOVER_Z_INDEX
        } else {
            index
        };

        Self {
            left_px,
            top_px,
            rotation_deg,
            lift_px: if hovered { HOVER_LIFT_PX } else { 0 },
            z_index,
        }
    }

    /// Render as an inline CSS declaration list.
    pub fn to_css(&self) -> String {
        format!(
            "width: {CARD_WIDTH_PX}px; height: {CARD_HEIGHT_PX}px; \
             left: {}px; top: {}px; \
             transform: rotate({}deg) translateY({}px); \
             transform-origin: bottom center; \
             transition: all 0.5s ease-in-out; \
             z-index: {};",
            self.left_px, self.top_px, self.rotation_deg, self.lift_px, self.z_index
        )
    }
}

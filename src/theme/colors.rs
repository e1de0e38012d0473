//! Color constants for the Arcana widget.
//!
//! Soft lavender table, deep indigo ink.

#![allow(dead_code)]

// === TABLE (Backgrounds) ===
pub const LAVENDER: &str = "#f0e6ff";
pub const PERIWINKLE: &str = "#e6e6ff";

// === INK (Titles, Result, Controls) ===
pub const INDIGO: &str = "#4b0082";
pub const INDIGO_DEEP: &str = "#3a006f";
pub const INDIGO_GLOW: &str = "rgba(75, 0, 130, 0.3)";

// === CARD ===
pub const CARD_SHADOW: &str = "rgba(0, 0, 0, 0.1)";

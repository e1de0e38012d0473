//! Visual theme for the Arcana widget.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;

//! Color theme definitions for the UI.
//!
//! All color constants are defined here for consistency and easy theme changes.

use ratatui::style::Color;

use crate::clock::{Ink, Paint};

/// Clock face background
pub const PAPER: Color = Color::Rgb(241, 245, 249); // Slate 100
/// Black ink
pub const INK: Color = Color::Rgb(15, 23, 42); // Slate 900
/// Blurred black ink (shadows)
pub const SHADOW: Color = Color::Rgb(148, 163, 184); // Slate 400
/// White ink (highlights)
pub const HIGHLIGHT: Color = Color::White;
/// Muted text color
pub const MUTED: Color = Color::Rgb(148, 163, 184); // Brighter gray
/// Border color
pub const BORDER: Color = Color::Rgb(129, 140, 248); // Light indigo
/// Key highlight color (for keyboard shortcuts)
pub const KEY: Color = Color::Rgb(244, 114, 182); // Bright pink
/// Primary accent color (used for the digital readout)
pub const PRIMARY: Color = Color::Rgb(56, 189, 248); // Bright cyan

/// Terminal color for a paint.
///
/// Terminals cannot blur, so blurred black ink becomes a lighter shadow tone.
pub fn paint_color(paint: &Paint) -> Color {
    match (paint.ink, paint.is_blurred()) {
        (Ink::Black, false) => INK,
        (Ink::Black, true) => SHADOW,
        (Ink::White, _) => HIGHLIGHT,
    }
}

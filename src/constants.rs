//! Application-wide constants.
//!
//! Centralizes magic numbers and configuration values for maintainability.

use std::time::Duration;

/// Event polling timeout - balances responsiveness with CPU usage.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Delay between a finished frame and the next redraw.
pub const REDRAW_DELAY: Duration = Duration::from_millis(500);

/// Clock face geometry, in surface pixels.
pub mod face {
    /// Gap between the surface edge and the tick ring.
    pub const PADDING: i32 = 50;
    /// Numeral font size in logical units, before density scaling.
    pub const NUMERAL_FONT_SIZE: f64 = 13.0;
    /// Visual radius of a tick dot.
    pub const TICK_DOT_RADIUS: f64 = 5.0;
    /// Number of tick dots around the face.
    pub const TICK_COUNT: u32 = 60;
    /// Position units per full turn (one per minute or second).
    pub const POSITION_UNITS: f64 = 60.0;
    /// The clip circle sits this far inside `radius + padding`.
    pub const CLIP_INSET: f64 = 10.0;
    /// The face shadow and highlight sit this far outside `radius + padding`.
    pub const RIM_OUTSET: f64 = 10.0;
    /// Horizontal offset of the face shadow.
    pub const SHADOW_OFFSET_X: f64 = 30.0;
    /// Horizontal offset of the face highlight.
    pub const HIGHLIGHT_OFFSET_X: f64 = 20.0;
    /// Vertical offset of every hand shadow.
    pub const HAND_SHADOW_OFFSET_Y: f64 = 10.0;
}

/// Stroke widths and blur radii.
pub mod stroke {
    pub const CLIP_WIDTH: f64 = 6.0;
    pub const FACE_WIDTH: f64 = 20.0;
    pub const FACE_SHADOW_WIDTH: f64 = 60.0;
    pub const FACE_SHADOW_BLUR: f64 = 50.0;
    pub const HIGHLIGHT_WIDTH: f64 = 6.0;
    pub const HIGHLIGHT_BLUR: f64 = 1.0;
    pub const HOUR_HAND_WIDTH: f64 = 10.0;
    pub const MINUTE_HAND_WIDTH: f64 = 6.0;
    pub const SECOND_HAND_WIDTH: f64 = 3.0;
    pub const HAND_SHADOW_WIDTH: f64 = 3.0;
    pub const HAND_SHADOW_BLUR: f64 = 10.0;
    pub const NUMERAL_WIDTH: f64 = 3.0;
}

/// Terminal surface defaults.
pub mod surface {
    /// Virtual pixels per Braille dot.
    pub const DEFAULT_PIXELS_PER_DOT: f64 = 6.0;
    /// Display density applied to the numeral font.
    pub const DEFAULT_DENSITY: f64 = 1.0;
    /// Braille dots per terminal cell, horizontally.
    pub const DOTS_PER_CELL_X: u16 = 2;
    /// Braille dots per terminal cell, vertically.
    pub const DOTS_PER_CELL_Y: u16 = 4;
}

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Commands bar height.
    pub const COMMANDS_BAR_HEIGHT: u16 = 2;
}

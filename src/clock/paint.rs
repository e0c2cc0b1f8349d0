//! Drawing commands and their styles.
//!
//! Each command owns an immutable [`Paint`]; nothing carries over from one
//! command to the next.

use super::geometry::Point;

/// The two inks the face is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Black,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    Stroke,
    Fill,
}

/// Style of a single drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub ink: Ink,
    pub style: PaintStyle,
    /// Stroke width in surface pixels. Ignored for fills.
    pub width: f64,
    /// Blur radius, if the shape is blurred.
    pub blur: Option<f64>,
}

impl Paint {
    pub const fn stroke(ink: Ink, width: f64) -> Self {
        Self {
            ink,
            style: PaintStyle::Stroke,
            width,
            blur: None,
        }
    }

    pub const fn fill(ink: Ink) -> Self {
        Self {
            ink,
            style: PaintStyle::Fill,
            width: 0.0,
            blur: None,
        }
    }

    /// Same paint with a blur of the given radius.
    pub const fn blurred(self, radius: f64) -> Self {
        Self {
            blur: Some(radius),
            ..self
        }
    }

    pub fn is_blurred(&self) -> bool {
        self.blur.is_some()
    }
}

/// One primitive for the host surface to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Strokes a circle and makes it the clip region for the rest of the frame.
    ClipCircle {
        center: Point,
        radius: f64,
        paint: Paint,
    },
    Circle {
        center: Point,
        radius: f64,
        paint: Paint,
    },
    Line {
        from: Point,
        to: Point,
        paint: Paint,
    },
    /// Text drawn with its left edge and baseline at `origin`.
    Text {
        text: String,
        origin: Point,
        font_size: f64,
        paint: Paint,
    },
}

impl DrawCommand {
    pub fn paint(&self) -> &Paint {
        match self {
            DrawCommand::ClipCircle { paint, .. }
            | DrawCommand::Circle { paint, .. }
            | DrawCommand::Line { paint, .. }
            | DrawCommand::Text { paint, .. } => paint,
        }
    }
}

//! Clock face geometry.
//!
//! Everything here is plain arithmetic on surface coordinates: x grows to the
//! right, y grows downwards, angles are in radians measured from the positive
//! x axis. Nothing in this module can fail; a surface too small for the face
//! simply yields a non-positive radius.

use std::f64::consts::PI;

use crate::constants::face;

use super::time::TimeSample;

/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns the point `distance` away from this one along `angle`.
    pub fn polar(self, angle: f64, distance: f64) -> Self {
        Self::new(
            self.x + angle.cos() * distance,
            self.y + angle.sin() * distance,
        )
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Derived layout values, valid until the next surface size change.
///
/// Center, radius and hand lengths use integer pixel arithmetic, the same
/// way the surface reports its size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConstants {
    pub width: u32,
    pub height: u32,
    pub center: Point,
    pub padding: i64,
    /// `min(width, height) / 2 - padding`. Negative on tiny surfaces.
    pub radius: i64,
    pub hour_hand_length: i64,
    /// Shared by the minute and second hands.
    pub hand_length: i64,
    /// Numeral font size in device pixels.
    pub font_size: f64,
}

impl LayoutConstants {
    /// Derives every layout value from the surface size and display density.
    ///
    /// Total for all inputs: a zero-sized surface gives a degenerate layout.
    pub fn derive(width: u32, height: u32, density: f64) -> Self {
        let padding = i64::from(face::PADDING);
        let radius = i64::from(width.min(height)) / 2 - padding;

        Self {
            width,
            height,
            center: Point::new(f64::from(width / 2), f64::from(height / 2)),
            padding,
            radius,
            hour_hand_length: radius - radius / 2,
            hand_length: radius - radius / 4,
            font_size: face::NUMERAL_FONT_SIZE * density,
        }
    }

    /// True when there is no room to draw a face.
    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0
    }

    /// Radius of the clip boundary and the face circle.
    pub fn clip_radius(&self) -> f64 {
        (self.radius + self.padding) as f64 - face::CLIP_INSET
    }

    /// Radius of the face shadow and highlight.
    pub fn rim_radius(&self) -> f64 {
        (self.radius + self.padding) as f64 + face::RIM_OUTSET
    }

    /// Distance from the center at which numerals are centered.
    pub fn numeral_distance(&self) -> f64 {
        (self.radius - self.padding / 2) as f64
    }

    /// Length of the given hand.
    pub fn hand_length(&self, hand: Hand) -> f64 {
        match hand {
            Hand::Hour => self.hour_hand_length as f64,
            Hand::Minute | Hand::Second => self.hand_length as f64,
        }
    }
}

/// Angle of a position unit on the 0–60 dial scale.
///
/// Position 0 points straight up, position 15 points right.
pub fn position_angle(position: f64) -> f64 {
    PI * position / (face::POSITION_UNITS / 2.0) - PI / 2.0
}

/// Unit vector for an angle, in surface coordinates.
#[cfg(test)]
pub fn unit_vector(angle: f64) -> Point {
    Point::new(angle.cos(), angle.sin())
}

/// The three clock hands, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];

    /// Dial position of this hand for a time sample.
    ///
    /// The hour hand advances continuously: half past two sits at 12.5.
    pub fn position(self, time: &TimeSample) -> f64 {
        match self {
            Hand::Hour => (f64::from(time.hour) + f64::from(time.minute) / 60.0) * 5.0,
            Hand::Minute => f64::from(time.minute),
            Hand::Second => f64::from(time.second),
        }
    }

    pub fn angle(self, time: &TimeSample) -> f64 {
        position_angle(self.position(time))
    }

    /// Tip of the hand for the given layout and time.
    pub fn tip(self, layout: &LayoutConstants, time: &TimeSample) -> Point {
        layout
            .center
            .polar(self.angle(time), layout.hand_length(self))
    }
}

/// Measured glyph bounds of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    pub width: f64,
    pub height: f64,
}

/// Where a numeral goes on the face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumeralPlacement {
    pub numeral: u32,
    /// Point the numeral is centered on.
    pub anchor: Point,
}

impl NumeralPlacement {
    /// Left/baseline text origin that centers text of `bounds` on the anchor.
    pub fn text_origin(&self, bounds: TextBounds) -> Point {
        self.anchor
            .offset(-(bounds.width / 2.0), bounds.height / 2.0)
    }

    pub fn label(&self) -> String {
        self.numeral.to_string()
    }
}

/// Numerals 1 through 12, each at `π/6·(n−3)`.
pub fn numeral_placements(layout: &LayoutConstants) -> impl Iterator<Item = NumeralPlacement> {
    let center = layout.center;
    let distance = layout.numeral_distance();
    (1..=12u32).map(move |numeral| NumeralPlacement {
        numeral,
        anchor: center.polar(PI / 6.0 * (f64::from(numeral) - 3.0), distance),
    })
}

/// The 60 tick dot centers, starting at 12 o'clock and going clockwise.
pub fn tick_positions(layout: &LayoutConstants) -> impl Iterator<Item = Point> {
    let center = layout.center;
    let radius = layout.radius as f64;
    (0..face::TICK_COUNT).map(move |dot| center.polar(position_angle(f64::from(dot)), radius))
}

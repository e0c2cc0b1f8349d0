//! Analog clock face: geometry, drawing commands and the frame renderer.
//!
//! Nothing in here knows about the terminal; the renderer talks to its host
//! through [`RenderHost`].

pub mod geometry;
pub mod paint;
pub mod renderer;
pub mod time;

pub use geometry::{LayoutConstants, Point, TextBounds};
pub use paint::{DrawCommand, Ink, Paint, PaintStyle};
pub use renderer::{ClockRenderer, RenderHost};
pub use time::{Clock, SystemClock, TimeSample};

//! Clock face rendering onto a Braille canvas.
//!
//! The canvas is treated as a pixel surface: every Braille dot covers
//! `pixels_per_dot` virtual pixels in each direction, so the face geometry
//! keeps the same proportions it would have on a real screen. Shapes are
//! rasterised by sampling, which is also where stroke width and the active
//! clip circle are applied.

use std::f64::consts::TAU;

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols::Marker,
    text::Span,
    widgets::canvas::{Canvas, Context, Painter, Shape},
    Frame,
};

use crate::clock::{DrawCommand, PaintStyle, Point, TextBounds};
use crate::constants::surface;

use super::colors;

/// Size of one terminal cell on the virtual surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub width: f64,
    pub height: f64,
}

impl CellMetrics {
    pub fn new(pixels_per_dot: f64) -> Self {
        Self {
            width: f64::from(surface::DOTS_PER_CELL_X) * pixels_per_dot,
            height: f64::from(surface::DOTS_PER_CELL_Y) * pixels_per_dot,
        }
    }

    /// Virtual pixel size of a terminal area.
    pub fn surface_size(&self, area: Rect) -> (u32, u32) {
        (
            (f64::from(area.width) * self.width) as u32,
            (f64::from(area.height) * self.height) as u32,
        )
    }

    /// Glyph bounds of `text`: one cell per character, whatever the font size.
    pub fn measure(&self, text: &str) -> TextBounds {
        TextBounds {
            width: text.chars().count() as f64 * self.width,
            height: self.height,
        }
    }

    /// Sampling step: half a dot, so neighbouring samples never skip a dot.
    fn step(&self) -> f64 {
        self.width / f64::from(surface::DOTS_PER_CELL_X) / 2.0
    }
}

/// Circular clip region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRegion {
    pub center: Point,
    pub radius: f64,
}

impl ClipRegion {
    pub fn contains(&self, point: Point) -> bool {
        point.distance_to(self.center) <= self.radius
    }
}

/// Geometry of a shape before stroking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline {
    Ring { center: Point, radius: f64 },
    Disc { center: Point, radius: f64 },
    Segment { from: Point, to: Point },
}

/// Sample points covering `outline` stroked at `width`, spaced at most `step`.
pub fn outline_samples(outline: Outline, width: f64, step: f64) -> Vec<Point> {
    let offsets = cross_offsets(width, step);

    match outline {
        Outline::Ring { center, radius } => {
            let mut points = Vec::new();
            for offset in offsets {
                let r = radius + offset;
                if r <= 0.0 {
                    continue;
                }
                let count = ((TAU * r / step).ceil() as usize).max(8);
                points.extend(
                    (0..count).map(|i| center.polar(TAU * i as f64 / count as f64, r)),
                );
            }
            points
        }
        Outline::Disc { center, radius } => {
            let mut points = Vec::new();
            let span = (radius / step).floor() as i64;
            for i in -span..=span {
                for j in -span..=span {
                    let p = center.offset(i as f64 * step, j as f64 * step);
                    if p.distance_to(center) <= radius {
                        points.push(p);
                    }
                }
            }
            // Anything smaller than a sample still marks its center
            if points.is_empty() {
                points.push(center);
            }
            points
        }
        Outline::Segment { from, to } => {
            let length = from.distance_to(to);
            if length == 0.0 {
                return vec![from];
            }
            let (ux, uy) = ((to.x - from.x) / length, (to.y - from.y) / length);
            let count = ((length / step).ceil() as usize).max(1);
            let mut points = Vec::with_capacity((count + 1) * offsets.len());
            for offset in offsets {
                // Perpendicular to the segment
                let start = from.offset(-uy * offset, ux * offset);
                points.extend((0..=count).map(|i| {
                    let t = length * i as f64 / count as f64;
                    start.offset(ux * t, uy * t)
                }));
            }
            points
        }
    }
}

/// Offsets across a stroke of `width`, centered on zero.
fn cross_offsets(width: f64, step: f64) -> Vec<f64> {
    let half = width / 2.0;
    let count = (half / step).floor() as i64;
    (-count..=count).map(|i| i as f64 * step).collect()
}

/// A stroked or filled shape in surface coordinates.
struct FaceShape {
    points: Vec<Point>,
    color: Color,
    clip: Option<ClipRegion>,
    surface_height: f64,
}

impl Shape for FaceShape {
    fn draw(&self, painter: &mut Painter) {
        for point in &self.points {
            if self.clip.is_some_and(|clip| !clip.contains(*point)) {
                continue;
            }
            // Canvas y grows upwards, surface y grows downwards
            if let Some((x, y)) = painter.get_point(point.x, self.surface_height - point.y) {
                painter.paint(x, y, self.color);
            }
        }
    }
}

/// Paints drawing commands in order, honouring the clip they establish.
fn paint_commands(ctx: &mut Context, commands: &[DrawCommand], metrics: CellMetrics, height: f64) {
    let step = metrics.step();
    let mut clip: Option<ClipRegion> = None;

    for command in commands {
        let color = colors::paint_color(command.paint());
        let outline = match command {
            DrawCommand::ClipCircle { center, radius, .. } => {
                // The boundary itself is drawn before it starts clipping
                let outline = Outline::Ring {
                    center: *center,
                    radius: *radius,
                };
                ctx.draw(&FaceShape {
                    points: outline_samples(outline, command.paint().width, step),
                    color,
                    clip,
                    surface_height: height,
                });
                clip = Some(ClipRegion {
                    center: *center,
                    radius: *radius,
                });
                continue;
            }
            DrawCommand::Circle {
                center,
                radius,
                paint,
            } => match paint.style {
                PaintStyle::Stroke => Outline::Ring {
                    center: *center,
                    radius: *radius,
                },
                PaintStyle::Fill => Outline::Disc {
                    center: *center,
                    radius: *radius,
                },
            },
            DrawCommand::Line { from, to, .. } => Outline::Segment {
                from: *from,
                to: *to,
            },
            DrawCommand::Text { text, origin, .. } => {
                if clip.is_some_and(|clip| !clip.contains(*origin)) {
                    continue;
                }
                // Vertical middle of the glyph row
                let middle = origin.y - metrics.height / 2.0;
                ctx.print(
                    origin.x,
                    height - middle,
                    Span::styled(text.clone(), Style::default().fg(colors::INK).bold()),
                );
                continue;
            }
        };

        ctx.draw(&FaceShape {
            points: outline_samples(outline, command.paint().width, step),
            color,
            clip,
            surface_height: height,
        });
    }
}

/// Draws the clock face filling `area`.
pub fn draw_clock(frame: &mut Frame, area: Rect, commands: &[DrawCommand], metrics: CellMetrics) {
    let (width, height) = metrics.surface_size(area);
    let (width, height) = (f64::from(width), f64::from(height));

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(colors::PAPER)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| paint_commands(ctx, commands, metrics, height));

    frame.render_widget(canvas, area);
}

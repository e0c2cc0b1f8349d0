//! The clock renderer.
//!
//! Turns a layout and a time sample into the ordered list of drawing
//! commands for one frame, then asks the host for the next frame.

use std::time::Duration;

use log::{debug, trace};

use crate::constants::{face, stroke, REDRAW_DELAY};

use super::geometry::{numeral_placements, tick_positions, Hand, LayoutConstants, TextBounds};
use super::paint::{DrawCommand, Ink, Paint};
use super::time::TimeSample;

const CLIP_PAINT: Paint = Paint::stroke(Ink::Black, stroke::CLIP_WIDTH);
const FACE_PAINT: Paint = Paint::stroke(Ink::Black, stroke::FACE_WIDTH);
const FACE_SHADOW_PAINT: Paint =
    Paint::stroke(Ink::Black, stroke::FACE_SHADOW_WIDTH).blurred(stroke::FACE_SHADOW_BLUR);
const HIGHLIGHT_PAINT: Paint =
    Paint::stroke(Ink::White, stroke::HIGHLIGHT_WIDTH).blurred(stroke::HIGHLIGHT_BLUR);
const HAND_SHADOW_PAINT: Paint =
    Paint::stroke(Ink::Black, stroke::HAND_SHADOW_WIDTH).blurred(stroke::HAND_SHADOW_BLUR);
const NUMERAL_PAINT: Paint = Paint::stroke(Ink::Black, stroke::NUMERAL_WIDTH);
const TICK_PAINT: Paint = Paint::fill(Ink::Black);

/// What the renderer needs from the surface it draws on.
pub trait RenderHost {
    /// Glyph bounds of `text` at `font_size` device pixels.
    fn measure_text(&self, text: &str, font_size: f64) -> TextBounds;

    /// Requests another frame no earlier than `delay` from now.
    fn schedule_redraw(&mut self, delay: Duration);
}

/// Draws the analog clock face.
///
/// The layout is computed when the renderer is built and again on every
/// resize, so a frame never sees stale dimensions.
#[derive(Debug, Clone)]
pub struct ClockRenderer {
    layout: LayoutConstants,
    density: f64,
    redraw_delay: Duration,
}

impl ClockRenderer {
    /// Creates a renderer for a surface of the given pixel size.
    pub fn new(width: u32, height: u32, density: f64) -> Self {
        Self {
            layout: LayoutConstants::derive(width, height, density),
            density,
            redraw_delay: REDRAW_DELAY,
        }
    }

    /// Overrides the delay requested after each frame.
    pub fn with_redraw_delay(mut self, delay: Duration) -> Self {
        self.redraw_delay = delay;
        self
    }

    pub fn layout(&self) -> &LayoutConstants {
        &self.layout
    }

    /// Recomputes the layout for a new surface size.
    ///
    /// Does not request a frame; the host redraws after a resize on its own.
    /// Returns false if the size did not actually change.
    pub fn on_surface_resized(&mut self, width: u32, height: u32) -> bool {
        if self.layout.width == width && self.layout.height == height {
            return false;
        }
        self.layout = LayoutConstants::derive(width, height, self.density);
        debug!(
            "Surface resized to {}x{}, radius {}",
            width, height, self.layout.radius
        );
        true
    }

    /// Produces the drawing commands for one frame and schedules the next.
    ///
    /// A surface with no room for the face gets an empty frame, but the next
    /// redraw is still scheduled.
    pub fn render_frame<H>(&self, host: &mut H, time: &TimeSample) -> Vec<DrawCommand>
    where
        H: RenderHost + ?Sized,
    {
        let commands = if self.layout.is_degenerate() {
            debug!(
                "Skipping frame: radius {} on a {}x{} surface",
                self.layout.radius, self.layout.width, self.layout.height
            );
            Vec::new()
        } else {
            self.face_commands(&*host, time)
        };

        trace!(
            "Frame at {:02}:{:02}:{:02} with {} commands",
            time.hour,
            time.minute,
            time.second,
            commands.len()
        );

        host.schedule_redraw(self.redraw_delay);
        commands
    }

    fn face_commands<H>(&self, host: &H, time: &TimeSample) -> Vec<DrawCommand>
    where
        H: RenderHost + ?Sized,
    {
        let layout = &self.layout;
        let capacity = 4 + 2 * Hand::ALL.len() + 12 + face::TICK_COUNT as usize;
        let mut commands = Vec::with_capacity(capacity);

        // Clip boundary, face, shadow and highlight
        let center = layout.center;
        let clip_radius = layout.clip_radius();
        let rim_radius = layout.rim_radius();
        commands.push(DrawCommand::ClipCircle {
            center,
            radius: clip_radius,
            paint: CLIP_PAINT,
        });
        commands.push(DrawCommand::Circle {
            center,
            radius: clip_radius,
            paint: FACE_PAINT,
        });
        commands.push(DrawCommand::Circle {
            center: center.offset(face::SHADOW_OFFSET_X, 0.0),
            radius: rim_radius,
            paint: FACE_SHADOW_PAINT,
        });
        commands.push(DrawCommand::Circle {
            center: center.offset(face::HIGHLIGHT_OFFSET_X, 0.0),
            radius: rim_radius,
            paint: HIGHLIGHT_PAINT,
        });

        // Hands, each followed by its shadow
        for hand in Hand::ALL {
            let tip = hand.tip(layout, time);
            commands.push(DrawCommand::Line {
                from: center,
                to: tip,
                paint: hand_paint(hand),
            });
            commands.push(DrawCommand::Line {
                from: center.offset(0.0, face::HAND_SHADOW_OFFSET_Y),
                to: tip.offset(0.0, face::HAND_SHADOW_OFFSET_Y),
                paint: HAND_SHADOW_PAINT,
            });
        }

        // Numerals
        for placement in numeral_placements(layout) {
            let text = placement.label();
            let bounds = host.measure_text(&text, layout.font_size);
            commands.push(DrawCommand::Text {
                origin: placement.text_origin(bounds),
                text,
                font_size: layout.font_size,
                paint: NUMERAL_PAINT,
            });
        }

        // Tick dots
        commands.extend(tick_positions(layout).map(|center| DrawCommand::Circle {
            center,
            radius: face::TICK_DOT_RADIUS,
            paint: TICK_PAINT,
        }));

        commands
    }
}

fn hand_paint(hand: Hand) -> Paint {
    let width = match hand {
        Hand::Hour => stroke::HOUR_HAND_WIDTH,
        Hand::Minute => stroke::MINUTE_HAND_WIDTH,
        Hand::Second => stroke::SECOND_HAND_WIDTH,
    };
    Paint::stroke(Ink::Black, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::geometry::Point;
    use crate::clock::paint::PaintStyle;

    /// Host double: fixed-width glyphs, records every redraw request.
    #[derive(Default)]
    struct RecordingHost {
        scheduled: Vec<Duration>,
    }

    impl RenderHost for RecordingHost {
        fn measure_text(&self, text: &str, font_size: f64) -> TextBounds {
            TextBounds {
                width: text.len() as f64 * font_size / 2.0,
                height: font_size,
            }
        }

        fn schedule_redraw(&mut self, delay: Duration) {
            self.scheduled.push(delay);
        }
    }

    fn three_o_clock() -> TimeSample {
        TimeSample {
            hour: 3,
            minute: 0,
            second: 0,
        }
    }

    fn close(a: Point, b: Point) -> bool {
        a.distance_to(b) < 1e-9
    }

    #[test]
    fn test_frame_order_at_three_o_clock() {
        let renderer = ClockRenderer::new(400, 400, 1.0);
        let mut host = RecordingHost::default();

        let commands = renderer.render_frame(&mut host, &three_o_clock());

        assert_eq!(commands.len(), 4 + 6 + 12 + 60);

        match &commands[0] {
            DrawCommand::ClipCircle {
                center,
                radius,
                paint,
            } => {
                assert_eq!(*center, Point::new(200.0, 200.0));
                assert_eq!(*radius, 190.0);
                assert_eq!(*paint, CLIP_PAINT);
            }
            other => panic!("expected clip circle first, got {other:?}"),
        }

        // Hour hand points along position 15, toward the "3" numeral.
        match &commands[4] {
            DrawCommand::Line { from, to, paint } => {
                assert_eq!(*from, Point::new(200.0, 200.0));
                assert!(close(*to, Point::new(275.0, 200.0)));
                assert_eq!(paint.width, 10.0);
            }
            other => panic!("expected hour hand, got {other:?}"),
        }

        let tail = &commands[commands.len() - 60..];
        assert!(tail.iter().all(|cmd| matches!(
            cmd,
            DrawCommand::Circle { radius, paint, .. }
                if *radius == 5.0 && paint.style == PaintStyle::Fill
        )));
        // Nothing before the tail is a tick dot.
        assert!(!matches!(
            &commands[commands.len() - 61],
            DrawCommand::Circle { .. }
        ));
    }

    #[test]
    fn test_face_circles() {
        let renderer = ClockRenderer::new(400, 400, 1.0);
        let commands = renderer.render_frame(&mut RecordingHost::default(), &three_o_clock());

        assert_eq!(
            commands[1],
            DrawCommand::Circle {
                center: Point::new(200.0, 200.0),
                radius: 190.0,
                paint: FACE_PAINT,
            }
        );
        assert_eq!(
            commands[2],
            DrawCommand::Circle {
                center: Point::new(230.0, 200.0),
                radius: 210.0,
                paint: FACE_SHADOW_PAINT,
            }
        );
        assert_eq!(
            commands[3],
            DrawCommand::Circle {
                center: Point::new(220.0, 200.0),
                radius: 210.0,
                paint: HIGHLIGHT_PAINT,
            }
        );
        assert_eq!(FACE_SHADOW_PAINT.blur, Some(50.0));
        assert_eq!(HIGHLIGHT_PAINT.ink, Ink::White);
    }

    #[test]
    fn test_every_hand_is_followed_by_its_shadow() {
        let renderer = ClockRenderer::new(400, 400, 1.0);
        let time = TimeSample {
            hour: 10,
            minute: 10,
            second: 30,
        };
        let commands = renderer.render_frame(&mut RecordingHost::default(), &time);

        let widths = [10.0, 6.0, 3.0];
        for (i, hand) in Hand::ALL.iter().enumerate() {
            let (hand_from, hand_to, hand_paint) = match &commands[4 + i * 2] {
                DrawCommand::Line { from, to, paint } => (*from, *to, *paint),
                other => panic!("expected hand line, got {other:?}"),
            };
            assert_eq!(hand_paint.width, widths[i]);
            assert!(!hand_paint.is_blurred());
            assert!(close(hand_to, hand.tip(renderer.layout(), &time)));

            match &commands[5 + i * 2] {
                DrawCommand::Line { from, to, paint } => {
                    assert!(close(*from, hand_from.offset(0.0, 10.0)));
                    assert!(close(*to, hand_to.offset(0.0, 10.0)));
                    assert_eq!(*paint, HAND_SHADOW_PAINT);
                }
                other => panic!("expected hand shadow, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_numerals_are_centered_with_measured_bounds() {
        let renderer = ClockRenderer::new(400, 400, 2.0);
        let commands = renderer.render_frame(&mut RecordingHost::default(), &three_o_clock());

        let texts: Vec<_> = commands[10..22]
            .iter()
            .map(|cmd| match cmd {
                DrawCommand::Text {
                    text,
                    origin,
                    font_size,
                    ..
                } => (text.clone(), *origin, *font_size),
                other => panic!("expected numeral, got {other:?}"),
            })
            .collect();

        let labels: Vec<&str> = texts.iter().map(|(t, _, _)| t.as_str()).collect();
        assert_eq!(
            labels,
            ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]
        );

        // "3" at (325, 200); font 26 gives bounds 13 x 26.
        let (_, origin, font_size) = &texts[2];
        assert_eq!(*font_size, 26.0);
        assert!(close(*origin, Point::new(325.0 - 6.5, 200.0 + 13.0)));
    }

    #[test]
    fn test_exactly_one_redraw_per_frame() {
        let renderer = ClockRenderer::new(400, 400, 1.0);
        let mut host = RecordingHost::default();

        renderer.render_frame(&mut host, &three_o_clock());
        assert_eq!(host.scheduled, vec![Duration::from_millis(500)]);

        renderer.render_frame(&mut host, &three_o_clock());
        assert_eq!(host.scheduled.len(), 2);
    }

    #[test]
    fn test_degenerate_surface_draws_nothing_but_keeps_ticking() {
        let renderer = ClockRenderer::new(0, 0, 1.0);
        let mut host = RecordingHost::default();

        let commands = renderer.render_frame(&mut host, &three_o_clock());

        assert!(commands.is_empty());
        assert_eq!(host.scheduled, vec![REDRAW_DELAY]);
    }

    #[test]
    fn test_custom_redraw_delay() {
        let renderer =
            ClockRenderer::new(400, 400, 1.0).with_redraw_delay(Duration::from_millis(250));
        let mut host = RecordingHost::default();

        renderer.render_frame(&mut host, &three_o_clock());
        assert_eq!(host.scheduled, vec![Duration::from_millis(250)]);
    }

    #[test]
    fn test_resize_recomputes_layout() {
        let mut renderer = ClockRenderer::new(400, 400, 1.0);
        assert_eq!(renderer.layout().radius, 150);

        assert!(renderer.on_surface_resized(600, 300));
        assert_eq!(renderer.layout().radius, 100);
        assert_eq!(renderer.layout().center, Point::new(300.0, 150.0));

        assert!(!renderer.on_surface_resized(600, 300));
    }

    #[test]
    fn test_resize_does_not_schedule() {
        let mut renderer = ClockRenderer::new(400, 400, 1.0);
        let mut host = RecordingHost::default();

        renderer.on_surface_resized(10, 10);
        assert!(host.scheduled.is_empty());

        // Back to a usable size after being degenerate
        renderer.on_surface_resized(400, 400);
        assert_eq!(renderer.render_frame(&mut host, &three_o_clock()).len(), 82);
        assert_eq!(host.scheduled.len(), 1);
    }
}

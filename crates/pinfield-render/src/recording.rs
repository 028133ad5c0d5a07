//! A headless renderer that records draw commands.
//!
//! [`RecordingRenderer`] implements [`Renderer`] by appending one
//! [`DrawCommand`] per drawing call, with coordinates already mapped to
//! device space. It is used for tests and for inspecting what a widget
//! paints without a graphics backend.

use crate::paint::{Paint, Stroke};
use crate::renderer::{FrameStats, RenderStateStack, Renderer};
use crate::text::{Font, TextAlign};
use crate::types::{Color, Point, Rect, RoundedRect, Size};

/// A single recorded drawing operation, in device coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled rectangle.
    FillRect { rect: Rect, paint: Paint },
    /// A filled rounded rectangle.
    FillRoundedRect { rect: RoundedRect, paint: Paint },
    /// A stroked rectangle outline.
    StrokeRect { rect: Rect, stroke: Stroke },
    /// A line segment.
    Line { from: Point, to: Point, stroke: Stroke },
    /// A filled ellipse.
    FillEllipse {
        center: Point,
        radius_x: f32,
        radius_y: f32,
        paint: Paint,
    },
    /// A run of text positioned on its baseline.
    Text {
        text: String,
        origin: Point,
        size: f32,
        paint: Paint,
        align: TextAlign,
    },
}

impl DrawCommand {
    /// The solid color this command paints with, if any.
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::FillRect { paint, .. }
            | Self::FillRoundedRect { paint, .. }
            | Self::FillEllipse { paint, .. }
            | Self::Text { paint, .. } => paint.as_solid(),
            Self::StrokeRect { stroke, .. } | Self::Line { stroke, .. } => stroke.color(),
        }
    }
}

/// A [`Renderer`] that records every drawing call.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    state: RenderStateStack,
    commands: Vec<DrawCommand>,
    clear_color: Color,
    viewport_size: Size,
    in_frame: bool,
    frames: u32,
}

impl RecordingRenderer {
    /// Create an empty recording renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last [`begin_frame`](Renderer::begin_frame)
    /// or [`clear`](Self::clear).
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the list empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Discard recorded commands and reset the state stack.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.state.reset();
    }

    /// The clear color of the current (or last) frame.
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// The viewport size of the current (or last) frame.
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Whether a frame is in progress.
    pub fn in_frame(&self) -> bool {
        self.in_frame
    }

    /// Number of frames ended so far.
    pub fn frame_count(&self) -> u32 {
        self.frames
    }

    /// Current save/restore depth.
    pub fn state_depth(&self) -> usize {
        self.state.depth()
    }

    /// Recorded line segments.
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    /// Recorded filled ellipses.
    pub fn ellipses(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillEllipse { .. }))
    }

    /// Recorded text runs.
    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
    }

    fn record(&mut self, command: DrawCommand) {
        tracing::trace!(target: "pinfield_render", ?command, "record");
        self.commands.push(command);
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self, clear_color: Color, viewport_size: Size) {
        self.clear_color = clear_color;
        self.viewport_size = viewport_size;
        self.in_frame = true;
        self.state.reset();
        self.commands.clear();
    }

    fn end_frame(&mut self) -> FrameStats {
        self.in_frame = false;
        self.frames += 1;
        FrameStats {
            draw_calls: self.commands.len() as u32,
        }
    }

    fn save(&mut self) {
        self.state.save();
    }

    fn restore(&mut self) {
        self.state.restore();
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.state.translate(tx, ty);
    }

    fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        let rect = self.state.map_rect(rect);
        self.record(DrawCommand::FillRect {
            rect,
            paint: paint.into(),
        });
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, paint: impl Into<Paint>) {
        let rect = RoundedRect::with_radii(self.state.map_rect(rect.rect), rect.radii);
        self.record(DrawCommand::FillRoundedRect {
            rect,
            paint: paint.into(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        let rect = self.state.map_rect(rect);
        self.record(DrawCommand::StrokeRect {
            rect,
            stroke: *stroke,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let from = self.state.map_point(from);
        let to = self.state.map_point(to);
        self.record(DrawCommand::Line {
            from,
            to,
            stroke: *stroke,
        });
    }

    fn fill_ellipse(&mut self, center: Point, radius_x: f32, radius_y: f32, paint: impl Into<Paint>) {
        let center = self.state.map_point(center);
        self.record(DrawCommand::FillEllipse {
            center,
            radius_x,
            radius_y,
            paint: paint.into(),
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        font: &Font,
        paint: impl Into<Paint>,
        align: TextAlign,
    ) {
        let origin = self.state.map_point(origin);
        self.record(DrawCommand::Text {
            text: text.to_owned(),
            origin,
            size: font.size,
            paint: paint.into(),
            align,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FontMetrics;

    #[test]
    fn test_records_in_device_space() {
        let mut renderer = RecordingRenderer::new();
        renderer.begin_frame(Color::WHITE, Size::new(100.0, 50.0));
        renderer.save();
        renderer.translate(10.0, 5.0);
        renderer.fill_circle(Point::new(1.0, 1.0), 4.0, Color::BLACK);
        renderer.restore();
        renderer.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::RED);

        let commands = renderer.commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(
            commands[0],
            DrawCommand::FillEllipse {
                center: Point::new(11.0, 6.0),
                radius_x: 4.0,
                radius_y: 4.0,
                paint: Paint::Solid(Color::BLACK),
            }
        );
        assert_eq!(commands[1].color(), Some(Color::RED));
        assert_eq!(renderer.state_depth(), 0);
    }

    #[test]
    fn test_frame_lifecycle() {
        let mut renderer = RecordingRenderer::new();
        renderer.begin_frame(Color::BLACK, Size::new(10.0, 10.0));
        assert!(renderer.in_frame());
        renderer.draw_line(
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            &Stroke::new(Color::GRAY, 1.0),
        );
        let stats = renderer.end_frame();
        assert_eq!(stats.draw_calls, 1);
        assert!(!renderer.in_frame());
        assert_eq!(renderer.frame_count(), 1);
        assert_eq!(renderer.lines().count(), 1);

        // A new frame discards the previous commands
        renderer.begin_frame(Color::BLACK, Size::new(10.0, 10.0));
        assert!(renderer.commands().is_empty());
    }

    #[test]
    fn test_records_text() {
        let mut renderer = RecordingRenderer::new();
        let font = Font::new(FontMetrics::DEFAULT_SANS, 24.0);
        renderer.draw_text("7", Point::new(5.0, 20.0), &font, Color::BLUE, TextAlign::Center);

        let texts: Vec<_> = renderer.take_commands();
        assert_eq!(
            texts,
            vec![DrawCommand::Text {
                text: "7".to_owned(),
                origin: Point::new(5.0, 20.0),
                size: 24.0,
                paint: Paint::Solid(Color::BLUE),
                align: TextAlign::Center,
            }]
        );
        assert!(renderer.commands().is_empty());
    }
}

//! The drawing interface widgets paint through.
//!
//! Backends implement [`Renderer`]. The crate ships
//! [`RecordingRenderer`](crate::RecordingRenderer), which keeps the calls
//! as data instead of rasterizing them.

use glam::Vec2;

use crate::paint::{Paint, Stroke};
use crate::text::{Font, TextAlign};
use crate::types::{Color, Point, Rect, RoundedRect, Size};

/// Counters reported by [`Renderer::end_frame`].
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    pub draw_calls: u32,
}

/// Immediate-mode 2D drawing.
///
/// A frame is bracketed by [`begin_frame`](Self::begin_frame) and
/// [`end_frame`](Self::end_frame):
///
/// ```ignore
/// renderer.begin_frame(Color::WHITE, viewport);
/// renderer.save();
/// renderer.translate(10.0, 10.0);
/// renderer.fill_rect(rect, Color::RED);
/// renderer.restore();
/// let stats = renderer.end_frame();
/// ```
///
/// Coordinates are relative to the accumulated translation, which
/// [`save`](Self::save) and [`restore`](Self::restore) push and pop.
pub trait Renderer {
    fn begin_frame(&mut self, clear_color: Color, viewport_size: Size);

    fn end_frame(&mut self) -> FrameStats;

    fn save(&mut self);

    /// Pop back to the last [`save`](Self::save). Unbalanced calls are ignored.
    fn restore(&mut self);

    fn translate(&mut self, tx: f32, ty: f32);

    fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>);

    fn fill_rounded_rect(&mut self, rect: RoundedRect, paint: impl Into<Paint>);

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    fn fill_ellipse(&mut self, center: Point, radius_x: f32, radius_y: f32, paint: impl Into<Paint>);

    #[inline]
    fn fill_circle(&mut self, center: Point, radius: f32, paint: impl Into<Paint>) {
        self.fill_ellipse(center, radius, radius, paint);
    }

    /// Draw one line of text with its baseline at `origin.y`. How `origin.x`
    /// relates to the run depends on `align`.
    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        font: &Font,
        paint: impl Into<Paint>,
        align: TextAlign,
    );
}

/// Translation bookkeeping shared by renderer implementations.
#[derive(Debug, Clone, Default)]
pub struct RenderStateStack {
    saved: Vec<Vec2>,
    translation: Vec2,
}

impl RenderStateStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The offset from local to device coordinates.
    #[inline]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    pub fn save(&mut self) {
        self.saved.push(self.translation);
    }

    pub fn restore(&mut self) {
        if let Some(translation) = self.saved.pop() {
            self.translation = translation;
        }
    }

    /// Back to the identity with nothing saved.
    pub fn reset(&mut self) {
        self.saved.clear();
        self.translation = Vec2::ZERO;
    }

    #[inline]
    pub fn translate(&mut self, tx: f32, ty: f32) {
        self.translation += Vec2::new(tx, ty);
    }

    /// Local point to device space.
    #[inline]
    pub fn map_point(&self, point: Point) -> Point {
        Point::from_vec2(point.to_vec2() + self.translation)
    }

    /// Local rectangle to device space.
    #[inline]
    pub fn map_rect(&self, rect: Rect) -> Rect {
        rect.offset(self.translation.x, self.translation.y)
    }

    /// Number of unmatched saves.
    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_restore_nests_translations() {
        let mut stack = RenderStateStack::new();

        stack.translate(10.0, 20.0);
        stack.save();
        stack.translate(5.0, 5.0);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.map_point(Point::ZERO), Point::new(15.0, 25.0));

        stack.restore();
        assert_eq!(stack.map_point(Point::ZERO), Point::new(10.0, 20.0));

        stack.restore();
        assert_eq!(stack.translation(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn map_rect_then_reset() {
        let mut stack = RenderStateStack::new();
        stack.translate(3.0, 4.0);
        assert_eq!(
            stack.map_rect(Rect::new(1.0, 1.0, 10.0, 10.0)),
            Rect::new(4.0, 5.0, 10.0, 10.0)
        );

        stack.save();
        stack.reset();
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.translation(), Vec2::ZERO);
    }
}

//! Repaint bookkeeping and frame rendering.
//!
//! Widgets never paint themselves synchronously. Mutations call
//! [`Widget::update`], which sets a dirty flag; the host later calls
//! [`FrameRenderer::render_widget`] (or [`FrameRenderer::render_frame`]) and
//! only dirty, visible widgets are painted.

use pinfield_core::PerfSpan;
use pinfield_core::logging::targets;
use pinfield_render::{Color, Rect, Renderer, Size};

use super::traits::{PaintContext, Widget};

/// Result of rendering a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaintStats {
    /// Number of widgets painted.
    pub widgets_painted: u32,
    /// Number of widgets skipped (hidden or not dirty).
    pub widgets_skipped: u32,
    /// Draw calls reported by the renderer at the end of the frame.
    pub draw_calls: u32,
}

/// Paints widgets with dirty-flag handling.
///
/// # Example
///
/// ```ignore
/// let mut renderer = RecordingRenderer::new();
/// let stats = FrameRenderer::render_frame(&mut field, &mut renderer, Color::WHITE);
/// assert_eq!(stats.widgets_painted, 1);
/// ```
pub struct FrameRenderer;

impl FrameRenderer {
    /// Render a full frame containing `widget`.
    ///
    /// The viewport covers the widget's geometry in parent coordinates.
    pub fn render_frame<W: Widget, R: Renderer>(
        widget: &mut W,
        renderer: &mut R,
        clear_color: Color,
    ) -> PaintStats {
        let geometry = widget.geometry();
        renderer.begin_frame(
            clear_color,
            Size::new(geometry.right(), geometry.bottom()),
        );

        let mut stats = PaintStats::default();
        Self::paint_widget(widget, renderer, &mut stats);

        stats.draw_calls = renderer.end_frame().draw_calls;
        stats
    }

    /// Paint `widget` into an already started frame if it needs repainting.
    ///
    /// Returns `true` if the widget was painted.
    pub fn render_widget<W: Widget, R: Renderer>(widget: &mut W, renderer: &mut R) -> bool {
        let mut stats = PaintStats::default();
        Self::paint_widget(widget, renderer, &mut stats);
        stats.widgets_painted > 0
    }

    fn paint_widget<W: Widget, R: Renderer>(
        widget: &mut W,
        renderer: &mut R,
        stats: &mut PaintStats,
    ) {
        if !widget.is_visible() || !widget.needs_repaint() {
            stats.widgets_skipped += 1;
            return;
        }

        let _span = PerfSpan::new("paint_widget");
        let geometry = widget.geometry();
        let local_rect = Rect::new(0.0, 0.0, geometry.width(), geometry.height());

        renderer.save();
        renderer.translate(geometry.origin.x, geometry.origin.y);
        {
            let mut ctx = PaintContext::new(renderer, local_rect);
            widget.paint(&mut ctx);
        }
        renderer.restore();

        widget.widget_base_mut().clear_repaint_flag();
        stats.widgets_painted += 1;

        tracing::trace!(
            target: targets::PAINT,
            x = geometry.origin.x,
            y = geometry.origin.y,
            width = geometry.width(),
            height = geometry.height(),
            "painted widget"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{SizeHint, WidgetBase};
    use pinfield_render::{DrawCommand, RecordingRenderer};

    struct Swatch {
        base: WidgetBase,
        color: Color,
    }

    impl Swatch {
        fn new(color: Color) -> Self {
            Self {
                base: WidgetBase::new(),
                color,
            }
        }
    }

    impl Widget for Swatch {
        fn widget_base(&self) -> &WidgetBase {
            &self.base
        }

        fn widget_base_mut(&mut self) -> &mut WidgetBase {
            &mut self.base
        }

        fn size_hint(&self) -> SizeHint {
            SizeHint::from_dimensions(10.0, 10.0)
        }

        fn paint<R: Renderer>(&self, ctx: &mut PaintContext<'_, R>) {
            let rect = ctx.rect();
            ctx.renderer().fill_rect(rect, self.color);
        }
    }

    #[test]
    fn test_paint_translates_to_widget_position() {
        let mut swatch = Swatch::new(Color::RED);
        swatch.set_geometry(Rect::new(5.0, 7.0, 10.0, 10.0));

        let mut renderer = RecordingRenderer::new();
        let stats = FrameRenderer::render_frame(&mut swatch, &mut renderer, Color::WHITE);

        assert_eq!(stats.widgets_painted, 1);
        assert_eq!(stats.draw_calls, 1);
        assert_eq!(renderer.state_depth(), 0);
        match &renderer.commands()[0] {
            DrawCommand::FillRect { rect, .. } => {
                assert_eq!(*rect, Rect::new(5.0, 7.0, 10.0, 10.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_clean_widget_is_skipped() {
        let mut swatch = Swatch::new(Color::BLUE);
        swatch.set_size(Size::new(4.0, 4.0));

        let mut renderer = RecordingRenderer::new();
        FrameRenderer::render_frame(&mut swatch, &mut renderer, Color::WHITE);
        assert!(!swatch.needs_repaint());

        let stats = FrameRenderer::render_frame(&mut swatch, &mut renderer, Color::WHITE);
        assert_eq!(stats.widgets_painted, 0);
        assert_eq!(stats.widgets_skipped, 1);
        assert!(renderer.commands().is_empty());

        swatch.update();
        let stats = FrameRenderer::render_frame(&mut swatch, &mut renderer, Color::WHITE);
        assert_eq!(stats.widgets_painted, 1);
    }

    #[test]
    fn test_hidden_widget_is_skipped() {
        let mut swatch = Swatch::new(Color::GREEN);
        swatch.set_visible(false);

        let mut renderer = RecordingRenderer::new();
        renderer.begin_frame(Color::WHITE, Size::new(10.0, 10.0));
        assert!(!FrameRenderer::render_widget(&mut swatch, &mut renderer));
        assert!(swatch.needs_repaint());
    }
}

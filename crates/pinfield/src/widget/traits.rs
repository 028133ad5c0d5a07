//! The widget trait and the context it paints through.

use pinfield_render::{Point, Rect, Renderer, Size};

use super::base::WidgetBase;
use super::events::WidgetEvent;
use super::geometry::SizeHint;

/// A renderer paired with the local bounds of the widget being painted.
///
/// The renderer has already been translated to the widget's origin, so
/// [`rect`](Self::rect) always starts at (0, 0).
pub struct PaintContext<'a, R: Renderer> {
    renderer: &'a mut R,
    bounds: Rect,
}

impl<'a, R: Renderer> PaintContext<'a, R> {
    pub fn new(renderer: &'a mut R, bounds: Rect) -> Self {
        Self { renderer, bounds }
    }

    #[inline]
    pub fn renderer(&mut self) -> &mut R {
        self.renderer
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.bounds.size
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bounds.height()
    }
}

/// Something that occupies a rectangle, paints itself and reacts to events.
///
/// Only [`widget_base`](Self::widget_base),
/// [`widget_base_mut`](Self::widget_base_mut), [`size_hint`](Self::size_hint)
/// and [`paint`](Self::paint) are required. Widgets whose layout depends on
/// their bounds override [`set_geometry`](Self::set_geometry); `set_pos` and
/// `set_size` go through it.
///
/// `paint` is generic over the renderer, so widgets are used by concrete
/// type rather than as trait objects.
pub trait Widget: Send + Sync {
    fn widget_base(&self) -> &WidgetBase;

    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Preferred size and bounds for the host's layout.
    fn size_hint(&self) -> SizeHint;

    /// Draw the widget in local coordinates. Painting reads state only; it
    /// must not change what the next paint would draw.
    fn paint<R: Renderer>(&self, ctx: &mut PaintContext<'_, R>);

    /// Handle an event, returning `true` if it was consumed.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    fn pos(&self) -> Point {
        self.widget_base().pos()
    }

    fn set_pos(&mut self, pos: Point) {
        let size = self.size();
        self.set_geometry(Rect { origin: pos, size });
    }

    fn size(&self) -> Size {
        self.widget_base().size()
    }

    fn set_size(&mut self, size: Size) {
        let origin = self.pos();
        self.set_geometry(Rect { origin, size });
    }

    /// Bounds at the local origin.
    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    fn has_focus(&self) -> bool {
        self.widget_base().has_focus()
    }

    /// Mark the widget dirty; it is painted on the next frame.
    fn update(&mut self) {
        self.widget_base_mut().update();
    }

    fn needs_repaint(&self) -> bool {
        self.widget_base().needs_repaint()
    }
}

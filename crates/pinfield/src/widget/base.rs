//! State shared by every widget.

use pinfield_core::Signal;
use pinfield_render::{Point, Rect, Size};

use super::geometry::{SizePolicy, SizePolicyPair};

/// Bounds, flags and repaint state common to all widgets.
///
/// A widget embeds one `WidgetBase` and hands it out through
/// [`Widget::widget_base`](super::Widget::widget_base); the trait's default
/// methods forward here.
pub struct WidgetBase {
    /// Bounds in parent coordinates.
    geometry: Rect,
    size_policy: SizePolicyPair,
    visible: bool,
    enabled: bool,
    focusable: bool,
    focused: bool,
    /// Set by every visible change, cleared by the frame renderer.
    dirty: bool,

    /// Emitted with the new bounds after they change.
    pub geometry_changed: Signal<Rect>,
    /// Emitted after the visible flag flips.
    pub visible_changed: Signal<bool>,
    /// Emitted after the enabled flag flips.
    pub enabled_changed: Signal<bool>,
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetBase {
    /// A visible, enabled, non-focusable base with empty bounds.
    ///
    /// New widgets start dirty so their first frame paints them.
    pub fn new() -> Self {
        Self {
            geometry: Rect::ZERO,
            size_policy: SizePolicyPair::default(),
            visible: true,
            enabled: true,
            focusable: false,
            focused: false,
            dirty: true,
            geometry_changed: Signal::new(),
            visible_changed: Signal::new(),
            enabled_changed: Signal::new(),
        }
    }

    // -- bounds --------------------------------------------------------------

    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Move and resize in one step. Returns `false` if `rect` equals the
    /// current bounds, in which case nothing is emitted.
    pub fn set_geometry(&mut self, rect: Rect) -> bool {
        if rect == self.geometry {
            return false;
        }
        self.geometry = rect;
        self.dirty = true;
        self.geometry_changed.emit(rect);
        true
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.geometry.width()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.geometry.height()
    }

    /// The bounds translated to the widget's own origin.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self.geometry.size,
        }
    }

    /// Whether `point`, in local coordinates, falls inside the widget.
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect().contains(point)
    }

    // -- layout --------------------------------------------------------------

    #[inline]
    pub fn size_policy(&self) -> SizePolicyPair {
        self.size_policy
    }

    pub fn set_size_policy(&mut self, policy: SizePolicyPair) {
        self.size_policy = policy;
    }

    pub fn set_horizontal_policy(&mut self, policy: SizePolicy) {
        self.size_policy.horizontal = policy;
    }

    pub fn set_vertical_policy(&mut self, policy: SizePolicy) {
        self.size_policy.vertical = policy;
    }

    // -- flags ---------------------------------------------------------------

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        self.dirty = true;
        self.visible_changed.emit(visible);
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabled widgets keep their focus flag but stop accepting focus.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        self.dirty = true;
        self.enabled_changed.emit(enabled);
    }

    /// Whether focus may move here right now: the widget must be focusable,
    /// enabled and visible.
    #[inline]
    pub fn is_focusable(&self) -> bool {
        self.focusable && self.enabled && self.visible
    }

    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    #[inline]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Record a focus transition delivered by a focus event.
    pub(crate) fn set_focused(&mut self, focused: bool) -> bool {
        if self.focused == focused {
            return false;
        }
        self.focused = focused;
        self.dirty = true;
        true
    }

    // -- repaint -------------------------------------------------------------

    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.dirty
    }

    /// Schedule a repaint for the next frame.
    pub fn update(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn clear_repaint_flag(&mut self) {
        self.dirty = false;
    }
}

static_assertions::assert_impl_all!(WidgetBase: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn new_base_is_dirty_and_unfocusable() {
        let base = WidgetBase::new();
        assert!(base.needs_repaint());
        assert!(base.is_visible());
        assert!(base.is_enabled());
        assert!(!base.is_focusable());
        assert_eq!(base.geometry(), Rect::ZERO);
    }

    #[test]
    fn set_geometry_emits_only_on_change() {
        let mut base = WidgetBase::new();
        let emitted = Arc::new(AtomicUsize::new(0));
        let emitted_clone = emitted.clone();
        base.geometry_changed.connect(move |_| {
            emitted_clone.fetch_add(1, Ordering::SeqCst);
        });

        let rect = Rect::new(10.0, 5.0, 80.0, 40.0);
        assert!(base.set_geometry(rect));
        assert!(!base.set_geometry(rect));
        assert_eq!(emitted.load(Ordering::SeqCst), 1);

        assert_eq!(base.pos(), Point::new(10.0, 5.0));
        assert_eq!(base.rect(), Rect::new(0.0, 0.0, 80.0, 40.0));
        assert!(base.contains_point(Point::new(79.0, 39.0)));
        assert!(!base.contains_point(Point::new(80.0, 10.0)));
    }

    #[test]
    fn focusable_requires_enabled_and_visible() {
        let mut base = WidgetBase::new();
        base.set_focusable(true);
        assert!(base.is_focusable());

        base.set_enabled(false);
        assert!(!base.is_focusable());
        base.set_enabled(true);

        base.set_visible(false);
        assert!(!base.is_focusable());
    }

    #[test]
    fn focus_transition_marks_dirty() {
        let mut base = WidgetBase::new();
        base.clear_repaint_flag();

        assert!(base.set_focused(true));
        assert!(base.needs_repaint());
        base.clear_repaint_flag();

        assert!(!base.set_focused(true));
        assert!(!base.needs_repaint());
    }
}

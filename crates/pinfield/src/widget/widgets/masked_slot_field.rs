//! Masked slot field widget.
//!
//! A PIN or password entry field split into a fixed number of character
//! slots. Each entered character is drawn in its own slot, either as a
//! filled dot or, in reveal mode, as the character itself. The field paints
//! a rounded border that takes a different color while focused and a
//! vertical divider line between adjacent slots.
//!
//! # Example
//!
//! ```
//! use pinfield::prelude::*;
//!
//! let mut field = MaskedSlotField::with_attributes("slot-count: 4; border-width: 2px").unwrap();
//! field.set_size(Size::new(200.0, 48.0));
//! field.set_text("12");
//!
//! let mut renderer = RecordingRenderer::new();
//! FrameRenderer::render_frame(&mut field, &mut renderer, Color::WHITE);
//! assert_eq!(renderer.ellipses().count(), 2);
//! ```
//!
//! # Signals
//!
//! - `text_changed(String)`: emitted after every edit
//! - `input_completed(String)`: emitted when the last slot is filled
//! - `focus_changed(bool)`: emitted when keyboard focus is gained or lost

use pinfield_core::logging::targets;
use pinfield_core::{Property, ReadOnlyProperty, Signal};
use pinfield_render::{
    Color, Font, LineCap, Paint, Point, Rect, Renderer, RoundedRect, Size, Stroke, TextAlign,
};
use pinfield_style::attributes::{Attribute, AttributeSet};
use pinfield_style::parser::parse_attributes;
use pinfield_style::resolve::{SlotFieldStyle, validate_dimension, validate_slot_count};
use pinfield_style::theme::Theme;

use crate::error::SlotFieldResult;
use crate::widget::{
    EditAction, PaintContext, SizeHint, SizePolicy, TextEdit, Widget, WidgetBase, WidgetEvent,
};

/// Preferred edge length of one slot.
const PREFERRED_SLOT_EXTENT: f32 = 48.0;

/// Stroke width of the divider lines.
const DIVIDER_WIDTH: f32 = 1.0;

// =========================================================================
// Geometry
// =========================================================================

/// The two nested rounded rectangles a slot field paints, in local
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlotGeometry {
    /// The full widget bounds, filled with the border color.
    pub outer: RoundedRect,
    /// The content area, inset from `outer` by the border width.
    pub inner: RoundedRect,
}

impl SlotGeometry {
    /// Compute the geometry for a widget of `size`.
    ///
    /// When the border is wider than half the widget, the inner rect
    /// collapses to an empty rect at the center.
    pub fn compute(size: Size, border_width: f32, border_radius: f32) -> Self {
        let outer = Rect::new(0.0, 0.0, size.width, size.height);
        let inner = outer.deflate(border_width);
        Self {
            outer: RoundedRect::new(outer, border_radius),
            inner: RoundedRect::new(inner, border_radius),
        }
    }

    /// Width of the widget.
    #[inline]
    pub fn width(&self) -> f32 {
        self.outer.rect.width()
    }

    /// Height of the widget.
    #[inline]
    pub fn height(&self) -> f32 {
        self.outer.rect.height()
    }

    /// X coordinate of the divider on the left edge of slot `index`.
    pub fn divider_x(&self, index: u32, slot_count: u32) -> f32 {
        self.width() * index as f32 / slot_count as f32
    }

    /// Center of slot `index`.
    pub fn slot_center(&self, index: u32, slot_count: u32) -> Point {
        let slots = slot_count as f32;
        let x = self.width() * index as f32 / slots + self.width() / (2.0 * slots);
        Point::new(x, self.height() / 2.0)
    }
}

// =========================================================================
// Paints
// =========================================================================

/// Paints for one focus state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePaints {
    /// Fill of the outer rounded rect.
    pub border: Paint,
    /// Stroke of the divider lines.
    pub divider: Stroke,
    /// Dot fill and revealed-text color, with the glyph stroke width.
    pub glyph: Stroke,
}

impl FramePaints {
    /// Paints used while the field does not have focus.
    pub fn normal(style: &SlotFieldStyle) -> Self {
        Self::build(style.border_color, style.divider_color, style)
    }

    /// Paints used while the field has focus.
    pub fn focused(style: &SlotFieldStyle) -> Self {
        Self::build(style.border_color_focus, style.divider_color_focus, style)
    }

    fn build(border: Color, divider: Color, style: &SlotFieldStyle) -> Self {
        Self {
            border: Paint::solid(border),
            divider: Stroke::new(divider, DIVIDER_WIDTH).with_cap(LineCap::Butt),
            glyph: Stroke::new(style.glyph_color, style.glyph_width),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PaintSet {
    normal: FramePaints,
    focused: FramePaints,
}

impl PaintSet {
    fn new(style: &SlotFieldStyle) -> Self {
        Self {
            normal: FramePaints::normal(style),
            focused: FramePaints::focused(style),
        }
    }

    fn select(&self, focused: bool) -> &FramePaints {
        if focused { &self.focused } else { &self.normal }
    }
}

// =========================================================================
// Widget
// =========================================================================

/// A masked PIN/password field with one slot per character.
pub struct MaskedSlotField {
    base: WidgetBase,
    editor: TextEdit,
    style: SlotFieldStyle,
    paints: PaintSet,
    geometry: SlotGeometry,
    /// Grapheme count of the editor text, refreshed on every text change.
    text_length: usize,
    display_password: Property<bool>,

    /// Signal emitted when the text changes.
    pub text_changed: Signal<String>,

    /// Signal emitted when the entered length reaches the slot count.
    pub input_completed: Signal<String>,

    /// Signal emitted when focus is gained (`true`) or lost (`false`).
    pub focus_changed: Signal<bool>,
}

impl MaskedSlotField {
    /// Create a field from declared attributes over a theme's defaults.
    pub fn new(attrs: &AttributeSet, theme: &Theme) -> SlotFieldResult<Self> {
        let style = SlotFieldStyle::resolve(attrs, &theme.field)?;
        Self::with_style(style)
    }

    /// Create a field from a declaration block over the light theme.
    ///
    /// Malformed declarations are skipped; out-of-range values fail.
    pub fn with_attributes(css: &str) -> SlotFieldResult<Self> {
        let attrs = parse_attributes(css)?;
        Self::new(&attrs, &Theme::default())
    }

    /// Create a field from an already resolved style.
    pub fn with_style(style: SlotFieldStyle) -> SlotFieldResult<Self> {
        style.validate()?;

        let mut base = WidgetBase::new();
        base.set_focusable(true);
        base.set_horizontal_policy(SizePolicy::Expanding);
        base.set_vertical_policy(SizePolicy::Fixed);

        tracing::debug!(
            target: targets::WIDGET,
            slot_count = style.slot_count,
            display_password = style.display_password,
            "created masked slot field"
        );

        Ok(Self {
            base,
            editor: TextEdit::new().with_max_length(style.slot_count as usize),
            paints: PaintSet::new(&style),
            geometry: SlotGeometry::compute(Size::ZERO, style.border_width, style.border_radius),
            text_length: 0,
            display_password: Property::new(style.display_password),
            style,
            text_changed: Signal::new(),
            input_completed: Signal::new(),
            focus_changed: Signal::new(),
        })
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Get the entered text.
    pub fn text(&self) -> &str {
        self.editor.text()
    }

    /// Replace the entered text. Characters beyond the slot count are
    /// dropped.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let was_complete = self.is_complete();
        if self.editor.set_text(text) {
            self.handle_text_changed(was_complete);
        }
    }

    /// Set text using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Number of entered characters.
    pub fn text_length(&self) -> usize {
        self.text_length
    }

    /// Check if every slot is filled.
    pub fn is_complete(&self) -> bool {
        self.text_length >= self.style.slot_count as usize
    }

    /// Clear all entered text. Always schedules a repaint, even when the
    /// field was already empty.
    pub fn clean_input(&mut self) {
        let was_complete = self.is_complete();
        if self.editor.clear() {
            self.handle_text_changed(was_complete);
        }
        self.base.update();
    }

    /// The embedded editing buffer.
    pub fn editor(&self) -> &TextEdit {
        &self.editor
    }

    // =========================================================================
    // Reveal Mode
    // =========================================================================

    /// Check if characters are revealed instead of masked.
    pub fn is_display_password(&self) -> bool {
        self.display_password.get()
    }

    /// Reveal (`true`) or mask (`false`) the entered characters.
    pub fn set_display_password(&mut self, reveal: bool) {
        if self.display_password.set(reveal) {
            self.style.display_password = reveal;
            tracing::debug!(target: targets::WIDGET, reveal, "display password changed");
            self.base.update();
        }
    }

    /// Set reveal mode using builder pattern.
    pub fn with_display_password(mut self, reveal: bool) -> Self {
        self.set_display_password(reveal);
        self
    }

    /// Read-only view of the reveal flag.
    pub fn display_password_property(&self) -> ReadOnlyProperty<'_, bool> {
        self.display_password.read_only()
    }

    // =========================================================================
    // Style
    // =========================================================================

    /// The current style.
    pub fn style(&self) -> &SlotFieldStyle {
        &self.style
    }

    /// The geometry computed for the current size.
    pub fn slot_geometry(&self) -> &SlotGeometry {
        &self.geometry
    }

    /// The paints for the current focus state.
    pub fn frame_paints(&self) -> &FramePaints {
        self.paints.select(self.base.has_focus())
    }

    /// Get the number of slots.
    pub fn slot_count(&self) -> u32 {
        self.style.slot_count
    }

    /// Set the number of slots.
    ///
    /// Fails for zero and leaves the field unchanged. Text beyond the new
    /// slot count is dropped. Shrinking to or below the entered length
    /// fills the field and emits `input_completed`.
    pub fn set_slot_count(&mut self, slot_count: u32) -> SlotFieldResult<()> {
        validate_slot_count(slot_count)?;
        if self.style.slot_count == slot_count {
            return Ok(());
        }

        let was_complete = self.is_complete();
        self.style.slot_count = slot_count;
        if self.editor.set_max_length(Some(slot_count as usize)) {
            self.handle_text_changed(was_complete);
        } else {
            self.emit_if_completed(was_complete);
        }
        self.base.update();
        Ok(())
    }

    /// Set the unfocused border color.
    pub fn set_border_color(&mut self, color: Color) {
        self.style.border_color = color;
        self.refresh_paints();
    }

    /// Set border color using builder pattern.
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.set_border_color(color);
        self
    }

    /// Set the focused border color.
    pub fn set_border_color_focus(&mut self, color: Color) {
        self.style.border_color_focus = color;
        self.refresh_paints();
    }

    /// Set focused border color using builder pattern.
    pub fn with_border_color_focus(mut self, color: Color) -> Self {
        self.set_border_color_focus(color);
        self
    }

    /// Set the unfocused divider color.
    pub fn set_divider_color(&mut self, color: Color) {
        self.style.divider_color = color;
        self.refresh_paints();
    }

    /// Set the focused divider color.
    pub fn set_divider_color_focus(&mut self, color: Color) {
        self.style.divider_color_focus = color;
        self.refresh_paints();
    }

    /// Set the dot and revealed-text color.
    pub fn set_glyph_color(&mut self, color: Color) {
        self.style.glyph_color = color;
        self.refresh_paints();
    }

    /// Set glyph color using builder pattern.
    pub fn with_glyph_color(mut self, color: Color) -> Self {
        self.set_glyph_color(color);
        self
    }

    /// Set the inner content area color.
    pub fn set_background_color(&mut self, color: Color) {
        self.style.background_color = color;
        self.base.update();
    }

    /// Set background color using builder pattern.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.set_background_color(color);
        self
    }

    /// Set the border width. The inner rect is re-inset immediately.
    pub fn set_border_width(&mut self, width: f32) -> SlotFieldResult<()> {
        validate_dimension(Attribute::BorderWidth, width)?;
        self.style.border_width = width;
        self.recompute_geometry();
        Ok(())
    }

    /// Set the corner radius of both rounded rects.
    pub fn set_border_radius(&mut self, radius: f32) -> SlotFieldResult<()> {
        validate_dimension(Attribute::BorderRadius, radius)?;
        self.style.border_radius = radius;
        self.recompute_geometry();
        Ok(())
    }

    /// Set the glyph stroke width.
    pub fn set_glyph_width(&mut self, width: f32) -> SlotFieldResult<()> {
        validate_dimension(Attribute::GlyphWidth, width)?;
        self.style.glyph_width = width;
        self.refresh_paints();
        Ok(())
    }

    /// Set the dot radius used in masked mode.
    pub fn set_glyph_radius(&mut self, radius: f32) -> SlotFieldResult<()> {
        validate_dimension(Attribute::GlyphRadius, radius)?;
        self.style.glyph_radius = radius;
        self.base.update();
        Ok(())
    }

    /// Set the text size used in reveal mode.
    pub fn set_glyph_size(&mut self, size: f32) -> SlotFieldResult<()> {
        validate_dimension(Attribute::GlyphSize, size)?;
        self.style.glyph_size = size;
        self.base.update();
        Ok(())
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn refresh_paints(&mut self) {
        self.paints = PaintSet::new(&self.style);
        self.base.update();
    }

    fn recompute_geometry(&mut self) {
        self.geometry = SlotGeometry::compute(
            self.base.size(),
            self.style.border_width,
            self.style.border_radius,
        );
        tracing::debug!(
            target: targets::WIDGET,
            width = self.geometry.width(),
            height = self.geometry.height(),
            inner_width = self.geometry.inner.rect.width(),
            inner_height = self.geometry.inner.rect.height(),
            "recomputed slot geometry"
        );
        self.base.update();
    }

    /// `was_complete` is sampled before the edit or slot count change.
    fn handle_text_changed(&mut self, was_complete: bool) {
        self.text_length = self.editor.text_length();
        self.base.update();

        tracing::trace!(target: targets::WIDGET, length = self.text_length, "text changed");
        self.text_changed.emit(self.editor.text().to_owned());
        self.emit_if_completed(was_complete);
    }

    fn emit_if_completed(&self, was_complete: bool) {
        if self.is_complete() && !was_complete {
            tracing::debug!(target: targets::WIDGET, "all slots filled");
            self.input_completed.emit(self.editor.text().to_owned());
        }
    }

    fn set_focus_state(&mut self, focused: bool) {
        if self.base.set_focused(focused) {
            tracing::debug!(target: targets::WIDGET, focused, "focus changed");
            self.focus_changed.emit(focused);
        }
    }
}

impl Widget for MaskedSlotField {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let min_height = 2.0 * self.style.border_width + 2.0 * self.style.glyph_radius;
        SizeHint::from_dimensions(
            self.style.slot_count as f32 * PREFERRED_SLOT_EXTENT,
            PREFERRED_SLOT_EXTENT,
        )
        .with_minimum_dimensions(0.0, min_height)
    }

    fn set_geometry(&mut self, rect: Rect) {
        if self.base.set_geometry(rect) {
            self.recompute_geometry();
        }
    }

    fn paint<R: Renderer>(&self, ctx: &mut PaintContext<'_, R>) {
        let paints = self.paints.select(self.base.has_focus());
        let geometry = &self.geometry;
        let slot_count = self.style.slot_count;
        let height = geometry.height();
        let visible = self.text_length.min(slot_count as usize) as u32;

        let renderer = ctx.renderer();
        renderer.fill_rounded_rect(geometry.outer, paints.border);
        renderer.fill_rounded_rect(geometry.inner, self.style.background_color);

        for index in 1..slot_count {
            let x = geometry.divider_x(index, slot_count);
            renderer.draw_line(Point::new(x, 0.0), Point::new(x, height), &paints.divider);
        }

        if self.display_password.get() {
            let font = Font::new(self.style.glyph_metrics, self.style.glyph_size);
            let baseline = font.centered_baseline(height / 2.0);
            for (index, grapheme) in (0..visible).zip(self.editor.graphemes()) {
                let center = geometry.slot_center(index, slot_count);
                renderer.draw_text(
                    grapheme,
                    Point::new(center.x, baseline),
                    &font,
                    paints.glyph.paint,
                    TextAlign::Center,
                );
            }
        } else {
            for index in 0..visible {
                let center = geometry.slot_center(index, slot_count);
                renderer.fill_circle(center, self.style.glyph_radius, paints.glyph.paint);
            }
        }

        tracing::trace!(
            target: targets::PAINT,
            glyphs = visible,
            focused = self.base.has_focus(),
            "painted masked slot field"
        );
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::FocusIn(e) => {
                if !self.base.is_focusable() {
                    return false;
                }
                self.set_focus_state(true);
                e.base.accept();
                true
            }
            WidgetEvent::FocusOut(e) => {
                self.set_focus_state(false);
                e.base.accept();
                true
            }
            WidgetEvent::KeyPress(e) => {
                if !self.base.is_enabled() {
                    return false;
                }
                let was_complete = self.is_complete();
                let action = self.editor.handle_key_press(e);
                if action == EditAction::TextChanged {
                    self.handle_text_changed(was_complete);
                }
                if action.is_handled() {
                    e.base.accept();
                }
                action.is_handled()
            }
            WidgetEvent::Resize(e) => {
                let size = e.new_size;
                self.set_size(size);
                e.base.accept();
                true
            }
            WidgetEvent::Move(_) | WidgetEvent::Paint(_) => false,
        }
    }
}

static_assertions::assert_impl_all!(MaskedSlotField: Send, Sync);

//! Prelude module for pinfield.
//!
//! ```ignore
//! use pinfield::prelude::*;
//! ```
//!
//! This provides access to:
//! - Signal/property types (`Signal`, `Property`)
//! - Widget foundation (`Widget`, `WidgetBase`, `PaintContext`, events)
//! - The slot field and its editing buffer
//! - Geometry, color and renderer types
//! - Themes and attribute parsing

// ============================================================================
// Signal and Property System
// ============================================================================

pub use crate::property::{Property, ReadOnlyProperty};
pub use crate::signal::{ConnectionId, Signal};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{
    FocusInEvent, FocusOutEvent, FocusReason, FrameRenderer, Key, KeyPressEvent,
    KeyboardModifiers, PaintContext, ResizeEvent, SizeHint, SizePolicy, SizePolicyPair, Widget,
    WidgetBase, WidgetEvent,
};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::{EditAction, FramePaints, MaskedSlotField, SlotGeometry, TextEdit};
pub use crate::{SlotFieldError, SlotFieldResult};

// ============================================================================
// Rendering
// ============================================================================

pub use pinfield_render::{
    Color, DrawCommand, Font, FontMetrics, Paint, Point, RecordingRenderer, Rect, Renderer,
    RoundedRect, Size, Stroke, TextAlign,
};

// ============================================================================
// Styling
// ============================================================================

pub use pinfield_style::prelude::*;

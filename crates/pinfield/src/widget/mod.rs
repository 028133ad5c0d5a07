//! Widget system for pinfield.
//!
//! This module provides the widget architecture the slot field is built on:
//!
//! - [`Widget`] trait: The base trait for all UI elements
//! - [`WidgetBase`]: Common implementation for geometry, focus and repaint state
//! - Size hints and policies for layout negotiation
//! - Widget events for input handling and lifecycle
//! - [`FrameRenderer`]: Paints dirty widgets into a [`Renderer`](pinfield_render::Renderer)
//!
//! # Creating a Widget
//!
//! 1. Define a struct with a `WidgetBase` field
//! 2. Implement the `Widget` trait
//! 3. Provide `size_hint()` for layout
//! 4. Implement `paint()` for rendering
//!
//! Mutating methods never paint. They call [`WidgetBase::update`], and the
//! host paints on its next frame.
//!
//! # Coordinate Systems
//!
//! - **Local coordinates**: Origin at widget's top-left corner
//! - **Parent coordinates**: Relative to the host's origin
//!
//! `paint()` always works in local coordinates; [`FrameRenderer`]
//! translates the renderer before calling it.

mod base;
mod events;
mod geometry;
mod painting;
mod traits;
pub mod widgets;

pub use base::WidgetBase;
pub use events::{
    EventBase, FocusInEvent, FocusOutEvent, FocusReason, Key, KeyPressEvent, KeyboardModifiers,
    MoveEvent, PaintEvent, ResizeEvent, WidgetEvent,
};
pub use geometry::{SizeHint, SizePolicy, SizePolicyPair};
pub use painting::{FrameRenderer, PaintStats};
pub use traits::{PaintContext, Widget};
pub use widgets::{EditAction, FramePaints, MaskedSlotField, SlotGeometry, TextEdit};

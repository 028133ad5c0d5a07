//! pinfield - a masked slot input widget.
//!
//! [`MaskedSlotField`](widget::MaskedSlotField) is a PIN or password entry
//! field that splits its width into a fixed number of slots, draws one dot
//! (or, in reveal mode, the character itself) per entered character, and
//! highlights its border while focused.
//!
//! This is the umbrella crate; it re-exports the core, render and style
//! crates it is built on.
//!
//! # Example
//!
//! ```
//! use pinfield::prelude::*;
//!
//! let mut field = MaskedSlotField::with_attributes(
//!     "passwordLength: 4; borderColorFocus: #007aff; displayPassword: false",
//! )
//! .unwrap();
//! field.set_geometry(Rect::new(0.0, 0.0, 192.0, 48.0));
//!
//! let mut focus = WidgetEvent::FocusIn(FocusInEvent::new(FocusReason::Tab));
//! field.event(&mut focus);
//! field.event(&mut WidgetEvent::KeyPress(KeyPressEvent::typed(Key::Digit4, "4")));
//!
//! let mut renderer = RecordingRenderer::new();
//! let stats = FrameRenderer::render_frame(&mut field, &mut renderer, Color::WHITE);
//! assert_eq!(stats.widgets_painted, 1);
//! assert_eq!(renderer.lines().count(), 3);
//! ```

pub use pinfield_core::*;

/// Rendering types and the renderer trait.
pub mod render {
    pub use pinfield_render::*;
}

/// Themes, attribute parsing and style resolution.
pub mod style {
    pub use pinfield_style::*;
}

mod error;
pub mod prelude;
pub mod widget;

pub use error::{SlotFieldError, SlotFieldResult};

//! Core systems for pinfield.
//!
//! This crate provides the small reactive foundation the widget layer is
//! built on:
//!
//! - **Signal/Slot System**: Type-safe notification of interested parties
//! - **Property System**: Values with change detection
//! - **Logging**: Tracing targets and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use pinfield_core::Signal;
//!
//! let text_changed = Signal::<String>::new();
//!
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! text_changed.emit("1234".to_string());
//! text_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use pinfield_core::{Property, Signal};
//!
//! struct Focus {
//!     focused: Property<bool>,
//!     focus_changed: Signal<bool>,
//! }
//!
//! impl Focus {
//!     fn set(&self, focused: bool) {
//!         if self.focused.set(focused) {
//!             self.focus_changed.emit(focused);
//!         }
//!     }
//! }
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::SignalError;
pub use logging::PerfSpan;
pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionGuard, ConnectionId, Signal};

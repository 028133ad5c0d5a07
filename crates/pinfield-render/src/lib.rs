//! Drawing interface for pinfield.
//!
//! This crate provides the 2D drawing layer widgets paint through:
//!
//! - Geometry and color types ([`Point`], [`Rect`], [`RoundedRect`], [`Color`])
//! - Paint styles ([`Paint`], [`Stroke`])
//! - Font metrics for vertically centering glyphs ([`Font`], [`FontMetrics`])
//! - The [`Renderer`] trait, implemented by drawing backends
//! - [`RecordingRenderer`], a headless backend that records draw commands
//!
//! # Using the Renderer
//!
//! ```
//! use pinfield_render::{Color, Point, Rect, RecordingRenderer, Renderer, Size, Stroke};
//!
//! let mut renderer = RecordingRenderer::new();
//! renderer.begin_frame(Color::WHITE, Size::new(200.0, 40.0));
//!
//! renderer.fill_rect(Rect::new(0.0, 0.0, 200.0, 40.0), Color::LIGHT_GRAY);
//! renderer.draw_line(
//!     Point::new(100.0, 0.0),
//!     Point::new(100.0, 40.0),
//!     &Stroke::new(Color::GRAY, 1.0),
//! );
//!
//! let stats = renderer.end_frame();
//! assert_eq!(stats.draw_calls, 2);
//! ```

mod error;
mod paint;
mod recording;
mod renderer;
pub mod text;
mod types;

pub use error::{RenderError, RenderResult};
pub use paint::{LineCap, Paint, Stroke};
pub use recording::{DrawCommand, RecordingRenderer};
pub use renderer::{FrameStats, RenderStateStack, Renderer};
pub use text::{Font, FontMetrics, TextAlign};
pub use types::{Color, CornerRadii, Point, Rect, RoundedRect, Size};

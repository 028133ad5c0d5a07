//! Logging facilities for pinfield.
//!
//! pinfield uses the `tracing` crate for instrumentation. Library code never
//! installs a subscriber; applications do:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("pinfield=debug,pinfield_style=warn")
//!         .init();
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "pinfield_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "pinfield_core::signal";
    /// Performance spans.
    pub const PERF: &str = "pinfield::perf";
    /// Widget layer target.
    pub const WIDGET: &str = "pinfield::widget";
    /// Painting and repaint bookkeeping.
    pub const PAINT: &str = "pinfield::paint";
    /// Attribute parsing and style resolution.
    pub const STYLE: &str = "pinfield_style";
    /// Renderer backends.
    pub const RENDER: &str = "pinfield_render";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations such as a paint.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: targets::PERF, "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span_without_subscriber() {
        let span = PerfSpan::new("paint");
        drop(span);
    }
}

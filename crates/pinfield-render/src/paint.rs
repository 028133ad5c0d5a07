//! Fill and stroke styles.

use crate::types::Color;

/// How a shape's interior is colored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Color),
}

impl Paint {
    #[inline]
    pub const fn solid(color: Color) -> Self {
        Self::Solid(color)
    }

    /// The color of a solid paint.
    #[inline]
    pub fn as_solid(&self) -> Option<Color> {
        let Self::Solid(color) = self;
        Some(*color)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::solid(color)
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::solid(Color::BLACK)
    }
}

/// Outline style: paint, width in logical pixels and end caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f32,
    pub cap: LineCap,
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(Color::BLACK, 1.0)
    }
}

impl Stroke {
    #[inline]
    pub fn new(paint: impl Into<Paint>, width: f32) -> Self {
        Self {
            paint: paint.into(),
            width,
            cap: LineCap::default(),
        }
    }

    #[inline]
    pub fn with_cap(self, cap: LineCap) -> Self {
        Self { cap, ..self }
    }

    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.paint.as_solid()
    }
}

/// Shape drawn at the open ends of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Ends exactly at the endpoint.
    #[default]
    Butt,
    Round,
    /// Extends half the width past the endpoint.
    Square,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_builder() {
        let stroke = Stroke::new(Color::RED, 2.0).with_cap(LineCap::Round);
        assert_eq!(stroke.width, 2.0);
        assert_eq!(stroke.cap, LineCap::Round);
        assert_eq!(stroke.color(), Some(Color::RED));
        assert_eq!(Stroke::default().cap, LineCap::Butt);
    }

    #[test]
    fn color_converts_to_solid_paint() {
        let paint: Paint = Color::BLUE.into();
        assert_eq!(paint.as_solid(), Some(Color::BLUE));
        assert_eq!(Paint::default(), Paint::solid(Color::BLACK));
    }
}

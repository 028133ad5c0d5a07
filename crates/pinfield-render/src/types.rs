//! Geometry and color values shared by renderers and widgets.
//!
//! All coordinates are logical pixels with y growing downwards.

use bytemuck::{Pod, Zeroable};

#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec2(self) -> glam::Vec2 {
        glam::Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn from_vec2(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<glam::Vec2> for Point {
    fn from(v: glam::Vec2) -> Self {
        Self::from_vec2(v)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// An axis-aligned rectangle: top-left corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left() + self.width()
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top() + self.height()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.left() + self.width() * 0.5,
            self.top() + self.height() * 0.5,
        )
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Half-open containment: the left and top edges are inside, the right
    /// and bottom edges are not.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (self.left()..self.right()).contains(&p.x) && (self.top()..self.bottom()).contains(&p.y)
    }

    /// Move every edge inwards by `amount`.
    ///
    /// An axis that cannot fit `2 * amount` collapses to zero length at the
    /// rectangle's center rather than turning negative.
    pub fn deflate(&self, amount: f32) -> Rect {
        let center = self.center();
        let shrink = |origin: f32, extent: f32, mid: f32| {
            let extent = extent - 2.0 * amount;
            if extent > 0.0 {
                (origin + amount, extent)
            } else {
                (mid, 0.0)
            }
        };
        let (x, width) = shrink(self.left(), self.width(), center.x);
        let (y, height) = shrink(self.top(), self.height(), center.y);
        Rect::new(x, y, width, height)
    }

    /// The same rectangle moved by (`dx`, `dy`).
    #[inline]
    pub fn offset(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.left() + dx, self.top() + dy, self.width(), self.height())
    }
}

/// A rectangle whose corners are rounded by [`CornerRadii`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radii: CornerRadii,
}

impl RoundedRect {
    /// All four corners share `radius`.
    #[inline]
    pub fn new(rect: Rect, radius: f32) -> Self {
        Self::with_radii(rect, CornerRadii::uniform(radius))
    }

    #[inline]
    pub fn with_radii(rect: Rect, radii: CornerRadii) -> Self {
        Self { rect, radii }
    }
}

/// Per-corner radii, clockwise from the top left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub const ZERO: Self = Self::uniform(0.0);

    #[inline]
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// The largest of the four radii.
    #[inline]
    pub fn max(&self) -> f32 {
        [self.top_right, self.bottom_right, self.bottom_left]
            .into_iter()
            .fold(self.top_left, f32::max)
    }
}

/// Linear RGBA with premultiplied alpha, each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::from_rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::from_rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::from_rgb(0.0, 0.0, 1.0);
    pub const GRAY: Self = Self::from_rgb(0.5, 0.5, 0.5);
    pub const DARK_GRAY: Self = Self::from_rgb(0.25, 0.25, 0.25);
    pub const LIGHT_GRAY: Self = Self::from_rgb(0.75, 0.75, 0.75);

    /// Build from channels that are already premultiplied.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from straight (unpremultiplied) channels.
    #[inline]
    pub fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(r * a, g * a, b * a, a)
    }

    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let unit = |c: u8| f32::from(c) / 255.0;
        Self::from_rgba(unit(r), unit(g), unit(b), unit(a))
    }

    /// Opaque color; premultiplication is a no-op at alpha 1.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Parse `RGB`, `RRGGBB` or `RRGGBBAA` hex digits, `#` optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize, len: usize| u8::from_str_radix(digits.get(i..i + len)?, 16).ok();

        match digits.len() {
            3 => Some(Self::from_rgb8(
                channel(0, 1)? * 17,
                channel(1, 1)? * 17,
                channel(2, 1)? * 17,
            )),
            6 => Some(Self::from_rgb8(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
            8 => Some(Self::from_rgba8(
                channel(0, 2)?,
                channel(2, 2)?,
                channel(4, 2)?,
                channel(6, 2)?,
            )),
            _ => None,
        }
    }
}

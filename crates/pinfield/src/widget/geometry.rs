//! Layout negotiation: what size a widget asks for and how it stretches.

use pinfield_render::Size;

/// Stretch behavior along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizePolicy {
    /// Exactly the preferred size.
    Fixed,
    /// At least the preferred size.
    Minimum,
    /// At most the preferred size.
    Maximum,
    /// The preferred size if possible, either way if not.
    #[default]
    Preferred,
    /// Takes any spare room the host has.
    Expanding,
}

/// One policy per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePolicyPair {
    pub horizontal: SizePolicy,
    pub vertical: SizePolicy,
}

impl SizePolicyPair {
    pub fn new(horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Preferred size plus optional bounds.
///
/// A missing bound means unconstrained on that side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeHint {
    pub preferred: Size,
    pub minimum: Option<Size>,
    pub maximum: Option<Size>,
}

impl SizeHint {
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            ..Self::default()
        }
    }

    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    pub fn with_minimum(self, minimum: Size) -> Self {
        Self {
            minimum: Some(minimum),
            ..self
        }
    }

    pub fn with_minimum_dimensions(self, width: f32, height: f32) -> Self {
        self.with_minimum(Size::new(width, height))
    }

    pub fn with_maximum(self, maximum: Size) -> Self {
        Self {
            maximum: Some(maximum),
            ..self
        }
    }

    /// The lower bound, zero when unset.
    pub fn effective_minimum(&self) -> Size {
        self.minimum.unwrap_or(Size::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_preferred() {
        let pair = SizePolicyPair::default();
        assert_eq!(pair.horizontal, SizePolicy::Preferred);
        assert_eq!(pair.vertical, SizePolicy::Preferred);
        assert_eq!(
            SizePolicyPair::new(SizePolicy::Expanding, SizePolicy::Fixed).vertical,
            SizePolicy::Fixed
        );
    }

    #[test]
    fn minimum_defaults_to_zero() {
        let hint = SizeHint::from_dimensions(100.0, 48.0);
        assert_eq!(hint.effective_minimum(), Size::ZERO);

        let hint = hint.with_minimum_dimensions(0.0, 14.0);
        assert_eq!(hint.effective_minimum(), Size::new(0.0, 14.0));
        assert_eq!(hint.preferred, Size::new(100.0, 48.0));
    }
}

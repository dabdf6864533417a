//! Surface dimensions and display density

use crate::config::FieldConfig;

/// Device-pixel size of the drawing surface plus its density scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Multiplier from logical to physical pixels (1.0 on standard displays)
    pub scale: f64,
}

impl Viewport {
    /// Create a viewport. A non-finite or non-positive scale falls back to 1.0;
    /// larger scales are clamped to [`MAX_SCALE`].
    pub fn new(width: u32, height: u32, scale: f64) -> Self {
        Self {
            width,
            height,
            scale: sanitize_scale(scale),
        }
    }

    /// True when nothing can be drawn
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Dot spacing in device pixels
    #[inline]
    pub fn spacing(&self, config: &FieldConfig) -> f64 {
        config.spacing * self.scale
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0, 0, 1.0)
    }
}

/// Largest density scale honoured; keeps dot radii bounded
pub const MAX_SCALE: f64 = 16.0;

pub(crate) fn sanitize_scale(scale: f64) -> f64 {
    if !(scale.is_finite() && scale > 0.0) {
        tracing::warn!("Ignoring invalid scale factor {}", scale);
        1.0
    } else if scale > MAX_SCALE {
        tracing::warn!("Clamping scale factor {} to {}", scale, MAX_SCALE);
        MAX_SCALE
    } else {
        scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimension_is_empty() {
        assert!(Viewport::new(0, 100, 1.0).is_empty());
        assert!(Viewport::new(100, 0, 1.0).is_empty());
        assert!(!Viewport::new(1, 1, 1.0).is_empty());
    }

    #[test]
    fn test_invalid_scale_falls_back() {
        assert_eq!(Viewport::new(10, 10, 0.0).scale, 1.0);
        assert_eq!(Viewport::new(10, 10, f64::NAN).scale, 1.0);
        assert_eq!(Viewport::new(10, 10, 2.0).scale, 2.0);
    }

    #[test]
    fn test_huge_scale_is_clamped() {
        assert_eq!(Viewport::new(10, 10, 1.0e9).scale, MAX_SCALE);
        assert_eq!(Viewport::new(10, 10, MAX_SCALE).scale, MAX_SCALE);
    }

    #[test]
    fn test_spacing_scales_with_density() {
        let config = FieldConfig::default();
        assert_eq!(Viewport::new(10, 10, 1.0).spacing(&config), 10.0);
        assert_eq!(Viewport::new(10, 10, 2.0).spacing(&config), 20.0);
    }
}

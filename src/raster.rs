//! Dot rasterization
//!
//! Each dot is a filled disk whose radius grows as the pointer approaches and
//! whose alpha falls off linearly from the center. Splats overwrite whatever
//! is already in the buffer; later dots win where disks overlap.
//!
//! The falloff divides by `radius²` but subtracts the *rounded* linear
//! distance, which keeps edges fairly opaque for small radii. That texture is
//! deliberate and covered by tests.

use crate::config::FieldConfig;
use crate::grid::GridPoints;
use crate::model::{PixelBuffer, PointerState, Viewport};
use crate::theme::Color;

/// Radius parameters in device pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotStyle {
    /// Radius when the pointer is absent or beyond `effect_radius`
    pub base_radius: f64,
    /// Extra radius when the pointer sits exactly on the center
    pub max_boost: f64,
    /// Distance beyond which the pointer has no effect
    pub effect_radius: f64,
}

impl DotStyle {
    /// Scale the configured radii by display density. The effect radius is
    /// already in device pixels and stays as configured.
    pub fn from_config(config: &FieldConfig, scale: f64) -> Self {
        Self {
            base_radius: config.base_radius * scale,
            max_boost: config.max_boost * scale,
            effect_radius: config.effect_radius,
        }
    }

    /// Radius for a dot `distance` device pixels away from the pointer
    ///
    /// Non-increasing in `distance`, equal to `base_radius + max_boost` at zero
    /// and flat at `base_radius` from `effect_radius` on.
    #[inline]
    pub fn radius(&self, distance: f64) -> f64 {
        if self.effect_radius <= 0.0 {
            return self.base_radius;
        }
        let clamped = distance.min(self.effect_radius);
        let proximity = ((self.effect_radius - clamped) / self.effect_radius).max(0.0);
        self.base_radius + self.max_boost * proximity
    }
}

impl Default for DotStyle {
    fn default() -> Self {
        Self::from_config(&FieldConfig::default(), 1.0)
    }
}

/// Alpha for the pixel at offset `(dx, dy)` from the center of a dot of `radius`
///
/// `255 * max(0, (r² - round(√(dx² + dy²))) / r²)`, rounded to the nearest
/// integer. Always 255 at the center.
#[inline]
pub fn falloff_alpha(dx: i64, dy: i64, radius: f64) -> u8 {
    let radius_sq = radius * radius;
    if radius_sq <= 0.0 {
        return 0;
    }
    let distance = ((dx * dx + dy * dy) as f64).sqrt().round();
    let alpha = 255.0 * ((radius_sq - distance) / radius_sq).max(0.0);
    alpha.round().clamp(0.0, 255.0) as u8
}

/// Paint one dot centered at `(x, y)`. Returns the number of pixels written.
pub fn paint_dot(
    buffer: &mut PixelBuffer,
    x: f64,
    y: f64,
    pointer: PointerState,
    color: Color,
    style: &DotStyle,
) -> usize {
    let radius = style.radius(pointer.distance_to(x, y));
    let radius_sq = radius * radius;
    let reach = radius.ceil() as i64;

    let mut written = 0;
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            if (dx * dx + dy * dy) as f64 > radius_sq {
                continue;
            }
            let px = (x + dx as f64).trunc() as i64;
            let py = (y + dy as f64).trunc() as i64;
            let alpha = falloff_alpha(dx, dy, radius);
            if buffer.put(px, py, [color.r, color.g, color.b, alpha]) {
                written += 1;
            }
        }
    }
    written
}

/// Clear the buffer and paint the full lattice. Returns the number of dots.
pub fn paint_pattern(
    buffer: &mut PixelBuffer,
    viewport: &Viewport,
    spacing: f64,
    pointer: PointerState,
    color: Color,
    style: &DotStyle,
) -> usize {
    buffer.clear();
    let mut dots = 0;
    for (x, y) in GridPoints::for_viewport(viewport, spacing) {
        paint_dot(buffer, x, y, pointer, color, style);
        dots += 1;
    }
    dots
}

//! Compositing the RGBA field buffer onto an opaque page color

use crate::model::PixelBuffer;
use crate::theme::Color;

/// Blend one RGBA pixel over an opaque background, returning `0x00RRGGBB`
///
/// Alpha 0 yields the background exactly, alpha 255 the pixel color exactly.
#[inline]
pub fn compose_pixel(rgba: [u8; 4], background: Color) -> u32 {
    let a = rgba[3] as u32;
    let inv_a = 255 - a;

    let r = (rgba[0] as u32 * a + background.r as u32 * inv_a) / 255;
    let g = (rgba[1] as u32 * a + background.g as u32 * inv_a) / 255;
    let b = (rgba[2] as u32 * a + background.b as u32 * inv_a) / 255;

    (r << 16) | (g << 8) | b
}

/// Composite the whole buffer into `out` (one `u32` per pixel)
///
/// Writes `min(out.len(), pixel count)` pixels.
pub fn compose_into(buffer: &PixelBuffer, background: Color, out: &mut [u32]) {
    for (dst, px) in out.iter_mut().zip(buffer.pixels()) {
        *dst = if px[3] == 0 {
            background.to_rgb_u32()
        } else {
            compose_pixel(px, background)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: Color = Color::rgb(0xEF, 0xF1, 0xF5);

    #[test]
    fn test_transparent_pixel_shows_background() {
        assert_eq!(compose_pixel([1, 2, 3, 0], PAGE), 0xEFF1F5);
    }

    #[test]
    fn test_opaque_pixel_shows_color() {
        assert_eq!(compose_pixel([0x45, 0x47, 0x5A, 255], PAGE), 0x45475A);
    }

    #[test]
    fn test_half_alpha_is_between() {
        let px = compose_pixel([0, 0, 0, 128], Color::rgb(255, 255, 255));
        let r = (px >> 16) & 0xFF;
        assert!(r > 100 && r < 160, "R channel: {}", r);
    }

    #[test]
    fn test_compose_into_whole_buffer() {
        let mut buffer = PixelBuffer::new(2, 1);
        buffer.put(1, 0, [0x10, 0x20, 0x30, 255]);
        let mut out = vec![0u32; 2];
        compose_into(&buffer, PAGE, &mut out);
        assert_eq!(out, vec![0xEFF1F5, 0x102030]);
    }
}

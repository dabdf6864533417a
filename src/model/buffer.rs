//! RGBA pixel buffer owned by the model

/// Bytes per RGBA pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// A `width * height` RGBA8 buffer, row-major, starting fully transparent
///
/// All writes are bounds-checked; coordinates outside the buffer are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    /// Reallocate for new dimensions. Contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    /// Make every pixel fully transparent
    #[inline]
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, `width * height * 4` long
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterate pixels as `[r, g, b, a]`
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }

    /// Read a pixel, `None` when out of bounds
    pub fn pixel(&self, x: i64, y: i64) -> Option<[u8; 4]> {
        let idx = self.index(x, y)?;
        let px = &self.data[idx..idx + BYTES_PER_PIXEL];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Overwrite a pixel. Returns false (and writes nothing) when out of bounds.
    #[inline]
    pub fn put(&mut self, x: i64, y: i64, rgba: [u8; 4]) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.data[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&rgba);
                true
            }
            None => false,
        }
    }

    /// True when every pixel is fully transparent
    pub fn is_clear(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// Number of pixels with non-zero alpha
    pub fn painted_pixels(&self) -> usize {
        self.pixels().filter(|px| px[3] > 0).count()
    }
}

//! Dot lattice enumeration
//!
//! Centers sit at `(col * spacing, row * spacing)` for every column and row
//! whose coordinate is strictly inside the viewport. Enumeration is row-major
//! (x varies fastest) and holds no state between frames.

use crate::model::Viewport;

/// Lazy iterator over dot centers in device pixels
#[derive(Debug, Clone)]
pub struct GridPoints {
    spacing: f64,
    cols: usize,
    total: usize,
    next: usize,
}

impl GridPoints {
    /// Lattice covering `[0, width) x [0, height)` at `spacing`.
    /// Empty for a zero-area extent or a spacing that is not positive and finite.
    pub fn new(width: f64, height: f64, spacing: f64) -> Self {
        let (cols, rows) = if spacing.is_finite() && spacing > 0.0 {
            (steps(width, spacing), steps(height, spacing))
        } else {
            (0, 0)
        };
        Self {
            spacing,
            cols,
            // Saturates for absurd lattices instead of wrapping
            total: cols.saturating_mul(rows),
            next: 0,
        }
    }

    pub fn for_viewport(viewport: &Viewport, spacing: f64) -> Self {
        Self::new(viewport.width as f64, viewport.height as f64, spacing)
    }
}

/// Number of `k >= 0` with `k * spacing < extent`
fn steps(extent: f64, spacing: f64) -> usize {
    if !extent.is_finite() || extent <= 0.0 {
        return 0;
    }
    let mut n = (extent / spacing).ceil() as usize;
    // Float division can overshoot by one when extent is a multiple of spacing
    while n > 0 && (n - 1) as f64 * spacing >= extent {
        n -= 1;
    }
    n
}

impl Iterator for GridPoints {
    type Item = (f64, f64);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let col = self.next % self.cols;
        let row = self.next / self.cols;
        self.next += 1;
        Some((col as f64 * self.spacing, row as f64 * self.spacing))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next.min(self.total);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridPoints {}

impl std::iter::FusedIterator for GridPoints {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hundred_by_hundred_yields_hundred_dots() {
        let points: Vec<_> = GridPoints::new(100.0, 100.0, 10.0).collect();
        assert_eq!(points.len(), 100);
        assert_eq!(points[0], (0.0, 0.0));
        assert_eq!(points[1], (10.0, 0.0));
        assert_eq!(points[9], (90.0, 0.0));
        assert_eq!(points[10], (0.0, 10.0));
        assert_eq!(points[99], (90.0, 90.0));
    }

    #[test]
    fn test_extent_not_multiple_of_spacing() {
        let grid = GridPoints::new(101.0, 95.0, 10.0);
        assert!(grid.clone().all(|(x, y)| x < 101.0 && y < 95.0));
        assert_eq!(grid.clone().last(), Some((100.0, 90.0)));
        assert_eq!(grid.len(), 110);
    }

    #[test]
    fn test_zero_area_is_empty() {
        assert_eq!(GridPoints::new(0.0, 100.0, 10.0).count(), 0);
        assert_eq!(GridPoints::new(100.0, 0.0, 10.0).count(), 0);
    }

    #[test]
    fn test_invalid_spacing_is_empty() {
        assert_eq!(GridPoints::new(100.0, 100.0, 0.0).count(), 0);
        assert_eq!(GridPoints::new(100.0, 100.0, -5.0).count(), 0);
        assert_eq!(GridPoints::new(100.0, 100.0, f64::NAN).count(), 0);
    }

    #[test]
    fn test_tiny_spacing_does_not_overflow() {
        let grid = GridPoints::new(1920.0, 1080.0, 1.0e-12);
        assert_eq!(grid.len(), usize::MAX);

        let huge = GridPoints::new(f64::MAX, f64::MAX, 1.0);
        assert_eq!(huge.len(), usize::MAX);
    }

    #[test]
    fn test_density_scaled_spacing() {
        let viewport = Viewport::new(200, 200, 2.0);
        let points: Vec<_> = GridPoints::for_viewport(&viewport, 20.0).collect();
        assert_eq!(points.len(), 100);
        assert_eq!(points[99], (180.0, 180.0));
    }

    #[test]
    fn test_restartable_and_deterministic() {
        let a: Vec<_> = GridPoints::new(57.0, 33.0, 7.5).collect();
        let b: Vec<_> = GridPoints::new(57.0, 33.0, 7.5).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let mut grid = GridPoints::new(30.0, 20.0, 10.0);
        assert_eq!(grid.len(), 6);
        grid.next();
        grid.next();
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.by_ref().count(), 4);
        assert_eq!(grid.next(), None);
    }
}

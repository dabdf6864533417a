//! Pointer position as seen by the rasterizer

/// Current pointer position in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    /// Pointer is outside the surface; no dot gets a proximity boost
    #[default]
    Absent,
    At { x: f64, y: f64 },
}

impl PointerState {
    pub fn at(x: f64, y: f64) -> Self {
        PointerState::At { x, y }
    }

    /// Euclidean distance to `(x, y)`, infinite when the pointer is absent
    #[inline]
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        match *self {
            PointerState::Absent => f64::INFINITY,
            PointerState::At { x: px, y: py } => (x - px).hypot(y - py),
        }
    }
}

//! Field model - the complete state of the dot field
//!
//! Everything the renderer needs lives here and is mutated only through
//! [`crate::update::update`].

pub mod buffer;
pub mod frame;
pub mod pointer;
pub mod viewport;

pub use buffer::{PixelBuffer, BYTES_PER_PIXEL};
pub use frame::{FrameDriver, FrameState, ScheduledFrame};
pub use pointer::PointerState;
pub use viewport::Viewport;

use crate::config::FieldConfig;
use crate::raster::DotStyle;
use crate::theme::{Palette, Theme, ThemeMode};

/// The complete renderer context
#[derive(Debug, Clone)]
pub struct FieldModel {
    /// Current surface size and density
    pub viewport: Viewport,
    /// Pointer position, or absent when it left the surface
    pub pointer: PointerState,
    /// Active color scheme
    pub theme_mode: ThemeMode,
    /// Themes for both schemes
    pub palette: Palette,
    /// Persisted configuration
    pub config: FieldConfig,
    /// The RGBA buffer handed to the host on present
    pub buffer: PixelBuffer,
    /// Redraw coalescing state
    pub frame: FrameDriver,
}

impl FieldModel {
    /// Create a model for the given surface. The buffer is allocated but not
    /// painted; the first repaint happens on the first refresh opportunity.
    pub fn new(
        width: u32,
        height: u32,
        scale: f64,
        system_mode: ThemeMode,
        config: FieldConfig,
        palette: Palette,
    ) -> Self {
        let config = config.sanitized();
        let theme_mode = config.theme.resolve(system_mode);
        Self {
            viewport: Viewport::new(width, height, scale),
            pointer: PointerState::Absent,
            theme_mode,
            palette,
            config,
            buffer: PixelBuffer::new(width, height),
            frame: FrameDriver::default(),
        }
    }

    /// Model with default config and built-in themes
    pub fn with_defaults(width: u32, height: u32, scale: f64, system_mode: ThemeMode) -> Self {
        Self::new(
            width,
            height,
            scale,
            system_mode,
            FieldConfig::default(),
            Palette::default(),
        )
    }

    /// Theme for the active scheme
    pub fn theme(&self) -> &Theme {
        self.palette.for_mode(self.theme_mode)
    }

    /// Rasterizer constants scaled for the current density
    pub fn dot_style(&self) -> DotStyle {
        DotStyle::from_config(&self.config, self.viewport.scale)
    }

    /// Dot spacing in device pixels
    pub fn spacing(&self) -> f64 {
        self.viewport.spacing(&self.config)
    }

    /// Apply a new surface size and/or scale, reallocating the buffer
    pub fn apply_resize(&mut self, size: Option<(u32, u32)>, scale: Option<f64>) {
        let (width, height) = size.unwrap_or((self.viewport.width, self.viewport.height));
        let scale = scale.unwrap_or(self.viewport.scale);
        self.viewport = Viewport::new(width, height, scale);
        self.buffer.resize(width, height);
    }
}

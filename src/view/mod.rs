//! View module - presenting the field buffer on a window surface
//!
//! The model produces RGBA; softbuffer wants opaque `0x00RRGGBB`, so every
//! present composites the buffer over the active theme's background.

pub mod compose;

pub use compose::{compose_into, compose_pixel};

use anyhow::Result;
use softbuffer::{Context, Surface};
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::window::Window;

use crate::model::PixelBuffer;
use crate::theme::Color;

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
}

impl Renderer {
    /// Create a renderer sized to the window's current inner size
    pub fn new(window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        let mut renderer = Self {
            surface,
            width: 0,
            height: 0,
        };
        renderer.resize(size.width, size.height)?;
        Ok(renderer)
    }

    /// Resize the surface. Zero-area sizes are remembered but not applied;
    /// presenting is skipped until the surface has an area again.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if (width, height) == (self.width, self.height) {
            return Ok(());
        }
        self.width = width;
        self.height = height;

        if let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.surface
                .resize(w, h)
                .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        }
        Ok(())
    }

    /// Composite `buffer` over `background` and present it
    pub fn present(&mut self, buffer: &PixelBuffer, background: Color) -> Result<()> {
        self.resize(buffer.width(), buffer.height())?;
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let mut out = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        compose_into(buffer, background, &mut out);
        out.present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }

    /// Fill the surface with the background color and present it
    pub fn clear(&mut self, background: Color) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let mut out = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        out.fill(background.to_rgb_u32());
        out.present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}

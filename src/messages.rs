//! Message types for the Elm-style architecture
//!
//! Every input from the host flows through [`Msg`].

use crate::theme::ThemeMode;

/// Host events consumed by [`crate::update::update`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    /// Surface resized to the given device-pixel size (coalesced)
    Resized { width: u32, height: u32 },
    /// Display density changed (coalesced, applied with the next resize)
    ScaleFactorChanged(f64),
    /// Pointer moved to a device-pixel position (coalesced)
    PointerMoved { x: f64, y: f64 },
    /// Pointer left the surface (immediate clear)
    PointerLeft,
    /// System color-scheme preference changed (immediate repaint)
    ColorSchemeChanged(ThemeMode),
    /// The host can accept a new frame
    RefreshOpportunity,
}

impl Msg {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Msg::Resized { .. } => "Resized",
            Msg::ScaleFactorChanged(_) => "ScaleFactorChanged",
            Msg::PointerMoved { .. } => "PointerMoved",
            Msg::PointerLeft => "PointerLeft",
            Msg::ColorSchemeChanged(_) => "ColorSchemeChanged",
            Msg::RefreshOpportunity => "RefreshOpportunity",
        }
    }
}

//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler and window management
//! - `input` - window event to message mapping

pub mod app;
pub mod input;

pub use app::App;

//! dotfield - ambient dot-grid background
//!
//! The core turns a viewport, a pointer position and a color scheme into an
//! RGBA buffer of soft dots, following the Elm Architecture: host events are
//! [`Msg`]s, [`update`] mutates the [`FieldModel`] and returns [`Cmd`]s for the
//! host surface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod grid;
pub mod messages;
pub mod model;
pub mod perf;
pub mod raster;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::FieldConfig;
pub use messages::Msg;
pub use model::FieldModel;
pub use theme::{Theme, ThemeMode};
pub use update::update;

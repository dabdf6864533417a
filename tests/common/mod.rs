//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use dotfield::messages::Msg;
use dotfield::model::FieldModel;
use dotfield::theme::{Color, ThemeMode};
use dotfield::update::update;
use dotfield::Cmd;

/// A model with default config and built-in themes that has already
/// run its first frame at the given size
pub fn test_model(width: u32, height: u32, scale: f64) -> FieldModel {
    let mut model = FieldModel::with_defaults(0, 0, scale, ThemeMode::Light);
    update(&mut model, Msg::ScaleFactorChanged(scale));
    update(&mut model, Msg::Resized { width, height });
    update(&mut model, Msg::RefreshOpportunity);
    model
}

/// Dispatch a sequence of messages, collecting the flattened commands
pub fn dispatch_all(model: &mut FieldModel, msgs: &[Msg]) -> Vec<Cmd> {
    msgs.iter()
        .filter_map(|msg| update(model, *msg))
        .flat_map(Cmd::flatten)
        .collect()
}

/// Count of `ScheduleRedraw` commands in a command list
pub fn schedule_count(cmds: &[Cmd]) -> usize {
    cmds.iter()
        .filter(|cmd| matches!(cmd, Cmd::ScheduleRedraw))
        .count()
}

/// Alpha channel of the pixel at (x, y), 0 when out of bounds
pub fn alpha_at(model: &FieldModel, x: i64, y: i64) -> u8 {
    model.buffer.pixel(x, y).map_or(0, |px| px[3])
}

/// RGB of the pixel at (x, y), ignoring alpha
pub fn rgb_at(model: &FieldModel, x: i64, y: i64) -> Option<Color> {
    model
        .buffer
        .pixel(x, y)
        .map(|[r, g, b, _]| Color::rgb(r, g, b))
}

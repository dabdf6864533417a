//! Update function for the Elm-style architecture
//!
//! This is the frame driver. Resize, scale and pointer-move events are
//! coalesced into at most one scheduled repaint per refresh opportunity.
//! Pointer-leave and color-scheme changes bypass the gate and act at once.

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{FieldModel, PointerState};
use crate::raster::paint_pattern;
use crate::theme::ThemeMode;

#[cfg(debug_assertions)]
use tracing::{debug, span, trace, Level};

/// Main update function
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut FieldModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

#[cfg(debug_assertions)]
fn update_traced(model: &mut FieldModel, msg: Msg) -> Option<Cmd> {
    let span = span!(Level::TRACE, "update", msg = msg.name());
    let _guard = span.enter();

    let before = model.frame.state();
    let cmd = update_inner(model, msg);
    let after = model.frame.state();

    if before != after {
        debug!(?before, ?after, "frame state");
    }
    trace!(?msg, ?cmd, "handled");
    cmd
}

fn update_inner(model: &mut FieldModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Resized { width, height } => schedule(model.frame.request_resize(width, height)),
        Msg::ScaleFactorChanged(scale) => schedule(model.frame.request_scale(scale)),
        Msg::PointerMoved { x, y } => {
            model.pointer = PointerState::at(x, y);
            schedule(model.frame.request())
        }
        Msg::PointerLeft => {
            model.pointer = PointerState::Absent;
            model.buffer.clear();
            Some(Cmd::ClearSurface)
        }
        Msg::ColorSchemeChanged(mode) => update_color_scheme(model, mode),
        Msg::RefreshOpportunity => run_frame(model),
    }
}

fn schedule(newly_scheduled: bool) -> Option<Cmd> {
    newly_scheduled.then_some(Cmd::ScheduleRedraw)
}

fn update_color_scheme(model: &mut FieldModel, system_mode: ThemeMode) -> Option<Cmd> {
    if !model.config.theme.follows_system() {
        tracing::debug!(
            ?system_mode,
            preference = ?model.config.theme,
            "Ignoring system color scheme change"
        );
        return None;
    }

    model.theme_mode = system_mode;
    repaint(model);
    Some(Cmd::Present)
}

/// Execute the scheduled repaint, if any
///
/// With nothing scheduled the host is asking for contents anyway (expose,
/// first show), so the existing buffer is presented as is.
fn run_frame(model: &mut FieldModel) -> Option<Cmd> {
    let Some(frame) = model.frame.begin_frame() else {
        return Some(Cmd::Present);
    };

    let mut cmds = Vec::with_capacity(2);
    if frame.resizes() {
        model.apply_resize(frame.size, frame.scale);
        cmds.push(Cmd::ResizeSurface {
            width: model.viewport.width,
            height: model.viewport.height,
        });
    }

    repaint(model);
    cmds.push(Cmd::Present);
    Some(Cmd::batch(cmds))
}

/// Clear the buffer and paint the full pattern from the current model state.
/// Returns the number of dots painted.
pub fn repaint(model: &mut FieldModel) -> usize {
    let style = model.dot_style();
    let spacing = model.spacing();
    let color = model.theme().dot;

    let dots = paint_pattern(
        &mut model.buffer,
        &model.viewport,
        spacing,
        model.pointer,
        color,
        &style,
    );
    model.frame.record_repaint(dots);
    dots
}

//! Window event to message mapping
//!
//! Pointer coordinates from winit are already physical pixels, which is the
//! unit the model works in.

use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{Key, NamedKey};
use winit::window::Theme as WindowTheme;

use dotfield::messages::Msg;
use dotfield::theme::ThemeMode;

/// Map a window event to a model message
///
/// `RedrawRequested` and `CloseRequested` are handled by the app directly and
/// map to `None` here, as does anything the field does not react to.
pub fn message_for_event(event: &WindowEvent) -> Option<Msg> {
    match event {
        WindowEvent::Resized(size) => Some(Msg::Resized {
            width: size.width,
            height: size.height,
        }),
        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
            Some(Msg::ScaleFactorChanged(*scale_factor))
        }
        WindowEvent::CursorMoved { position, .. } => Some(Msg::PointerMoved {
            x: position.x,
            y: position.y,
        }),
        WindowEvent::CursorLeft { .. } => Some(Msg::PointerLeft),
        WindowEvent::ThemeChanged(theme) => Some(Msg::ColorSchemeChanged(theme_mode(*theme))),
        _ => None,
    }
}

pub fn theme_mode(theme: WindowTheme) -> ThemeMode {
    ThemeMode::from_dark_flag(theme == WindowTheme::Dark)
}

/// Escape closes the window (mainly for fullscreen use)
pub fn is_quit_key(event: &KeyEvent) -> bool {
    event.state == ElementState::Pressed
        && !event.repeat
        && event.logical_key == Key::Named(NamedKey::Escape)
}

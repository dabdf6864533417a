use std::rc::Rc;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Window, WindowId};

use dotfield::cli::StartupConfig;
use dotfield::commands::Cmd;
use dotfield::config::FieldConfig;
use dotfield::messages::Msg;
use dotfield::model::FieldModel;
use dotfield::perf::PerfStats;
use dotfield::theme::{Palette, ThemeMode};
use dotfield::update::update;
use dotfield::view::Renderer;

use super::input::{is_quit_key, message_for_event, theme_mode};

pub struct App {
    model: FieldModel,
    startup: StartupConfig,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    perf: PerfStats,
}

impl App {
    /// The model starts with an empty viewport; the real size, scale and
    /// color scheme are fed in as messages once the window exists.
    pub fn new(startup: StartupConfig, config: FieldConfig) -> Self {
        let palette = Palette::load(&config.light_theme, &config.dark_theme);
        let model = FieldModel::new(0, 0, 1.0, ThemeMode::default(), config, palette);

        Self {
            model,
            startup,
            renderer: None,
            window: None,
            context: None,
            perf: PerfStats::default(),
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.startup.window_size;
        let mut attributes = Window::default_attributes()
            .with_title("dotfield")
            .with_inner_size(LogicalSize::new(width, height));
        if self.startup.fullscreen {
            attributes = attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Rc::new(event_loop.create_window(attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create softbuffer context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context)?;

        let size = window.inner_size();
        let scale = window.scale_factor();
        let system_theme = window.theme().map(theme_mode).unwrap_or_default();
        tracing::info!(
            width = size.width,
            height = size.height,
            scale,
            ?system_theme,
            "Window created"
        );

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);

        self.dispatch(Msg::ColorSchemeChanged(system_theme));
        self.dispatch(Msg::ScaleFactorChanged(scale));
        self.dispatch(Msg::Resized {
            width: size.width,
            height: size.height,
        });
        Ok(())
    }

    /// Run a message through the model and carry out the resulting commands
    fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    fn redraw(&mut self) {
        self.perf.start_frame();

        let cmd = {
            let _timer = self.perf.time_paint();
            update(&mut self.model, Msg::RefreshOpportunity)
        };
        if let Some(cmd) = cmd {
            self.process_cmd(cmd);
        }

        if self.perf.record_frame_time() {
            tracing::debug!(
                dots = self.model.frame.last_dot_count(),
                repaints = self.model.frame.repaints(),
                "{}",
                self.perf.summary()
            );
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        for cmd in cmd.flatten() {
            let result = match cmd {
                Cmd::None | Cmd::Batch(_) => Ok(()),
                Cmd::ScheduleRedraw => {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                    Ok(())
                }
                Cmd::ResizeSurface { width, height } => match &mut self.renderer {
                    Some(renderer) => renderer.resize(width, height),
                    None => Ok(()),
                },
                Cmd::Present => {
                    let _timer = self.perf.time_present();
                    let background = self.model.theme().background;
                    match &mut self.renderer {
                        Some(renderer) => renderer.present(&self.model.buffer, background),
                        None => Ok(()),
                    }
                }
                Cmd::ClearSurface => {
                    let background = self.model.theme().background;
                    match &mut self.renderer {
                        Some(renderer) => renderer.clear(background),
                        None => Ok(()),
                    }
                }
            };

            if let Err(e) = result {
                tracing::error!("Surface command failed: {:#}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to initialize window: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { ref event, .. } if is_quit_key(event) => {
                event_loop.exit()
            }
            WindowEvent::RedrawRequested => self.redraw(),
            other => {
                if let Some(msg) = message_for_event(&other) {
                    self.dispatch(msg);
                }
            }
        }
    }
}

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use anyhow::Result;
use clap::Parser;
use winit::event_loop::{ControlFlow, EventLoop};

use dotfield::cli::CliArgs;
use dotfield::config::FieldConfig;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    let startup = CliArgs::parse().into_config().map_err(anyhow::Error::msg)?;

    dotfield::tracing::init(startup.file_logging);

    let config = startup.apply_to(FieldConfig::load());

    if startup.init_config {
        config.save().map_err(anyhow::Error::msg)?;
        if let Some(path) = dotfield::config_paths::config_file() {
            println!("Wrote {}", path.display());
        }
        return Ok(());
    }

    tracing::info!(?config, "Starting dotfield");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(startup, config);
    event_loop.run_app(&mut app)?;

    Ok(())
}

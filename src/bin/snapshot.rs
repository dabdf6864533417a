//! Headless PNG snapshots of the dot field
//!
//! Drives the same update loop as the window, then composites the buffer
//! over the theme background and writes it out.
//!
//! Usage:
//!   cargo run --bin snapshot -- --out snapshots/field.png
//!   cargo run --bin snapshot -- --scale 2 --pointer 400,300 --theme dark

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use dotfield::config::{FieldConfig, ThemePreference};
use dotfield::messages::Msg;
use dotfield::model::FieldModel;
use dotfield::theme::{Palette, ThemeMode};
use dotfield::update::update;
use dotfield::view::compose_into;

#[derive(Parser, Debug)]
#[command(name = "snapshot", about = "Render the dot field to a PNG")]
struct Args {
    /// Width in physical pixels
    #[arg(long, default_value_t = 800)]
    width: u32,
    /// Height in physical pixels
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Device pixel ratio
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
    /// Pointer position in physical pixels, as `x,y`
    #[arg(long, value_parser = parse_point, value_name = "X,Y")]
    pointer: Option<(f64, f64)>,
    /// Color scheme to render. There is no system scheme without a window.
    #[arg(long, value_enum, default_value = "light")]
    theme: Scheme,
    /// Config file to read instead of the user config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output PNG path
    #[arg(long, default_value = "snapshots/dotfield.png")]
    out: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scheme {
    Light,
    Dark,
}

impl From<Scheme> for ThemeMode {
    fn from(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Light => ThemeMode::Light,
            Scheme::Dark => ThemeMode::Dark,
        }
    }
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x: {}", e))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y: {}", e))?;
    Ok((x, y))
}

fn load_config(path: Option<&Path>) -> Result<FieldConfig> {
    match path {
        Some(path) => FieldConfig::load_from(path).map_err(anyhow::Error::msg),
        None => Ok(FieldConfig::load()),
    }
}

fn render(args: &Args, config: FieldConfig) -> FieldModel {
    let system_mode = ThemeMode::from(args.theme);
    let palette = Palette::load(&config.light_theme, &config.dark_theme);
    let mut model = FieldModel::new(0, 0, 1.0, system_mode, config, palette);

    let mut messages = vec![
        Msg::ScaleFactorChanged(args.scale),
        Msg::Resized {
            width: args.width,
            height: args.height,
        },
    ];
    if let Some((x, y)) = args.pointer {
        messages.push(Msg::PointerMoved { x, y });
    }
    messages.push(Msg::RefreshOpportunity);

    for msg in messages {
        update(&mut model, msg);
    }
    model
}

fn save_png(model: &FieldModel, path: &Path) -> Result<()> {
    let (width, height) = (model.viewport.width, model.viewport.height);
    let mut composed = vec![0u32; model.viewport.pixel_count()];
    compose_into(&model.buffer, model.theme().background, &mut composed);

    let mut rgba = Vec::with_capacity(composed.len() * 4);
    for pixel in composed {
        rgba.extend_from_slice(&[(pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8, 0xFF]);
    }

    let img = image::ImageBuffer::<image::Rgba<u8>, Vec<u8>>::from_raw(width, height, rgba)
        .context("failed to create image buffer")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }

    img.save(path)
        .with_context(|| format!("saving PNG to {}", path.display()))?;

    Ok(())
}

fn main() -> Result<()> {
    dotfield::tracing::init(false);

    let args = Args::parse();
    if args.width == 0 || args.height == 0 {
        anyhow::bail!("size must be non-zero, got {}x{}", args.width, args.height);
    }

    let mut config = load_config(args.config.as_deref())?;
    // The scheme comes from --theme, so the config must follow it
    config.theme = ThemePreference::System;

    let model = render(&args, config);
    save_png(&model, &args.out)?;

    eprintln!(
        "{} dots ({} painted pixels), {}x{} @{}x saved {}",
        model.frame.last_dot_count(),
        model.buffer.painted_pixels(),
        model.viewport.width,
        model.viewport.height,
        model.viewport.scale,
        args.out.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("snapshot").chain(args.iter().copied()))
    }

    #[test]
    fn test_system_scheme_is_rejected() {
        assert!(parse(&["--theme", "system"]).is_err());
        assert_eq!(parse(&["--theme", "dark"]).unwrap().theme, Scheme::Dark);
        assert_eq!(parse(&[]).unwrap().theme, Scheme::Light);
    }

    #[test]
    fn test_pointer_parsing() {
        assert_eq!(parse_point("400, 300"), Ok((400.0, 300.0)));
        assert!(parse_point("400").is_err());
        assert!(parse_point("x,1").is_err());
    }

    #[test]
    fn test_render_uses_requested_scheme() {
        let args = parse(&["--width", "40", "--height", "30", "--theme", "dark"]).unwrap();
        let config = FieldConfig {
            light_theme: "no-such-theme".to_string(),
            dark_theme: "no-such-theme".to_string(),
            ..FieldConfig::default()
        };

        let model = render(&args, config);
        assert_eq!(model.theme_mode, ThemeMode::Dark);
        assert_eq!(model.frame.last_dot_count(), 12);
    }
}

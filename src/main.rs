use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use rasterpaint::Config;
use rasterpaint::export::{self, expand_tilde};
use rasterpaint::input::InputState;
use rasterpaint::script::Script;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rasterpaint")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("RASTERPAINT_GIT_HASH"), ")"),
    about = "Raster painting with scripted pointer gestures"
)]
struct Cli {
    /// Gesture script (TOML) to replay onto a fresh canvas
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Export path; .jpg/.jpeg writes JPEG, anything else PNG
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Canvas width, overriding the config file
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Canvas height, overriding the config file
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,

    /// Load settings from this file instead of the default location
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the commented example config to the default location and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote example config to {}", path.display());
        return Ok(());
    }

    if cli.script.is_none() && cli.output.is_none() {
        // No flags: show usage
        println!("rasterpaint: Raster painting with scripted pointer gestures");
        println!();
        println!("Usage:");
        println!("  rasterpaint --script steps.toml --output out.png   Replay and export");
        println!("  rasterpaint --script steps.toml                     Replay, export to save_directory");
        println!("  rasterpaint --init-config                           Write example config");
        println!("  rasterpaint --help                                  Show help");
        println!();
        println!("Script steps ([[step]] tables tagged by `action`):");
        println!("  tool, color, pen-size, press, move, release, hover, drag,");
        println!("  undo, clear, rotate, rotate-selection, flip-horizontal,");
        println!("  flip-vertical, resize");
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.canvas.width = width.max(1);
    }
    if let Some(height) = cli.height {
        config.canvas.height = height.max(1);
    }

    let mut state = InputState::from_config(&config);
    log::info!(
        "Canvas {}x{}, tool {}",
        state.canvas.width(),
        state.canvas.height(),
        state.current_tool
    );

    if let Some(path) = &cli.script {
        let script = Script::load(path)
            .with_context(|| format!("Failed to load script {}", path.display()))?;
        let steps = script.apply(&mut state);
        log::info!("Replayed {steps} steps from {}", path.display());
    }

    state.flush_pending();
    let quality = config.export.jpeg_quality;
    let saved = match cli.output {
        Some(path) => {
            export::save_canvas(&state.canvas, &path, quality)
                .with_context(|| format!("Failed to export {}", path.display()))?;
            path
        }
        None => export::save_to_directory(
            &state.canvas,
            &expand_tilde(&config.export.save_directory),
            &config.export.filename_template,
            config.export.default_format,
            quality,
        )
        .context("Failed to export canvas")?,
    };

    println!("Saved {}", saved.display());
    Ok(())
}

//! termrender CLI
//!
//! - `termrender crop`: pipe text through the renderer, cropped to a window
//! - `termrender demo`: redraw a progress line in place

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use termrender::RendererOptions;

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("TERMRENDER_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TERMRENDER_BUILD_DATE"),
    ")"
);

/// Position-aware terminal output renderer
#[derive(Debug, Parser)]
#[command(name = "termrender", version = VERSION, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Crop stdin to the visible window, keeping escape sequences intact
    Crop {
        #[command(flatten)]
        window: WindowArgs,
    },
    /// Redraw a progress line in place
    Demo {
        #[command(flatten)]
        window: WindowArgs,
        /// Number of progress steps
        #[arg(long, default_value_t = 50)]
        steps: u32,
        /// Delay between steps in milliseconds
        #[arg(long, default_value_t = 40)]
        delay_ms: u64,
        /// Simulated download size in bytes
        #[arg(long, default_value_t = 50_000_000)]
        total_bytes: u64,
    },
}

#[derive(Debug, Args)]
struct WindowArgs {
    /// Visible columns (defaults to the terminal width)
    #[arg(long, allow_negative_numbers = true)]
    width: Option<i32>,
    /// Visible rows (defaults to the terminal height)
    #[arg(long, allow_negative_numbers = true)]
    height: Option<i32>,
    /// Config file with `width`/`height` keys
    #[arg(long)]
    config: Option<PathBuf>,
}

impl WindowArgs {
    /// File options overridden by command-line flags.
    fn resolve(&self) -> Result<RendererOptions> {
        let file = match &self.config {
            Some(path) => RendererOptions::load(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => RendererOptions::load_or_default()?,
        };
        Ok(file.merge(RendererOptions {
            width: self.width,
            height: self.height,
        }))
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("TERMRENDER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Crop { window } => commands::crop::handle(window.resolve()?),
        Command::Demo {
            window,
            steps,
            delay_ms,
            total_bytes,
        } => commands::demo::handle(window.resolve()?, steps, delay_ms, total_bytes),
    }
}

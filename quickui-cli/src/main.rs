//! QuickUI CLI — open the bundled demos and manage styles.
//!
//! Commands:
//! - `demo <counter|sine|lissajous>` — open a demo window
//! - `style` — print the default style as TOML

mod demos;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use quickui_core::Style;
use quickui_tui::ShowExt;

use demos::Demo;

#[derive(Parser)]
#[command(name = "quickui", about = "QuickUI — sliders bound to live labels and plots")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a bundled demo in the terminal.
    Demo {
        #[arg(value_enum)]
        name: Demo,

        /// Style file (TOML). Defaults to the built-in style.
        #[arg(long)]
        style: Option<PathBuf>,

        /// Write logs to this file. Filter with RUST_LOG (default: info).
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
    /// Print the default style as TOML.
    Style,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo {
            name,
            style,
            log_file,
        } => run_demo(name, style.as_deref(), log_file.as_deref()),
        Commands::Style => {
            print!("{}", Style::default().to_toml_string()?);
            Ok(())
        }
    }
}

fn run_demo(name: Demo, style: Option<&Path>, log_file: Option<&Path>) -> Result<()> {
    if let Some(path) = log_file {
        init_logging(path)?;
    }
    let style = match style {
        Some(path) => Style::load(path)
            .with_context(|| format!("failed to load style from {}", path.display()))?,
        None => Style::default(),
    };
    tracing::info!(demo = ?name, title = %style.title, "opening demo");
    name.build().show_with_style(style)
}

/// Route tracing output to `path`; the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install logger: {err}"))?;
    Ok(())
}

//! keyfield CLI
//!
//! Replay scripted keyboard and mouse input through a headless text box.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keyfield_core::MonospaceFont;
use keyfield_widgets::TextBoxConfig;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod replay;
mod script;

use script::Script;

#[derive(Parser)]
#[command(name = "keyfield")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Headless text box replay tool", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed a frame script through a text box and print the result
    Replay {
        /// Text box configuration (TOML)
        #[arg(short, long)]
        config: PathBuf,

        /// Frame script (TOML)
        #[arg(short, long)]
        script: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Glyph advance of the monospace font
        #[arg(long, default_value = "8")]
        advance: f32,

        /// Line height of the monospace font
        #[arg(long, default_value = "16")]
        line_height: f32,
    },

    /// Validate a text box configuration
    Check {
        /// Text box configuration (TOML)
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Replay {
            config,
            script,
            json,
            advance,
            line_height,
        } => cmd_replay(
            &config,
            &script,
            json,
            MonospaceFont::new(advance, line_height),
        ),
        Commands::Check { config } => cmd_check(&config),
    }
}

fn load_config(path: &Path) -> Result<TextBoxConfig> {
    TextBoxConfig::load(path).with_context(|| format!("invalid config {}", path.display()))
}

fn cmd_replay(config: &Path, script: &Path, json: bool, font: MonospaceFont) -> Result<()> {
    let config = load_config(config)?;
    let script = Script::load(script)?;
    info!(steps = script.frames.len(), "replaying script");

    let report = replay::replay(&config, &script, font)?;
    if json {
        let out = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{out}");
    } else {
        print!("{report}");
    }
    Ok(())
}

fn cmd_check(path: &Path) -> Result<()> {
    let config = load_config(path)?;
    let area = config.area;

    println!("Config valid!");
    println!("  Area: {}x{} at ({}, {})", area.width, area.height, area.x, area.y);
    println!("  Password: {}", config.password);
    println!("  Read-only: {}", config.read_only);
    println!(
        "  Key repeat: {}ms delay, {}ms interval",
        config.timing.initial_delay_ms, config.timing.repeat_interval_ms
    );
    Ok(())
}

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scrollstage_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "scrollstage")]
#[command(author, version, about = "A scroll-driven terminal page")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the terminal page
    Run,
    /// Replay an input script headlessly and print one JSON snapshot per frame
    Simulate {
        /// Script file (wheel, down, move, up, frames, resize)
        #[arg(short = 's', long)]
        script: PathBuf,
        /// Extra frames to run after the script ends
        #[arg(short = 'f', long, default_value_t = 0)]
        frames: u32,
        /// Terminal width in columns
        #[arg(long, default_value_t = 120)]
        width: u16,
        /// Terminal height in rows
        #[arg(long, default_value_t = 40)]
        height: u16,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default config file if none exists
    Init,
    /// Print the effective config
    Show,
    /// Print the config file location
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    let interactive = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, interactive)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Simulate {
            script,
            frames,
            width,
            height,
        }) => commands::simulate::run(config, &script, frames, width, height),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init => commands::config::init(cli.config.as_deref()),
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Path => commands::config::path(cli.config.as_deref()),
        },
    }
}

/// Initialize logging
///
/// The terminal page owns stdout, so `run` logs to a file in the data
/// directory. Other commands log to stderr to keep stdout for output.
fn init_logging(config: &AppConfig, interactive: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if interactive {
        let log_path = config.log_path();
        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&log_path)?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

mod error;
mod logger;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use panda_config::load_config;
use panda_generator::{
    generate_global_css, ChannelHookBus, Context, HookDispatcher, GENERATOR_CSS_HOOK,
};
use panda_stylesheet::Stylesheet;
use tracing::{info, warn};

use crate::error::CliError;

const DEFAULT_CONFIG: &str = "panda.config.json";

#[derive(Parser)]
#[command(name = "panda")]
#[command(about = "Panda global CSS generator")]
#[command(version)]
struct Cli {
    /// Log level; takes precedence over RUST_LOG (default: warn)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate global.css from a config file
    Build {
        /// Config file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,

        /// Output directory (overrides `outdir` from the config)
        #[arg(short, long)]
        outdir: Option<PathBuf>,
    },

    /// Check a config file without writing output
    Check {
        /// Config file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    logger::init(cli.log_level.as_deref())?;

    match cli.command {
        Command::Build { config, outdir } => {
            let path = cmd_build(&config, outdir.as_deref()).await?;
            eprintln!("Built: {}", path.display());
        }
        Command::Check { config } => {
            cmd_check(&config)?;
            eprintln!("OK: {}", config.display());
        }
    }
    Ok(())
}

/// Generate global CSS and write it to the output directory.
async fn cmd_build(config_path: &Path, outdir: Option<&Path>) -> Result<PathBuf, CliError> {
    let config = load_config(config_path)?;
    info!(config = %config_path.display(), "config loaded");

    let mut dispatcher = HookDispatcher::new();
    dispatcher.on(GENERATOR_CSS_HOOK, |event| {
        info!(artifact = %event.artifact, "artifact generated");
        Ok(())
    });
    let (bus, rx) = ChannelHookBus::new();
    let listeners = tokio::spawn(dispatcher.run(rx));

    let mut sheet = Stylesheet::new();
    let artifact = generate_global_css(&mut Context::new(&config, &mut sheet, &bus))?;
    drop(bus);

    let dir = outdir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(config.outdir()));
    let path = write_artifact(&dir, &artifact.name, &sheet.to_css())?;

    // Let queued hook listeners finish before the runtime shuts down.
    if let Err(e) = listeners.await {
        warn!("hook dispatcher stopped: {e}");
    }

    Ok(path)
}

/// Run generation against a throwaway style-sheet.
fn cmd_check(config_path: &Path) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let (bus, _rx) = ChannelHookBus::new();
    let mut sheet = Stylesheet::new();
    generate_global_css(&mut Context::new(&config, &mut sheet, &bus))?;
    Ok(())
}

fn write_artifact(dir: &Path, name: &str, css: &str) -> Result<PathBuf, CliError> {
    let path = dir.join(name);
    fs::create_dir_all(dir).map_err(|source| CliError::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    fs::write(&path, css).map_err(|source| CliError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

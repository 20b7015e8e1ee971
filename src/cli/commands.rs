use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::logging::init_logging;
use crate::config::Config;
use crate::content::{default_content, load_content};
use crate::session::{SessionController, TallyMode};
use crate::utils::format_path_with_tilde;

#[derive(Parser)]
#[command(name = "swipedeck")]
#[command(version = "0.1.0")]
#[command(about = "Swipe through a deck of statements and see what your answers add up to")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub play: PlayArgs,

    /// Config file (default: <config dir>/swipedeck/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive swipe session (default)
    Play(PlayArgs),
    /// Load and validate a content file
    Validate {
        /// Content JSON file
        file: PathBuf,
    },
    /// Show the resolved config path and effective configuration
    Config,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Content JSON file (default: built-in mood deck)
    #[arg(long, value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Tally mode, overriding the config file
    #[arg(long, value_enum)]
    pub mode: Option<TallyMode>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Play(_)));
    init_logging(cli.log_file.as_deref(), interactive)?;

    match cli.command {
        Some(Commands::Validate { file }) => validate(&file),
        Some(Commands::Config) => show_config(cli.config.as_deref()),
        Some(Commands::Play(args)) => play(&args, cli.config.as_deref()),
        None => play(&cli.play, cli.config.as_deref()),
    }
}

fn play(args: &PlayArgs, config_path: Option<&Path>) -> Result<()> {
    let (mut config, _) = Config::load(config_path)?;
    if let Some(mode) = args.mode {
        config.session.tally_mode = mode;
    }

    let content = match &args.content {
        Some(path) => load_content(path)?,
        None => default_content()?,
    };
    tracing::info!(
        items = content.items.len(),
        mode = ?config.session.tally_mode,
        "starting session"
    );

    let session = SessionController::from_content(content, config.session_options());
    crate::tui::run_interactive(session, &config)
}

fn validate(file: &Path) -> Result<()> {
    let content = load_content(file)?;

    println!("Content OK: {}", format_path_with_tilde(file));
    println!("  Items: {}", content.items.len());
    println!("  Tagged items: {}", content.tagged_items());
    println!("  Categories: {}", content.categories.len());

    let unknown = content.unknown_tags();
    if !unknown.is_empty() {
        let names: Vec<&str> = unknown.iter().map(|tag| tag.as_str()).collect();
        println!("  Unknown tags: {}", names.join(", "));
    }

    Ok(())
}

fn show_config(explicit: Option<&Path>) -> Result<()> {
    let (config, path) = Config::load(explicit)?;

    if path.exists() {
        println!("Config file: {}", format_path_with_tilde(&path));
    } else {
        println!("Config file: {} (not found, using defaults)", format_path_with_tilde(&path));
    }
    println!();
    print!("{}", config.to_toml()?);

    Ok(())
}

//! Vocab CLI
//!
//! Command-line and terminal interface for vocab - flashcard sets and
//! flip-card study.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use vocab_core::{Config, StorageError, Store};

mod commands;
mod logging;
mod output;
mod tui;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "vocab")]
#[command(about = "vocab - Vocabulary flashcard sets and flip-card study")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use this config file instead of the default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI interface
    Tui,
    /// Study a set in the TUI
    Study {
        /// Set name (or numeric id)
        set: String,
    },
    /// Manage flashcard sets
    Set {
        #[command(subcommand)]
        command: SetCommands,
    },
    /// Manage cards in a set
    Card {
        #[command(subcommand)]
        command: CardCommands,
    },
    /// Show database location and contents
    Status,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum SetCommands {
    /// Create a new set
    #[command(alias = "add")]
    Create {
        /// Set name (must be unique)
        name: String,
    },
    /// List all sets
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand)]
enum CardCommands {
    /// Add a card to a set
    #[command(alias = "create")]
    Add {
        /// Set name (or numeric id)
        set: String,
        /// The word shown first
        word: String,
        /// The definition revealed on flip
        definition: String,
    },
    /// List the cards of a set
    #[command(alias = "ls")]
    List {
        /// Set name (or numeric id)
        set: String,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            if let Some(hint) = recovery_hint(&e) {
                eprintln!("\nHint: {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

/// Recovery suggestion from the first storage failure in the error chain
fn recovery_hint(err: &anyhow::Error) -> Option<&'static str> {
    err.chain().find_map(|cause| {
        if let Some(e) = cause.downcast_ref::<vocab_core::Error>() {
            e.recovery_suggestion()
        } else {
            cause
                .downcast_ref::<StorageError>()
                .and_then(StorageError::recovery_suggestion)
        }
    })
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));
    let config_path = cli.config.as_ref();

    // Config commands don't need the store
    let command = match cli.command {
        Some(Commands::Config { command }) => {
            return handle_config_command(command, config_path, &output);
        }
        other => other,
    };

    let config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    let tui_mode = matches!(
        command,
        None | Some(Commands::Tui) | Some(Commands::Study { .. })
    );
    logging::init(&config, tui_mode);

    let mut store = Store::open(&config).context("Failed to open flashcard database")?;

    let result = match command {
        None | Some(Commands::Tui) => tui::run(&mut store, None),
        Some(Commands::Study { set }) => tui::run(&mut store, Some(set)),
        Some(Commands::Set { command }) => handle_set_command(command, &mut store, &output),
        Some(Commands::Card { command }) => handle_card_command(command, &mut store, &output),
        Some(Commands::Status) => commands::status::show(&store, &config, &output),
        Some(Commands::Config { command }) => handle_config_command(command, config_path, &output),
    };

    let closed = store.close().context("Failed to close flashcard database");
    result?;
    closed
}

fn handle_set_command(command: SetCommands, store: &mut Store, output: &Output) -> Result<()> {
    match command {
        SetCommands::Create { name } => commands::set::create(store, name, output),
        SetCommands::List => commands::set::list(store, output),
    }
}

fn handle_card_command(command: CardCommands, store: &mut Store, output: &Output) -> Result<()> {
    match command {
        CardCommands::Add {
            set,
            word,
            definition,
        } => commands::card::add(store, set, word, definition, output),
        CardCommands::List { set } => commands::card::list(store, set, output),
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}

//! To-do CLI - Main Entry Point
//!
//! A thin presentation layer over the `todo_store` library: every invocation
//! hydrates the store, dispatches at most one action, and prints the list.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use todo_store::config::Config;
use todo_store::formatting::{ListFilter, format_items};
use todo_store::{Action, FileStorage, Store};
use tracing_subscriber::EnvFilter;

/// Manage a local to-do list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long, default_value = "todo.toml")]
    config: PathBuf,

    /// Directory holding the persisted list (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show items
    List {
        /// Only items not yet done
        #[arg(long, conflicts_with = "done")]
        pending: bool,
        /// Only items marked done
        #[arg(long)]
        done: bool,
    },
    /// Add an item at the top of the list
    Add {
        title: String,
        #[arg(long)]
        details: Option<String>,
    },
    /// Replace the title and details of an item
    Edit {
        id: String,
        title: String,
        #[arg(long)]
        details: Option<String>,
    },
    /// Flip an item between pending and done
    Toggle { id: String },
    /// Delete an item
    Rm { id: String },
    /// Move the item at index FROM to index TO
    Mv { from: usize, to: usize },
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Unknown ids are a harmless no-op for the store; still tell the user
fn warn_if_missing(store: &Store<FileStorage>, id: &str) {
    if !store.state().contains(id) {
        eprintln!("Warning: no item with id '{}'", id);
    }
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    let mut config = Config::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }

    init_tracing(&config.log_level);

    let storage = FileStorage::new(&config.data_dir);
    let mut store = Store::with_key(storage, config.storage_key.as_str());
    store.hydrate();

    let filter = match &args.command {
        Command::List { pending: true, .. } => ListFilter::Pending,
        Command::List { done: true, .. } => ListFilter::Done,
        _ => ListFilter::All,
    };

    let action = match args.command {
        Command::List { .. } => None,
        Command::Add { title, details } => Some(Action::add(title, details)),
        Command::Edit { id, title, details } => {
            warn_if_missing(&store, &id);
            Some(Action::edit(id, title, details))
        }
        Command::Toggle { id } => {
            warn_if_missing(&store, &id);
            Some(Action::toggle_done(id))
        }
        Command::Rm { id } => {
            warn_if_missing(&store, &id);
            Some(Action::delete(id))
        }
        Command::Mv { from, to } => Some(Action::Move { from, to }),
    };

    if let Some(action) = action {
        store
            .dispatch(action)
            .context("failed to update the to-do list")?;
    }

    println!("{}", format_items(store.state(), filter));
    Ok(())
}

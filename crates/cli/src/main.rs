use anyhow::Result;
use clap::{Parser, Subcommand};
use learning_tracker_core::env_config::Settings;
use learning_tracker_service::Tracker;
use learning_tracker_storage::{FileBlobStore, Storage};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::entries::{MediaCommands, ProductCommands, ShipCommands, SkillCommands, WeekCommands};

#[derive(Parser)]
#[command(name = "learning-tracker")]
#[command(about = "Track skills, products, weekly plans, media notes and ship events", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Progress, weekly counts and the active week
    Dashboard,
    /// Print the full state
    Show,
    /// Replace the state with demonstration data
    Seed,
    /// Clear everything
    Reset,
    /// Write a backup of the full state
    Export {
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long, conflicts_with = "out")]
        stdout: bool,
    },
    /// Replace the state with a backup file
    Import {
        file: PathBuf,
    },
    /// Show resolved configuration
    Settings,
    #[command(subcommand)]
    Product(ProductCommands),
    #[command(subcommand)]
    Skill(SkillCommands),
    #[command(subcommand)]
    Media(MediaCommands),
    #[command(subcommand)]
    Week(WeekCommands),
    #[command(subcommand)]
    Ship(ShipCommands),
}

pub(crate) type FileTracker = Tracker<FileBlobStore>;

pub(crate) fn open_tracker(settings: &Settings) -> FileTracker {
    Tracker::open(Storage::new(FileBlobStore::new(&settings.data_dir)))
}

pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env();
    let mut tracker = open_tracker(&settings);

    match cli.command {
        Commands::Dashboard => commands::state::run_dashboard(&tracker, &settings),
        Commands::Show => print_json(tracker.state()),
        Commands::Seed => commands::state::run_seed(&mut tracker),
        Commands::Reset => commands::state::run_reset(&mut tracker),
        Commands::Export { out, stdout } => commands::state::run_export(&tracker, out, stdout),
        Commands::Import { file } => commands::state::run_import(&mut tracker, &file),
        Commands::Settings => commands::state::run_settings(&tracker, &settings),
        Commands::Product(cmd) => commands::entries::run_product(&mut tracker, cmd),
        Commands::Skill(cmd) => commands::entries::run_skill(&mut tracker, cmd),
        Commands::Media(cmd) => commands::entries::run_media(&mut tracker, cmd),
        Commands::Week(cmd) => commands::entries::run_week(&mut tracker, cmd),
        Commands::Ship(cmd) => commands::entries::run_ship(&mut tracker, cmd),
    }
}

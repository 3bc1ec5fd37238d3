use anyhow::{Context as _, Result};
use learning_tracker_core::constants::{EXPORT_FILE_NAME, STATE_VERSION, STORAGE_KEY};
use learning_tracker_core::env_config::Settings;
use std::path::{Path, PathBuf};

use crate::{print_json, FileTracker};

pub(crate) fn run_dashboard(tracker: &FileTracker, settings: &Settings) -> Result<()> {
    print_json(&tracker.dashboard(settings.recent_ships))
}

pub(crate) fn run_seed(tracker: &mut FileTracker) -> Result<()> {
    tracker.seed();
    println!(
        "Seeded {} products, {} skills, {} media sessions and {} ship entries",
        tracker.state().products.len(),
        tracker.state().skills.len(),
        tracker.state().media.len(),
        tracker.state().ship_log.len(),
    );
    Ok(())
}

pub(crate) fn run_reset(tracker: &mut FileTracker) -> Result<()> {
    tracker.reset();
    println!("State reset");
    Ok(())
}

pub(crate) fn run_export(tracker: &FileTracker, out: Option<PathBuf>, stdout: bool) -> Result<()> {
    if stdout {
        println!("{}", tracker.export()?);
        return Ok(());
    }
    let path = out.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
    tracker.export_to(&path)?;
    println!("Exported to {}", path.display());
    Ok(())
}

pub(crate) fn run_import(tracker: &mut FileTracker, file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    tracker.import(&raw).context("Failed import")?;
    println!("Imported successfully");
    Ok(())
}

pub(crate) fn run_settings(tracker: &FileTracker, settings: &Settings) -> Result<()> {
    let store = tracker.storage().store();
    print_json(&serde_json::json!({
        "basePath": settings.base_path,
        "dataDir": store.dir().display().to_string(),
        "blobPath": store.path_for(STORAGE_KEY).display().to_string(),
        "version": STATE_VERSION,
        "recentShips": settings.recent_ships,
    }))
}

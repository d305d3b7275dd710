//! Storage Layer
//!
//! Locates the configuration and data directories and persists the alert
//! state between runs.

pub mod state;

use anyhow::Result;
use std::path::PathBuf;

pub use state::{load_state, save_state, AlertState};

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("org", "smogwatch", "smogwatch")
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
}

/// Get the application data directory
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = project_dirs()?.data_dir().to_path_buf();
    std::fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = project_dirs()?.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(config_dir)
}

/// Default location of the persisted alert state
pub fn default_state_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(state::STATE_FILE))
}

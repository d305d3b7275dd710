//! Persisted alert state
//!
//! Remembers whether the last published status was an alert, so recoveries
//! are announced once and quiet periods stay quiet.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::analysis::AqiCategory;

pub const STATE_FILE: &str = "alert_state.json";

/// State written after every assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertState {
    /// Air was worse than good
    pub bad_air: bool,
    /// Level of the last assessment
    pub category: AqiCategory,
    /// Mean PM2.5 of the last assessment
    pub average: f64,
}

/// Load the previous state; `None` when no state was saved yet
pub fn load_state(path: &Path) -> Result<Option<AlertState>> {
    if !path.exists() {
        debug!("No alert state at {:?}", path);
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let state: AlertState = serde_json::from_str(&content)
        .with_context(|| format!("Corrupt alert state in {:?}", path))?;
    Ok(Some(state))
}

/// Save the state
pub fn save_state(state: &AlertState, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(state)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_missing_state() {
        let dir = tempdir().unwrap();
        let loaded = load_state(&dir.path().join(STATE_FILE)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_and_load_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STATE_FILE);
        let state = AlertState {
            bad_air: true,
            category: AqiCategory::Unhealthy,
            average: 83.0,
        };

        save_state(&state, &path).unwrap();
        assert_eq!(load_state(&path).unwrap(), Some(state));
    }

    #[test]
    fn test_corrupt_state() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "{{ not json").unwrap();
        assert!(load_state(temp_file.path()).is_err());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! Holds transient state that should survive restarts but is not
//! user-configurable, kept apart from the user-editable TOML preferences.
//! The state file lives in the data directory (see [`paths::data_dir`]) and
//! a missing or corrupt file silently falls back to defaults.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Manifest of the tour shown when the application was closed.
    /// Reopened on the next start when no tour is given on the command line.
    #[serde(default)]
    pub last_tour: Option<PathBuf>,

    /// Last directory a tour was opened from.
    /// Used as the initial directory of the open dialog.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns `(state, optional_warning)`; failures fall back to the
    /// default state with a message the caller can report.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(_) => (
                        Self::default(),
                        Some("state file could not be parsed; starting fresh".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("state file could not be read; starting fresh".to_string()),
            ),
        }
    }

    /// Saves application state to the default location.
    ///
    /// Creates the parent directory if needed. Returns a warning message on
    /// failure.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("no data directory available for state file".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("state directory could not be created".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("state file could not be written".to_string());
                }
                None
            }
            Err(_) => Some("state file could not be created".to_string()),
        }
    }

    /// Returns the full path to the state file with optional override.
    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Remembers the tour manifest and its directory for the next session.
    pub fn remember_tour(&mut self, manifest_path: &Path) {
        self.last_tour = Some(manifest_path.to_path_buf());
        if let Some(parent) = manifest_path.parent() {
            self.last_open_directory = Some(parent.to_path_buf());
        }
    }
}

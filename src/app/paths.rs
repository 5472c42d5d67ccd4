// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! Single source of truth for where settings and state files live.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--data-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_TOUR_CONFIG_DIR`, `ICED_TOUR_DATA_DIR`)
//! 4. **Platform default** - via the `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedTour";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOUR_CONFIG_DIR";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_TOUR_DATA_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for the data directory (set once at startup).
static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Stores the `--config-dir` and `--data-dir` flag values.
///
/// Must be called once at application startup, before any path resolution.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_cli_overrides(config_dir: Option<String>, data_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
    CLI_DATA_DIR
        .set(data_dir.map(PathBuf::from))
        .expect("CLI data dir override already initialized");
}

fn resolve(
    override_path: Option<PathBuf>,
    cli_override: &OnceLock<Option<PathBuf>>,
    env_name: &str,
    platform_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }
    if let Some(path) = cli_override.get().and_then(Clone::clone) {
        return Some(path);
    }
    if let Ok(env_path) = std::env::var(env_name) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }
    platform_dir.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory holding `settings.toml`.
///
/// Returns `None` if no platform config directory can be determined.
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Returns the config directory, preferring the given override.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        &CLI_CONFIG_DIR,
        ENV_CONFIG_DIR,
        dirs::config_dir(),
    )
}

/// Returns the directory holding persisted application state.
///
/// State is kept apart from user preferences, which live in the config
/// directory.
pub fn data_dir() -> Option<PathBuf> {
    data_dir_with_override(None)
}

/// Returns the data directory, preferring the given override.
pub fn data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir())
}

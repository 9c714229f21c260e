// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - the `--config-dir` CLI flag, or a path passed
//!    by tests
//! 2. **Environment variable** `QA_CONSOLE_CONFIG_DIR`
//! 3. **Platform default** - via the `dirs` crate
//!
//! The console keeps no other local state, so there is no data directory.

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "QaConsole";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "QA_CONSOLE_CONFIG_DIR";

/// Returns the application config directory path.
///
/// - Linux: `~/.config/QaConsole/`
/// - macOS: `~/Library/Application Support/QaConsole/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\QaConsole\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`CHAT_LENS_DATA_DIR`, `CHAT_LENS_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The data directory holds the message store (`messages.db`) and the
//! downloaded media (`media/`). The config directory holds `settings.toml`.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
pub const APP_NAME: &str = "ChatLens";

/// Default message store file name inside the data directory.
pub const DATABASE_FILE: &str = "messages.db";

pub const ENV_DATA_DIR: &str = "CHAT_LENS_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "CHAT_LENS_CONFIG_DIR";

/// Bearer token for the authentication service. Read from the environment only.
pub const ENV_AUTH_TOKEN: &str = "CHAT_LENS_AUTH_TOKEN";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records `--data-dir` / `--config-dir` once at startup.
///
/// Later calls are ignored; the first values win.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !(data_set && config_set) {
        tracing::warn!("CLI path overrides were already initialized; ignoring");
    }
}

fn from_env(var: &str) -> Option<PathBuf> {
    std::env::var(var)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application data directory path.
///
/// Platform defaults:
/// - Linux: `~/.local/share/ChatLens/`
/// - macOS: `~/Library/Application Support/ChatLens/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\ChatLens\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| CLI_DATA_DIR.get().and_then(Clone::clone))
        .or_else(|| from_env(ENV_DATA_DIR))
        .or_else(|| dirs::data_dir().map(|path| path.join(APP_NAME)))
}

/// Returns the application config directory path (`settings.toml` lives here).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| CLI_CONFIG_DIR.get().and_then(Clone::clone))
        .or_else(|| from_env(ENV_CONFIG_DIR))
        .or_else(|| dirs::config_dir().map(|path| path.join(APP_NAME)))
}

/// Auth service bearer token, if one is set in the environment.
pub fn auth_token() -> Option<String> {
    std::env::var(ENV_AUTH_TOKEN)
        .ok()
        .filter(|token| !token.trim().is_empty())
}

// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery;
use crate::ui::media_viewer;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::password;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Viewer(media_viewer::Message),
    Password(password::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for toast auto-dismiss
    WindowResized(Size),
    EscapePressed,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Chat whose media the gallery shows.
    pub chat: Option<String>,
    /// Message store file, overriding `[storage] database_path`.
    pub database: Option<PathBuf>,
    /// Media root, overriding `[storage] media_dir`.
    pub media_dir: Option<PathBuf>,
    /// Optional data directory override.
    /// Takes precedence over `CHAT_LENS_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CHAT_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Open the Change Password form on startup.
    pub open_password: bool,
}

// SPDX-License-Identifier: MPL-2.0
//! `chat_lens` shows the photos and videos of a chat from a local message
//! store, and lets the user change their account password.
//!
//! It is built with the Iced GUI framework, localized with Fluent and split
//! into a pure domain layer, application ports and infrastructure adapters.

#![doc(html_root_url = "https://docs.rs/chat_lens/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod media;
pub mod ui;
pub mod video_player;

// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`store`]: Read access to the chat message store
//! - [`media`]: Local media resolution, photo decoding and video frame extraction
//! - [`auth`]: Remote password verification and update
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `FFmpeg` or SQLite types)
//! - Traits are `Send + Sync` so adapters can be shared with background tasks
//! - Synchronous ports are called from `spawn_blocking`; only [`auth`] returns futures

pub mod auth;
pub mod media;
pub mod store;

pub use auth::{AuthFuture, AuthService};
pub use media::{ImageDecoder, ImageScaler, MediaResolver, ThumbnailExtractor};
pub use store::MessageStore;

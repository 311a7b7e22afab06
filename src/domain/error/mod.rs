// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides pure domain error types that are independent
//! of external crates and infrastructure concerns. Each error exposes an
//! `i18n_key()` so the presentation layer can show a localized message.

mod auth;
mod media;
mod store;

pub use auth::AuthError;
pub use media::MediaError;
pub use store::StoreError;

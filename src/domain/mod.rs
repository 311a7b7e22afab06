// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`account`]: Password change request and its local validation rules
//! - [`error`]: Domain error types ([`StoreError`](error::StoreError),
//!   [`MediaError`](error::MediaError), [`AuthError`](error::AuthError))
//! - [`media`]: Media types ([`MediaKind`](media::MediaKind), [`RawImage`](media::RawImage))
//! - [`message`]: Message store records ([`MessageRecord`](message::MessageRecord),
//!   [`MessageId`](message::MessageId), [`ChatId`](message::ChatId))

pub mod account;
pub mod error;
pub mod media;
pub mod message;

// SPDX-License-Identifier: MPL-2.0
//! Message store domain types.
//!
//! Records are owned by an external message store and are read-only from the
//! point of view of this application.

pub mod types;

pub use types::{ChatId, MessageId, MessageKind, MessageRecord};

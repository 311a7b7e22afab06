// SPDX-License-Identifier: MPL-2.0
//! Message store port.

use crate::domain::error::StoreError;
use crate::domain::message::{ChatId, MessageRecord};

/// Read-only access to the persisted message log.
///
/// The store handle is always passed explicitly to the code that needs it;
/// there is no process-wide database.
pub trait MessageStore: Send + Sync {
    /// Returns the non-deleted messages of `chat`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the store cannot be queried.
    fn messages_for_chat(&self, chat: &ChatId) -> Result<Vec<MessageRecord>, StoreError>;
}

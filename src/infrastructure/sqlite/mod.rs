// SPDX-License-Identifier: MPL-2.0
//! SQLite adapter for the [`MessageStore`] port.
//!
//! The store file belongs to the chat client. [`SqliteMessageStore::open`]
//! never creates, migrates or reconfigures it; only fixtures built with
//! [`SqliteMessageStore::create`] or [`SqliteMessageStore::open_in_memory`]
//! get a schema.
//!
//! The connection sits behind a `Mutex` because the store is shared between
//! the UI thread and background gallery loads.

mod migrations;

use crate::application::port::MessageStore;
use crate::domain::error::StoreError;
use crate::domain::message::{ChatId, MessageId, MessageKind, MessageRecord};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::sync::Mutex;

pub struct SqliteMessageStore {
    conn: Mutex<Connection>,
}

impl SqliteMessageStore {
    /// Opens the existing store at `path` read-only.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the file is missing or cannot
    /// be opened.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(unavailable)?;

        tracing::info!("message store opened read-only at {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Creates (or reopens writable) a store file with the message schema.
    /// Used by tests and benchmarks to build fixtures.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the file cannot be created or migrated.
    pub fn create(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(unavailable)?;
        migrations::run(&conn).map_err(unavailable)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Opens a private in-memory store. Used by tests and benchmarks.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if SQLite cannot allocate the database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(unavailable)?;
        migrations::run(&conn).map_err(unavailable)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("store lock poisoned: {e}")))?;
        f(&conn).map_err(|e| StoreError::Query(e.to_string()))
    }

    /// Inserts or replaces a message row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] if the write fails.
    pub fn insert_message(&self, record: &MessageRecord) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO messages (object_id, chat_id, type, is_deleted, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![
                    record.id.as_str(),
                    record.chat_id.as_str(),
                    record.kind.tag(),
                    record.is_deleted,
                    record.created_at,
                ],
            )?;
            Ok(())
        })
    }
}

impl MessageStore for SqliteMessageStore {
    fn messages_for_chat(&self, chat: &ChatId) -> Result<Vec<MessageRecord>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT object_id, chat_id, type, is_deleted, created_at
                 FROM messages
                 WHERE chat_id = ?1 AND is_deleted = 0
                 ORDER BY created_at ASC, object_id ASC",
            )?;
            let rows = stmt.query_map([chat.as_str()], |row| {
                let type_tag: String = row.get(2)?;
                Ok(MessageRecord {
                    id: MessageId::new(row.get::<_, String>(0)?),
                    chat_id: ChatId::new(row.get::<_, String>(1)?),
                    kind: MessageKind::from_tag(&type_tag),
                    is_deleted: row.get(3)?,
                    created_at: row.get(4)?,
                })
            })?;
            let records = rows.collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(records)
        })
    }
}

/// Stand-in used when the store file could not be opened.
///
/// Every query fails, so the gallery logs the reason and shows an empty list.
#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl MessageStore for UnavailableStore {
    fn messages_for_chat(&self, _chat: &ChatId) -> Result<Vec<MessageRecord>, StoreError> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }
}

fn unavailable(err: rusqlite::Error) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

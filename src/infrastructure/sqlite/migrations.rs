// SPDX-License-Identifier: MPL-2.0
use rusqlite::Connection;

/// Creates the message table when the store is new.
///
/// The schema mirrors the columns the gallery reads; other columns written
/// by the chat client are ignored.
pub fn run(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS messages (
            object_id   TEXT PRIMARY KEY,
            chat_id     TEXT NOT NULL,
            type        TEXT NOT NULL,
            is_deleted  INTEGER NOT NULL DEFAULT 0,
            created_at  INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_messages_chat
            ON messages(chat_id, created_at);
        ",
    )?;

    tracing::debug!("message store migrations complete");
    Ok(())
}

// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failure while reading the message store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be opened (missing file, bad permissions).
    Unavailable(String),
    /// A query failed while running.
    Query(String),
    /// A row held data the domain cannot represent.
    Corrupt(String),
}

impl StoreError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            StoreError::Unavailable(_) => "error-store-unavailable",
            StoreError::Query(_) => "error-store-query",
            StoreError::Corrupt(_) => "error-store-corrupt",
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Message store unavailable: {msg}"),
            StoreError::Query(msg) => write!(f, "Message store query failed: {msg}"),
            StoreError::Corrupt(msg) => write!(f, "Message store row is corrupt: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

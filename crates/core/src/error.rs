// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for vd-core operations.

use std::fmt;

use thiserror::Error;

/// Why the store refused a fixture row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Primary key already present.
    DuplicateKey,
    /// Non-null reference with no matching parent row.
    ForeignKey,
    /// Absent value in a NOT NULL column.
    NotNull,
    /// Any other store-level refusal (syntax, type, I/O).
    Other,
}

impl Rejection {
    /// Classify a SQLite failure by its extended result code.
    pub fn classify(err: &rusqlite::Error) -> Self {
        use rusqlite::ffi;

        match err.sqlite_error().map(|e| e.extended_code) {
            Some(ffi::SQLITE_CONSTRAINT_PRIMARYKEY) | Some(ffi::SQLITE_CONSTRAINT_UNIQUE) => {
                Rejection::DuplicateKey
            }
            Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY) => Rejection::ForeignKey,
            Some(ffi::SQLITE_CONSTRAINT_NOTNULL) => Rejection::NotNull,
            _ => Rejection::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::DuplicateKey => "duplicate primary key",
            Rejection::ForeignKey => "foreign key violation",
            Rejection::NotNull => "not-null violation",
            Rejection::Other => "rejected by store",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// All possible errors that can occur in vd-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{table} row {id}: {kind} ({source})")]
    Rejected {
        table: &'static str,
        id: i64,
        kind: Rejection,
        #[source]
        source: rusqlite::Error,
    },

    #[error("input is not a SQL script (starts with '<')\n  hint: the download probably returned an HTML page")]
    NotSqlScript,

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

impl Error {
    /// Wrap a failed insert with the table and key it was writing.
    pub fn rejected(table: &'static str, id: i64, source: rusqlite::Error) -> Self {
        Error::Rejected {
            table,
            id,
            kind: Rejection::classify(&source),
            source,
        }
    }
}

/// A specialized Result type for vd-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! SQLite database handle with connection pooling.
//!
//! Every store access acquires a pooled connection, runs a single
//! parameterized statement, and releases the connection. No transaction
//! spans multiple statements.

use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use thiserror::Error;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to acquire database connection: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("{0} not found")]
    NotFound(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Cloneable handle to the pooled SQLite database.
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Open (or create) the database file at `db_path` and initialize the
    /// schema.
    pub fn open(db_path: &Path) -> StorageResult<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).ok();
        }

        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder().max_size(10).build(manager)?;

        let db = Self { pool };
        db.init_schema()?;
        Ok(db)
    }

    /// In-memory database for tests. A single-connection pool, since each
    /// SQLite in-memory connection sees its own database.
    pub fn in_memory() -> StorageResult<Self> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder().max_size(1).build(manager)?;
        let db = Self { pool };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> StorageResult<()> {
        let conn = self.connection()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS audit_reports (
                id         TEXT PRIMARY KEY,
                contract   TEXT NOT NULL,
                findings   TEXT NOT NULL,
                severity   TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    pub fn connection(&self) -> StorageResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

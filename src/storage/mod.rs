// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Relational Storage Module
//!
//! Persistent storage is one SQLite table of audit reports, accessed through
//! an r2d2 connection pool. Each gateway call acquires a pooled connection,
//! runs a single parameterized statement, and releases the connection.
//!
//! ## Table Layout
//!
//! ```text
//! audit_reports
//!   id          TEXT PRIMARY KEY   -- server-assigned UUID
//!   contract    TEXT NOT NULL
//!   findings    TEXT NOT NULL
//!   severity    TEXT NOT NULL
//!   created_at  TEXT NOT NULL      -- RFC 3339, server-assigned
//! ```
//!
//! Concurrent writers from different clients can race; the last write wins
//! on update. There is no row locking and no optimistic concurrency token.

pub mod audits;
pub mod database;

pub use audits::AuditRepository;
pub use database::{Database, DbConnection, DbPool, StorageError, StorageResult};

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Audit report repository.
//!
//! Each operation is one parameterized SQL statement against the
//! `audit_reports` table, executed on a freshly acquired pooled connection.

use chrono::{DateTime, Utc};
use rusqlite::params;

use super::database::{Database, StorageError, StorageResult};
use crate::models::AuditRecord;

/// Repository for audit report rows.
pub struct AuditRepository<'a> {
    db: &'a Database,
}

impl<'a> AuditRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List all audit reports in the table's natural order.
    pub fn list(&self) -> StorageResult<Vec<AuditRecord>> {
        let conn = self.db.connection()?;
        let mut stmt = conn
            .prepare("SELECT id, contract, findings, severity, created_at FROM audit_reports")?;
        let records = stmt
            .query_map([], row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Insert a new audit report row.
    pub fn insert(&self, record: &AuditRecord) -> StorageResult<()> {
        let conn = self.db.connection()?;
        conn.execute(
            "INSERT INTO audit_reports (id, contract, findings, severity, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.id,
                record.contract,
                record.findings,
                record.severity,
                record.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Overwrite the mutable fields of the row with `id` and return the
    /// updated record. `id` and `created_at` are never touched.
    pub fn update(
        &self,
        id: &str,
        contract: &str,
        findings: &str,
        severity: &str,
    ) -> StorageResult<AuditRecord> {
        let conn = self.db.connection()?;
        let result = conn.query_row(
            "UPDATE audit_reports SET contract = ?1, findings = ?2, severity = ?3
             WHERE id = ?4
             RETURNING id, contract, findings, severity, created_at",
            params![contract, findings, severity, id],
            row_to_record,
        );

        match result {
            Ok(record) => Ok(record),
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                Err(StorageError::NotFound(format!("Audit {id}")))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Delete the row with `id`.
    pub fn delete(&self, id: &str) -> StorageResult<()> {
        let conn = self.db.connection()?;
        let affected = conn.execute("DELETE FROM audit_reports WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(StorageError::NotFound(format!("Audit {id}")));
        }
        Ok(())
    }
}

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<AuditRecord> {
    let created_at: String = row.get(4)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|err| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                rusqlite::types::Type::Text,
                Box::new(err),
            )
        })?
        .with_timezone(&Utc);

    Ok(AuditRecord {
        id: row.get(0)?,
        contract: row.get(1)?,
        findings: row.get(2)?,
        severity: row.get(3)?,
        created_at,
    })
}

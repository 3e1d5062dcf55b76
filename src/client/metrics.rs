// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Severity summary of the record list, backing the dashboard's metric
//! cards. Counts are keyed by the raw severity strings, so labels outside
//! the well-known levels still show up.

use std::collections::BTreeMap;

use crate::models::{AuditRecord, Severity};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditMetrics {
    /// Total number of audit reports.
    pub total: usize,
    /// Report count per severity label.
    pub severity_counts: BTreeMap<String, usize>,
}

impl AuditMetrics {
    pub fn from_records(records: &[AuditRecord]) -> Self {
        let mut severity_counts = BTreeMap::new();
        for record in records {
            *severity_counts.entry(record.severity.clone()).or_insert(0) += 1;
        }
        Self {
            total: records.len(),
            severity_counts,
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.severity_counts
            .get(severity.as_str())
            .copied()
            .unwrap_or(0)
    }

    /// High-severity issue count shown on its own metric card.
    pub fn high(&self) -> usize {
        self.count(Severity::High)
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Derived filter view over the record list.
//!
//! A record passes when the free-text query is a case-insensitive substring
//! of its contract or findings, and the severity selector is `All` or
//! matches the record's severity label exactly. Recomputed on demand; no
//! index is kept.

use crate::models::{AuditRecord, Severity};

/// Severity selector of the dashboard's filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    fn matches(&self, severity: &str) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(level) => severity == level.as_str(),
        }
    }
}

/// Compute the filtered view of `records`.
pub fn filter_audits(
    records: &[AuditRecord],
    query: &str,
    severity: SeverityFilter,
) -> Vec<AuditRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            let matches_query = record.contract.to_lowercase().contains(&needle)
                || record.findings.to_lowercase().contains(&needle);
            matches_query && severity.matches(&record.severity)
        })
        .cloned()
        .collect()
}

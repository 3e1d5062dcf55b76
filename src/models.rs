// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! This module defines the audit record and the request and response data
//! structures used by the REST API. All types derive `Serialize`,
//! `Deserialize`, and `ToSchema` for automatic JSON handling and OpenAPI
//! documentation.
//!
//! ## Severity
//!
//! Audit severity is nominally one of `Low`, `Medium`, or `High`. The
//! gateway only checks that the field is non-empty, so stored records carry
//! the raw string; the [`Severity`] enum is used by the dashboard filter and
//! metrics, which operate on the well-known values.
//!
//! ## Request validation
//!
//! Request bodies model every field as optional. Presence and non-emptiness
//! are checked by the gateway handlers so that a missing field produces a
//! `400` with a stable error message instead of a deserialization failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Audit Record
// =============================================================================

/// A published smart-contract security audit report.
///
/// `id` and `created_at` are assigned by the server at insert time and are
/// immutable afterwards; `contract`, `findings`, and `severity` may be
/// overwritten by an update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct AuditRecord {
    /// Unique identifier for this audit report (server-assigned).
    pub id: String,
    /// Name or address of the audited contract.
    pub contract: String,
    /// Free-text summary of the findings.
    pub findings: String,
    /// Severity label, normally one of `Low`, `Medium`, `High`.
    pub severity: String,
    /// When the report was published (server-assigned).
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Severity
// =============================================================================

/// Well-known severity levels of an audit finding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not a known severity level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: {0}")]
pub struct ParseSeverityError(pub String);

impl std::str::FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Severity::Low),
            "Medium" => Ok(Severity::Medium),
            "High" => Ok(Severity::High),
            other => Err(ParseSeverityError(other.to_string())),
        }
    }
}

// =============================================================================
// Request / Response Bodies
// =============================================================================

/// Request to publish a new audit report.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAuditRequest {
    /// Name or address of the audited contract.
    #[serde(default)]
    pub contract: Option<String>,
    /// Free-text findings.
    #[serde(default)]
    pub findings: Option<String>,
    /// Severity label.
    #[serde(default)]
    pub severity: Option<String>,
}

/// Request to overwrite the mutable fields of an existing audit report.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateAuditRequest {
    /// Identifier of the report to update.
    #[serde(default)]
    pub id: Option<String>,
    /// Updated contract name or address.
    #[serde(default)]
    pub contract: Option<String>,
    /// Updated findings.
    #[serde(default)]
    pub findings: Option<String>,
    /// Updated severity label.
    #[serde(default)]
    pub severity: Option<String>,
}

/// Request to delete an audit report. The identifier travels in the body,
/// matching the dashboard's wire contract.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteAuditRequest {
    /// Identifier of the report to delete.
    #[serde(default)]
    pub id: Option<String>,
}

/// Confirmation returned by a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct DeleteAuditResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn severity_round_trips_through_strings() {
        for severity in [Severity::Low, Severity::Medium, Severity::High] {
            assert_eq!(Severity::from_str(severity.as_str()), Ok(severity));
        }
    }

    #[test]
    fn severity_rejects_unknown_labels() {
        let err = Severity::from_str("Critical").unwrap_err();
        assert_eq!(err, ParseSeverityError("Critical".into()));
        // Matching is exact; the stored strings are capitalized.
        assert!(Severity::from_str("high").is_err());
    }

    #[test]
    fn create_request_tolerates_missing_fields() {
        let request: CreateAuditRequest = serde_json::from_str(r#"{"contract":"Token"}"#).unwrap();
        assert_eq!(request.contract.as_deref(), Some("Token"));
        assert_eq!(request.findings, None);
        assert_eq!(request.severity, None);
    }

    #[test]
    fn audit_record_serializes_expected_field_names() {
        let record = AuditRecord {
            id: "a-1".into(),
            contract: "Token".into(),
            findings: "Reentrancy".into(),
            severity: "High".into(),
            created_at: DateTime::parse_from_rfc3339("2026-01-02T03:04:05Z")
                .unwrap()
                .with_timezone(&Utc),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], "a-1");
        assert_eq!(value["contract"], "Token");
        assert_eq!(value["findings"], "Reentrancy");
        assert_eq!(value["severity"], "High");
        assert!(value["created_at"].is_string());
    }
}

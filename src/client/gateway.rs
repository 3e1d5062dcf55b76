// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Gateway client capability.
//!
//! [`AuditApi`] is the seam between the dashboard handlers and the network:
//! the dashboard is generic over it, and tests substitute an in-memory
//! implementation. [`HttpAuditApi`] talks to the real endpoint. Calls are
//! fire-and-forget from the dashboard's perspective: no retry, no explicit
//! timeout, no de-duplication of rapid repeats.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::models::{AuditRecord, DeleteAuditResponse};

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never produced a response (connection, DNS, body I/O).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The gateway answered with a non-2xx status; `message` carries the
    /// server's `error` string when one was returned.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

/// The four operations of the audit endpoint.
#[allow(async_fn_in_trait)]
pub trait AuditApi {
    async fn list_audits(&self) -> Result<Vec<AuditRecord>, GatewayError>;

    async fn create_audit(
        &self,
        contract: &str,
        findings: &str,
        severity: &str,
    ) -> Result<AuditRecord, GatewayError>;

    async fn update_audit(
        &self,
        id: &str,
        contract: &str,
        findings: &str,
        severity: &str,
    ) -> Result<AuditRecord, GatewayError>;

    async fn delete_audit(&self, id: &str) -> Result<DeleteAuditResponse, GatewayError>;
}

/// HTTP implementation of [`AuditApi`] against a dashboard server.
pub struct HttpAuditApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAuditApi {
    /// `base_url` is the server root, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/audits", base_url.as_ref().trim_end_matches('/')),
        }
    }
}

#[derive(Deserialize)]
struct ErrorMessage {
    error: String,
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<ErrorMessage>().await {
        Ok(body) => body.error,
        Err(_) => format!("request failed with status {status}"),
    };
    Err(GatewayError::Rejected { status, message })
}

impl AuditApi for HttpAuditApi {
    async fn list_audits(&self) -> Result<Vec<AuditRecord>, GatewayError> {
        let response = self.client.get(&self.endpoint).send().await?;
        decode(response).await
    }

    async fn create_audit(
        &self,
        contract: &str,
        findings: &str,
        severity: &str,
    ) -> Result<AuditRecord, GatewayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({
                "contract": contract,
                "findings": findings,
                "severity": severity,
            }))
            .send()
            .await?;
        decode(response).await
    }

    async fn update_audit(
        &self,
        id: &str,
        contract: &str,
        findings: &str,
        severity: &str,
    ) -> Result<AuditRecord, GatewayError> {
        let response = self
            .client
            .put(&self.endpoint)
            .json(&json!({
                "id": id,
                "contract": contract,
                "findings": findings,
                "severity": severity,
            }))
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_audit(&self, id: &str) -> Result<DeleteAuditResponse, GatewayError> {
        let response = self
            .client
            .delete(&self.endpoint)
            .json(&json!({ "id": id }))
            .send()
            .await?;
        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_url_without_double_slash() {
        let api = HttpAuditApi::new("http://localhost:8080/");
        assert_eq!(api.endpoint, "http://localhost:8080/api/audits");

        let api = HttpAuditApi::new("http://localhost:8080");
        assert_eq!(api.endpoint, "http://localhost:8080/api/audits");
    }

    #[test]
    fn rejected_error_displays_server_message() {
        let err = GatewayError::Rejected {
            status: StatusCode::NOT_FOUND,
            message: "Audit not found".into(),
        };
        assert_eq!(err.to_string(), "Audit not found");
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Dashboard user-action handlers.
//!
//! One handler per user action, each running to completion before the next
//! event is processed. Every mutating handler re-checks the wallet gate
//! immediately before issuing the network call and aborts without touching
//! the network when the check fails. The local list is only mutated after
//! a successful response, so a failure leaves it consistent with the store.

use thiserror::Error;

use crate::client::filter::{filter_audits, SeverityFilter};
use crate::client::gateway::{AuditApi, GatewayError};
use crate::client::metrics::AuditMetrics;
use crate::client::session::WalletSession;
use crate::client::store::ClientStore;
use crate::models::AuditRecord;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The connected wallet is not the authorized one; the call was blocked
    /// before any network request.
    #[error("Only the authorized wallet can modify audits.")]
    Unauthorized,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// The dashboard's client-side state: wallet session, record list, and the
/// gateway client the handlers talk through.
pub struct Dashboard<A> {
    api: A,
    session: WalletSession,
    store: ClientStore,
}

impl<A: AuditApi> Dashboard<A> {
    pub fn new(api: A, session: WalletSession) -> Self {
        Self {
            api,
            session,
            store: ClientStore::new(),
        }
    }

    pub fn session(&self) -> &WalletSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut WalletSession {
        &mut self.session
    }

    pub fn audits(&self) -> &[AuditRecord] {
        self.store.records()
    }

    /// Derived filter view of the current list.
    pub fn filtered(&self, query: &str, severity: SeverityFilter) -> Vec<AuditRecord> {
        filter_audits(self.store.records(), query, severity)
    }

    /// Severity summary of the current list.
    pub fn metrics(&self) -> AuditMetrics {
        AuditMetrics::from_records(self.store.records())
    }

    /// Fetch all records and replace the local list.
    pub async fn load(&mut self) -> Result<(), DashboardError> {
        let records = self.api.list_audits().await?;
        self.store.replace_all(records);
        Ok(())
    }

    fn ensure_authorized(&self) -> Result<(), DashboardError> {
        if self.session.is_authorized() {
            Ok(())
        } else {
            Err(DashboardError::Unauthorized)
        }
    }

    /// Publish a new audit report and append the server's record.
    pub async fn submit_create(
        &mut self,
        contract: &str,
        findings: &str,
        severity: &str,
    ) -> Result<AuditRecord, DashboardError> {
        self.ensure_authorized()?;
        let record = self.api.create_audit(contract, findings, severity).await?;
        self.store.apply_created(record.clone());
        Ok(record)
    }

    /// Overwrite an existing report and replace it locally.
    pub async fn submit_update(
        &mut self,
        id: &str,
        contract: &str,
        findings: &str,
        severity: &str,
    ) -> Result<AuditRecord, DashboardError> {
        self.ensure_authorized()?;
        let record = self
            .api
            .update_audit(id, contract, findings, severity)
            .await?;
        self.store.apply_updated(record.clone());
        Ok(record)
    }

    /// Delete a report and drop it locally.
    pub async fn submit_delete(&mut self, id: &str) -> Result<(), DashboardError> {
        self.ensure_authorized()?;
        self.api.delete_audit(id).await?;
        self.store.apply_deleted(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeleteAuditResponse, Severity};
    use chrono::Utc;
    use reqwest::StatusCode;
    use std::cell::Cell;
    use std::rc::Rc;

    const AUTHORIZED: &str = "0xAbCd000000000000000000000000000000000001";

    fn record(id: &str, contract: &str, severity: &str) -> AuditRecord {
        AuditRecord {
            id: id.to_string(),
            contract: contract.to_string(),
            findings: "Reentrancy".to_string(),
            severity: severity.to_string(),
            created_at: Utc::now(),
        }
    }

    /// In-memory gateway that counts network calls.
    struct MockApi {
        listing: Vec<AuditRecord>,
        calls: Rc<Cell<usize>>,
        failing: Rc<Cell<bool>>,
    }

    impl MockApi {
        fn new(listing: Vec<AuditRecord>) -> (Self, Rc<Cell<usize>>, Rc<Cell<bool>>) {
            let calls = Rc::new(Cell::new(0));
            let failing = Rc::new(Cell::new(false));
            let api = Self {
                listing,
                calls: Rc::clone(&calls),
                failing: Rc::clone(&failing),
            };
            (api, calls, failing)
        }

        fn touch(&self) -> Result<(), GatewayError> {
            self.calls.set(self.calls.get() + 1);
            if self.failing.get() {
                return Err(GatewayError::Rejected {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Database error".into(),
                });
            }
            Ok(())
        }
    }

    impl AuditApi for MockApi {
        async fn list_audits(&self) -> Result<Vec<AuditRecord>, GatewayError> {
            self.touch()?;
            Ok(self.listing.clone())
        }

        async fn create_audit(
            &self,
            contract: &str,
            findings: &str,
            severity: &str,
        ) -> Result<AuditRecord, GatewayError> {
            self.touch()?;
            Ok(AuditRecord {
                id: format!("srv-{}", self.calls.get()),
                contract: contract.to_string(),
                findings: findings.to_string(),
                severity: severity.to_string(),
                created_at: Utc::now(),
            })
        }

        async fn update_audit(
            &self,
            id: &str,
            contract: &str,
            findings: &str,
            severity: &str,
        ) -> Result<AuditRecord, GatewayError> {
            self.touch()?;
            Ok(AuditRecord {
                id: id.to_string(),
                contract: contract.to_string(),
                findings: findings.to_string(),
                severity: severity.to_string(),
                created_at: Utc::now(),
            })
        }

        async fn delete_audit(&self, _id: &str) -> Result<DeleteAuditResponse, GatewayError> {
            self.touch()?;
            Ok(DeleteAuditResponse {
                message: "Audit deleted".into(),
            })
        }
    }

    fn authorized_session() -> WalletSession {
        let mut session = WalletSession::new(AUTHORIZED);
        session.accounts_changed(&[AUTHORIZED.to_uppercase().replace("0X", "0x")]);
        session
    }

    fn connected_stranger() -> WalletSession {
        let mut session = WalletSession::new(AUTHORIZED);
        session.accounts_changed(&["0x9999999999999999999999999999999999999999".to_string()]);
        session
    }

    #[tokio::test]
    async fn load_populates_store() {
        let (api, _, _) = MockApi::new(vec![record("1", "Token", "High")]);
        let mut dashboard = Dashboard::new(api, WalletSession::new(AUTHORIZED));

        dashboard.load().await.unwrap();
        assert_eq!(dashboard.audits().len(), 1);
        assert_eq!(dashboard.audits()[0].contract, "Token");
    }

    #[tokio::test]
    async fn load_failure_leaves_previous_list() {
        let (api, _, failing) = MockApi::new(vec![record("1", "Token", "High")]);
        let mut dashboard = Dashboard::new(api, WalletSession::new(AUTHORIZED));
        dashboard.load().await.unwrap();

        failing.set(true);
        assert!(matches!(
            dashboard.load().await,
            Err(DashboardError::Gateway(_))
        ));
        assert_eq!(dashboard.audits().len(), 1);
    }

    #[tokio::test]
    async fn unauthorized_delete_is_blocked_before_any_network_call() {
        let (api, calls, _) = MockApi::new(vec![]);
        let mut dashboard = Dashboard::new(api, connected_stranger());

        let err = dashboard.submit_delete("1").await.unwrap_err();
        assert!(matches!(err, DashboardError::Unauthorized));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn disconnected_create_is_blocked() {
        let (api, calls, _) = MockApi::new(vec![]);
        let mut dashboard = Dashboard::new(api, WalletSession::new(AUTHORIZED));

        let err = dashboard
            .submit_create("Token", "Reentrancy", "High")
            .await
            .unwrap_err();
        assert!(matches!(err, DashboardError::Unauthorized));
        assert_eq!(calls.get(), 0);
        assert!(dashboard.audits().is_empty());
    }

    #[tokio::test]
    async fn authorized_create_appends_server_record() {
        let (api, calls, _) = MockApi::new(vec![]);
        let mut dashboard = Dashboard::new(api, authorized_session());

        let created = dashboard
            .submit_create("Token", "Reentrancy", "High")
            .await
            .unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(dashboard.audits(), std::slice::from_ref(&created));
    }

    #[tokio::test]
    async fn authorized_update_replaces_matching_record() {
        let (api, _, _) = MockApi::new(vec![record("1", "Token", "Low")]);
        let mut dashboard = Dashboard::new(api, authorized_session());
        dashboard.load().await.unwrap();

        let updated = dashboard
            .submit_update("1", "Vault", "Unchecked call", "High")
            .await
            .unwrap();
        assert_eq!(dashboard.audits().len(), 1);
        assert_eq!(dashboard.audits()[0], updated);
        assert_eq!(dashboard.audits()[0].contract, "Vault");
    }

    #[tokio::test]
    async fn authorized_delete_removes_record() {
        let (api, _, _) = MockApi::new(vec![record("1", "Token", "Low")]);
        let mut dashboard = Dashboard::new(api, authorized_session());
        dashboard.load().await.unwrap();

        dashboard.submit_delete("1").await.unwrap();
        assert!(dashboard.audits().is_empty());
    }

    #[tokio::test]
    async fn gateway_rejection_leaves_list_unchanged() {
        let (api, _, failing) = MockApi::new(vec![record("1", "Token", "Low")]);
        let mut dashboard = Dashboard::new(api, authorized_session());
        dashboard.load().await.unwrap();

        failing.set(true);
        let err = dashboard
            .submit_update("1", "Vault", "f", "High")
            .await
            .unwrap_err();
        assert!(matches!(err, DashboardError::Gateway(_)));
        assert_eq!(dashboard.audits()[0].contract, "Token");

        assert!(dashboard.submit_delete("1").await.is_err());
        assert_eq!(dashboard.audits().len(), 1);
    }

    #[tokio::test]
    async fn filtered_and_metrics_derive_from_current_list() {
        let (api, _, _) = MockApi::new(vec![
            record("1", "Token", "High"),
            record("2", "Bridge", "Low"),
        ]);
        let mut dashboard = Dashboard::new(api, WalletSession::new(AUTHORIZED));
        dashboard.load().await.unwrap();

        let high = dashboard.filtered("", SeverityFilter::Only(Severity::High));
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].contract, "Token");

        let metrics = dashboard.metrics();
        assert_eq!(metrics.total, 2);
        assert_eq!(metrics.high(), 1);
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet session and authorization gate.
//!
//! The session tracks the address currently reported by a wallet provider
//! and compares it, case-insensitively, against one statically configured
//! authorized address. Addresses are normalized to lower-case as soon as
//! they are adopted. The session is never persisted; it is re-derived on
//! page load and on provider account-change notifications.

use thiserror::Error;

/// Capability interface over a browser-injected wallet provider.
///
/// Implementations wrap whatever provider object the embedding environment
/// exposes; tests use an in-memory mock.
pub trait WalletProvider {
    /// Accounts the user has already approved for this origin. Must not
    /// prompt the user.
    fn accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// Prompt the user for account access and return the approved accounts.
    fn request_accounts(&self) -> Result<Vec<String>, ProviderError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// No wallet provider is injected into the environment.
    #[error("no wallet provider is available")]
    Unavailable,
    /// The provider refused the request (e.g. the user dismissed the prompt).
    #[error("the wallet provider rejected the request: {0}")]
    Rejected(String),
    /// An interactive request returned no accounts.
    #[error("the wallet provider returned no accounts")]
    NoAccounts,
}

/// The wallet identity the dashboard is currently operating under.
#[derive(Debug, Clone)]
pub struct WalletSession {
    authorized_address: String,
    connected_address: Option<String>,
}

impl WalletSession {
    /// Create a disconnected session gated on `authorized_address`.
    pub fn new(authorized_address: impl Into<String>) -> Self {
        Self {
            authorized_address: authorized_address.into().to_lowercase(),
            connected_address: None,
        }
    }

    /// The currently connected address, lower-cased, if any.
    pub fn connected_address(&self) -> Option<&str> {
        self.connected_address.as_deref()
    }

    /// Whether the connected address matches the authorized one. Both sides
    /// are lower-cased, so the comparison is case-insensitive.
    pub fn is_authorized(&self) -> bool {
        self.connected_address.as_deref() == Some(self.authorized_address.as_str())
    }

    /// Page-load path: adopt the first already-approved account without
    /// prompting. Returns the adopted address, if any.
    pub fn connect_silently<P: WalletProvider>(
        &mut self,
        provider: &P,
    ) -> Result<Option<String>, ProviderError> {
        let accounts = provider.accounts()?;
        self.accounts_changed(&accounts);
        Ok(self.connected_address.clone())
    }

    /// Explicit user action: prompt for account access and adopt the first
    /// returned account.
    pub fn connect<P: WalletProvider>(&mut self, provider: &P) -> Result<String, ProviderError> {
        let accounts = provider.request_accounts()?;
        let Some(account) = accounts.into_iter().next() else {
            return Err(ProviderError::NoAccounts);
        };

        let address = account.to_lowercase();
        self.connected_address = Some(address.clone());
        Ok(address)
    }

    /// Provider-pushed notification: adopt the new first account, or clear
    /// the connection when none remain.
    pub fn accounts_changed(&mut self, accounts: &[String]) {
        self.connected_address = accounts.first().map(|account| account.to_lowercase());
    }

    pub fn disconnect(&mut self) {
        self.connected_address = None;
    }
}

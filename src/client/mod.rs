// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Dashboard Client Module
//!
//! The browser-side logic of the audit dashboard, expressed as a library:
//!
//! - `session` - wallet authorization gate fed by an injected provider
//! - `store` - in-memory record list reconciled optimistically after writes
//! - `filter` - free-text + severity derived view of the record list
//! - `metrics` - severity count summary of the record list
//! - `gateway` - audit API client capability and its HTTP implementation
//! - `dashboard` - user-action handlers tying the pieces together
//! - `theme` - light/dark preference behind an injected key-value store
//!
//! All state transitions run on user-input or response events, one handler
//! to completion at a time; nothing here is shared across threads.
//!
//! The wallet gate controls which actions the dashboard offers and is
//! re-checked before every mutating call, but the gateway itself accepts
//! mutations from any caller. It is a UI affordance, not a security
//! boundary.

pub mod dashboard;
pub mod filter;
pub mod gateway;
pub mod metrics;
pub mod session;
pub mod store;
pub mod theme;

pub use dashboard::{Dashboard, DashboardError};
pub use filter::{filter_audits, SeverityFilter};
pub use gateway::{AuditApi, GatewayError, HttpAuditApi};
pub use metrics::AuditMetrics;
pub use session::{ProviderError, WalletProvider, WalletSession};
pub use store::ClientStore;
pub use theme::{load_theme, save_theme, PreferenceStore, Theme};

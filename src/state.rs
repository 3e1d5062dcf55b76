// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use crate::storage::Database;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        Self::new(Database::in_memory().expect("in-memory database"))
    }
}

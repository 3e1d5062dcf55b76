// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Light/dark theme preference.
//!
//! Persistence is an injected key-value capability rather than ambient
//! global state, so the embedding environment decides where the flag lives
//! (browser local storage, a config file, or a test map).

use std::collections::HashMap;

/// Key-value preference storage capability.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

impl PreferenceStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Read the stored theme. Unset or unrecognized values fall back to light.
pub fn load_theme(prefs: &impl PreferenceStore) -> Theme {
    match prefs.get(THEME_KEY).as_deref() {
        Some("dark") => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Persist the theme flag.
pub fn save_theme(prefs: &mut impl PreferenceStore, theme: Theme) {
    prefs.set(THEME_KEY, theme.as_str());
}

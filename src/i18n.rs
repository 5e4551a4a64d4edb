// src/i18n.rs
//
// Two-locale language switcher. Both tables are compiled in from the same
// JSON files that ship under public/i18n/, so the English baseline is an
// explicit table rather than a snapshot of whatever the DOM happened to show
// at startup. The chosen locale is persisted in localStorage and re-applied
// before the first translated render.

use gloo::storage::{LocalStorage, Storage};
use serde::Deserialize;
use std::collections::HashMap;

const EN_TABLE_JSON: &str = include_str!("../public/i18n/en.json");
const DE_TABLE_JSON: &str = include_str!("../public/i18n/de.json");

/// localStorage key for the persisted locale preference.
pub const LOCALE_STORAGE_KEY: &str = "portfolio.locale";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    /// Parse a stored tag. Anything but the two supported tags is rejected
    /// so a stale or mangled preference falls back to the default.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Locale::En),
            "de" => Some(Locale::De),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::De,
            Locale::De => Locale::En,
        }
    }

    /// Label shown on the language toggle: the locale a click switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Locale::En => "DE",
            Locale::De => "EN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TranslationTable(HashMap<String, String>);

impl TranslationTable {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Translations {
    baseline: TranslationTable,
    alternate: TranslationTable,
}

impl Translations {
    /// Parse both embedded tables. A broken table is logged and replaced by
    /// an empty one; lookups then fall through to the baseline or the key.
    pub fn load() -> Self {
        Self {
            baseline: Self::parse_table(EN_TABLE_JSON, Locale::En),
            alternate: Self::parse_table(DE_TABLE_JSON, Locale::De),
        }
    }

    fn parse_table(json: &str, locale: Locale) -> TranslationTable {
        match TranslationTable::from_json(json) {
            Ok(table) => table,
            Err(err) => {
                log::error!("invalid {} translation table: {}", locale.as_str(), err);
                TranslationTable::default()
            }
        }
    }

    pub fn from_tables(baseline: TranslationTable, alternate: TranslationTable) -> Self {
        Self {
            baseline,
            alternate,
        }
    }

    /// Look up a key for a locale. Keys missing from the alternate table
    /// fall back to the baseline string, never to an empty placeholder; a
    /// key missing everywhere renders as itself.
    pub fn text(&self, locale: Locale, key: &str) -> String {
        let resolved = match locale {
            Locale::En => self.baseline.get(key),
            Locale::De => self.alternate.get(key).or_else(|| self.baseline.get(key)),
        };
        resolved.unwrap_or(key).to_string()
    }
}

/// Read the persisted locale, defaulting to English when the entry is
/// absent or holds an unknown tag.
pub fn load_preference() -> Locale {
    LocalStorage::get::<String>(LOCALE_STORAGE_KEY)
        .ok()
        .and_then(|tag| Locale::from_tag(&tag))
        .unwrap_or_default()
}

/// Persist the locale choice. Storage failures only cost the preference on
/// the next visit, so they are logged and swallowed.
pub fn store_preference(locale: Locale) {
    if let Err(err) = LocalStorage::set(LOCALE_STORAGE_KEY, locale.as_str()) {
        log::warn!("failed to persist locale preference: {:?}", err);
    }
}

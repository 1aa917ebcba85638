//! # Localization
//!
//! Localized fields resolve to a single string for the locales the client asked
//! for. [`Language`] holds those locales in preference order (usually parsed from
//! `Accept-Language`); [`LocalizedText`] holds the translations of one value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Locales requested by the client, most preferred first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    locales: Vec<String>,
}

impl Language {
    pub fn new<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locales: locales.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses an `Accept-Language` header, ordering by quality value.
    ///
    /// Entries with `q=0` and the `*` wildcard are dropped.
    pub fn from_accept_language(header: &str) -> Self {
        let mut weighted: Vec<(String, f32)> = header
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.split(';').map(str::trim);
                let tag = parts.next().filter(|tag| !tag.is_empty() && *tag != "*")?;
                let quality = parts
                    .find_map(|param| param.strip_prefix("q="))
                    .and_then(|q| q.parse::<f32>().ok())
                    .unwrap_or(1.0);
                (quality > 0.0).then(|| (tag.to_string(), quality))
            })
            .collect();
        // Stable sort keeps header order for equal weights
        weighted.sort_by(|a, b| b.1.total_cmp(&a.1));
        Self::new(weighted.into_iter().map(|(tag, _)| tag))
    }

    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    pub fn preferred_locale(&self) -> Option<&str> {
        self.locales.first().map(String::as_str)
    }

    pub fn resolve(&self, text: &LocalizedText) -> Option<String> {
        text.resolve(self)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::new(["en"])
    }
}

/// Translations of one value keyed by locale tag, with a default locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    default_locale: String,
    values: BTreeMap<String, String>,
}

impl LocalizedText {
    pub fn new(default_locale: impl Into<String>, value: impl Into<String>) -> Self {
        let default_locale = default_locale.into();
        let mut values = BTreeMap::new();
        values.insert(default_locale.clone(), value.into());
        Self {
            default_locale,
            values,
        }
    }

    pub fn with(mut self, locale: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(locale.into(), value.into());
        self
    }

    pub fn get(&self, locale: &str) -> Option<&str> {
        self.values.get(locale).map(String::as_str)
    }

    /// Picks the best translation for `language`.
    ///
    /// For each requested locale in order: an exact tag match, then a match on the
    /// primary subtag (`es-ES` matches `es`). Falls back to the default locale.
    pub fn resolve(&self, language: &Language) -> Option<String> {
        language
            .locales()
            .iter()
            .find_map(|locale| self.lookup(locale))
            .or_else(|| self.get(&self.default_locale))
            .map(str::to_string)
    }

    fn lookup(&self, locale: &str) -> Option<&str> {
        if let Some(value) = self.get(locale) {
            return Some(value);
        }
        let primary = primary_subtag(locale);
        self.values
            .iter()
            .find(|(tag, _)| primary_subtag(tag).eq_ignore_ascii_case(primary))
            .map(|(_, value)| value.as_str())
    }
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

//! Translation resolver
//!
//! Each locale has one nested JSON tree. A key such as `users.table.name` is
//! split on `.` and walked one segment at a time. A miss anywhere in the
//! active locale restarts the walk from the top of the default locale's tree;
//! a miss there too returns the key itself and logs a warning. A walk that
//! ends on a non-string node also returns the key.
//!
//! Lookups go through an explicit [`I18n`] context that pages and widgets
//! receive as an argument.

mod locale;

pub use locale::{Locale, DEFAULT_LOCALE};

use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use crate::error::Result;

const EMBEDDED_DE: &str = include_str!("../../locales/de.json");
const EMBEDDED_EN: &str = include_str!("../../locales/en.json");

/// Translation trees for every [`Locale`]
#[derive(Debug, Clone, PartialEq)]
pub struct Translations {
    de: Value,
    en: Value,
}

impl Translations {
    /// Parse the translation resources compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_DE, EMBEDDED_EN)
    }

    /// Parse translation trees from JSON documents
    pub fn from_json(de: &str, en: &str) -> Result<Self> {
        Ok(Self {
            de: serde_json::from_str(de)?,
            en: serde_json::from_str(en)?,
        })
    }

    fn tree(&self, locale: Locale) -> &Value {
        match locale {
            Locale::De => &self.de,
            Locale::En => &self.en,
        }
    }

    /// Resolve a dotted key for `locale`, falling back to the default locale
    /// and finally to the key itself
    pub fn resolve(&self, key: &str, locale: Locale) -> String {
        let found = walk(self.tree(locale), key).or_else(|| walk(self.tree(DEFAULT_LOCALE), key));

        match found {
            Some(Value::String(text)) => text.clone(),
            Some(_) => key.to_string(),
            None => {
                warn!("Translation key not found: {}", key);
                key.to_string()
            }
        }
    }

    /// True if `key` resolves to a string in `locale` without any fallback
    pub fn has_key(&self, key: &str, locale: Locale) -> bool {
        matches!(walk(self.tree(locale), key), Some(Value::String(_)))
    }
}

/// Walk `tree` along the segments of `key`
fn walk<'a>(tree: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.')
        .try_fold(tree, |node, segment| node.as_object()?.get(segment))
}

/// Translation context handed to pages and views
#[derive(Debug, Clone)]
pub struct I18n {
    translations: Arc<Translations>,
    locale: Locale,
}

impl I18n {
    pub fn new(translations: Arc<Translations>, locale: Locale) -> Self {
        Self {
            translations,
            locale,
        }
    }

    /// Translate `key` in the current locale
    pub fn t(&self, key: &str) -> String {
        self.translations.resolve(key, self.locale)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn translations(&self) -> &Arc<Translations> {
        &self.translations
    }
}

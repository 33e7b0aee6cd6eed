//! Display locales

use serde::{Deserialize, Serialize};

/// Locale used when nothing else is selected, and as the translation fallback
pub const DEFAULT_LOCALE: Locale = Locale::De;

/// Closed set of display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    De,
    En,
}

impl Locale {
    /// All locales, in switcher order
    pub const ALL: [Locale; 2] = [Locale::De, Locale::En];

    /// Parse a locale code; anything outside the known set is rejected
    pub fn parse(code: &str) -> Option<Locale> {
        match code.trim() {
            "de" => Some(Locale::De),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Parse a persisted value, discarding unknown codes in favor of the default
    pub fn from_persisted(code: Option<&str>) -> Locale {
        code.and_then(Locale::parse).unwrap_or(DEFAULT_LOCALE)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::En => "en",
        }
    }

    /// Next locale in switcher order (wraps)
    pub fn next(&self) -> Locale {
        match self {
            Locale::De => Locale::En,
            Locale::En => Locale::De,
        }
    }

    /// chrono format string for timestamps
    pub fn datetime_format(&self) -> &'static str {
        match self {
            Locale::De => "%d.%m.%Y, %H:%M:%S",
            Locale::En => "%m/%d/%Y, %I:%M:%S %p",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

//! Storefront locale (language + country).
//!
//! Locales appear as an optional leading path segment such as `/en-us` and
//! are passed to every Storefront API query through `@inContext`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing a locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// Not of the form `{language}-{country}` with two ASCII letters each.
    #[error("invalid locale: {0:?}")]
    Invalid(String),
}

/// A language/country pair in Storefront API form (`EN`, `US`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    language: String,
    country: String,
}

impl Locale {
    /// Build a locale from its two-letter codes (any case).
    ///
    /// # Errors
    ///
    /// Returns `LocaleError::Invalid` unless both codes are two ASCII letters.
    pub fn new(language: &str, country: &str) -> Result<Self, LocaleError> {
        if !is_two_letters(language) || !is_two_letters(country) {
            return Err(LocaleError::Invalid(format!("{language}-{country}")));
        }
        Ok(Self {
            language: language.to_ascii_uppercase(),
            country: country.to_ascii_uppercase(),
        })
    }

    /// `LanguageCode` value for `@inContext`.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// `CountryCode` value for `@inContext`.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Path segment form, e.g. `en-us`.
    #[must_use]
    pub fn path_segment(&self) -> String {
        format!(
            "{}-{}",
            self.language.to_ascii_lowercase(),
            self.country.to_ascii_lowercase()
        )
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            language: "EN".to_string(),
            country: "US".to_string(),
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (language, country) = s
            .split_once('-')
            .ok_or_else(|| LocaleError::Invalid(s.to_string()))?;
        Self::new(language, country).map_err(|_| LocaleError::Invalid(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path_segment())
    }
}

fn is_two_letters(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_segment() {
        let locale: Locale = "en-us".parse().unwrap();
        assert_eq!(locale.language(), "EN");
        assert_eq!(locale.country(), "US");

        let locale: Locale = "FR-ca".parse().unwrap();
        assert_eq!(locale.language(), "FR");
        assert_eq!(locale.country(), "CA");
    }

    #[test]
    fn test_reject_non_locales() {
        for segment in ["pages", "en", "en-usa", "e1-us", "-", "", "favicon.ico"] {
            assert!(segment.parse::<Locale>().is_err(), "{segment} should be rejected");
        }
    }

    #[test]
    fn test_path_segment_is_lowercase() {
        let locale = Locale::new("DE", "AT").unwrap();
        assert_eq!(locale.path_segment(), "de-at");
        assert_eq!(locale.to_string(), "de-at");
    }

    #[test]
    fn test_default_is_en_us() {
        let locale = Locale::default();
        assert_eq!(locale, "en-us".parse().unwrap());
    }
}

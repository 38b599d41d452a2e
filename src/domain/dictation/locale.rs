//! Recognition locale value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidLocaleError;

/// Default recognition locale
pub const DEFAULT_LOCALE: &str = "pt-BR";

/// Value object for a recognition locale tag (e.g. "pt-BR", "en-US").
/// Immutable and validated on creation: one to three alphanumeric
/// subtags separated by hyphens, the first being a two- or three-letter
/// language code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Get the full tag
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the primary language subtag (e.g. "pt" for "pt-BR")
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl FromStr for Locale {
    type Err = InvalidLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = || InvalidLocaleError {
            input: s.to_string(),
        };

        if input.is_empty() {
            return Err(invalid());
        }

        let subtags: Vec<&str> = input.split('-').collect();
        if subtags.len() > 3 {
            return Err(invalid());
        }

        for (index, subtag) in subtags.iter().enumerate() {
            if subtag.is_empty() || !subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(invalid());
            }
            if index == 0 && !(2..=3).contains(&subtag.len()) {
                return Err(invalid());
            }
        }

        Ok(Self(input.to_string()))
    }
}

impl TryFrom<String> for Locale {
    type Error = InvalidLocaleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(DEFAULT_LOCALE.to_string())
    }
}

//! Locale type: validated locale representation.
//!
//! A `Locale` can only be constructed for codes present and enabled in the
//! [`LocaleRegistry`], so every value of this type names a renderable locale.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated locale.
///
/// This type represents a locale that has been validated against the registry.
/// It ensures that only supported, enabled locales can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// ISO 639-1 language code (e.g., "en", "de", "fr")
    code: &'static str,
}

impl Locale {
    /// Constant for English, the default locale.
    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Constant for German.
    pub const GERMAN: Locale = Locale { code: "de" };

    /// Constant for French.
    pub const FRENCH: Locale = Locale { code: "fr" };

    /// Create a Locale from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "de")
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is valid and the locale is enabled
    /// * `Err` if the code is not found or the locale is disabled
    pub fn from_code(code: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Get the default locale.
    ///
    /// This is the locale used as the fallback for missing translations and
    /// for invalid persisted locale choices.
    pub fn default_locale() -> Locale {
        let config = LocaleRegistry::get().default_locale();
        Locale { code: config.code }
    }

    /// All enabled locales, in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_enabled()
            .iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the locale code is not found in the registry. This should
    /// never happen if the Locale was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// Get the English name of the locale (e.g., "German").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the locale (e.g., "Deutsch").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Get the BCP-47 tag used for formatting conventions (e.g., "de-DE").
    pub fn formatting_tag(&self) -> &'static str {
        self.config().formatting_tag
    }

    /// Check if this is the default locale.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

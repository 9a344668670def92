//! Locale registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of all locales the site can be
//! rendered in. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access.

use std::sync::OnceLock;

/// Configuration for a supported locale.
///
/// Contains all metadata for a specific locale, including its code, names,
/// the BCP-47 tag used for number formatting, enabled status, and whether
/// it is the default locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g., "en", "de", "fr")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "German", "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Deutsch", "Français")
    pub native_name: &'static str,

    /// BCP-47 tag used for formatting conventions (e.g., "en-US", "de-DE")
    pub formatting_tag: &'static str,

    /// Whether this is the default locale (only one should be true)
    pub is_default: bool,

    /// Whether this locale is enabled for use
    pub enabled: bool,
}

/// Global locale registry singleton.
///
/// The registry contains all supported locales and provides methods to query
/// and access them. It is initialized once on first access and remains
/// immutable thereafter.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|l| l.enabled).collect()
    }

    /// Get the default locale configuration.
    ///
    /// The default locale is the fallback target for missing translations
    /// and for invalid persisted locale choices. There should be exactly
    /// one default locale.
    ///
    /// # Panics
    /// Panics if no default locale is found or if multiple default locales
    /// are defined (this indicates a configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self.locales.iter().filter(|l| l.is_default).collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code).map(|l| l.enabled).unwrap_or(false)
    }
}

/// Default locale configurations.
///
/// English is the default locale; German and French are translation targets.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            formatting_tag: "en-US",
            is_default: true,
            enabled: true,
        },
        LocaleConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            formatting_tag: "de-DE",
            is_default: false,
            enabled: true,
        },
        LocaleConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            formatting_tag: "fr-FR",
            is_default: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let registry = LocaleRegistry::get();
        let config = registry.get_by_code("en");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "en");
        assert_eq!(config.name, "English");
        assert_eq!(config.formatting_tag, "en-US");
        assert!(config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_german() {
        let registry = LocaleRegistry::get();
        let config = registry.get_by_code("de").unwrap();

        assert_eq!(config.code, "de");
        assert_eq!(config.name, "German");
        assert_eq!(config.native_name, "Deutsch");
        assert!(!config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_french() {
        let registry = LocaleRegistry::get();
        let config = registry.get_by_code("fr").unwrap();

        assert_eq!(config.code, "fr");
        assert_eq!(config.native_name, "Français");
        assert!(!config.is_default);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        let registry = LocaleRegistry::get();
        assert!(registry.get_by_code("es").is_none());
    }

    #[test]
    fn test_list_enabled_contains_all_three() {
        let registry = LocaleRegistry::get();
        let enabled = registry.list_enabled();

        assert_eq!(enabled.len(), 3);
        assert!(enabled.iter().any(|l| l.code == "en"));
        assert!(enabled.iter().any(|l| l.code == "de"));
        assert!(enabled.iter().any(|l| l.code == "fr"));
    }

    #[test]
    fn test_default_locale_is_english() {
        let registry = LocaleRegistry::get();
        let default = registry.default_locale();

        assert_eq!(default.code, "en");
        assert!(default.is_default);
    }

    #[test]
    fn test_is_enabled() {
        let registry = LocaleRegistry::get();
        assert!(registry.is_enabled("en"));
        assert!(registry.is_enabled("de"));
        assert!(registry.is_enabled("fr"));
        assert!(!registry.is_enabled("es"));
        assert!(!registry.is_enabled(""));
    }
}

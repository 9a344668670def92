//! Locale store: process-wide active locale with persistence and change
//! notifications.
//!
//! The store is the single owner of the "current locale" state. Consumers
//! receive the active locale explicitly (or subscribe for changes) instead
//! of reading module-level globals. On every change the store persists the
//! choice through its [`LocaleStorage`] port and refreshes the exported
//! language tag, which mirrors the rendered document's `lang` attribute.

use crate::i18n::catalog;
use crate::i18n::currency;
use crate::i18n::storage::LocaleStorage;
use crate::i18n::Locale;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Process-wide locale store.
///
/// Holds the active locale, persists changes, and notifies subscribers
/// through a watch channel. All methods take `&self`; the store is shared
/// behind an `Arc` by its consumers.
pub struct LocaleStore {
    storage: Box<dyn LocaleStorage>,
    active: watch::Sender<Locale>,
}

impl LocaleStore {
    /// Create a store, initializing the active locale from persisted state.
    ///
    /// An absent, unreadable, or unsupported persisted value silently falls
    /// back to the default locale; initialization never fails.
    pub fn new(storage: Box<dyn LocaleStorage>) -> Self {
        let initial = match storage.load() {
            Ok(Some(code)) => match Locale::from_code(&code) {
                Ok(locale) => locale,
                Err(_) => {
                    debug!("Discarding unsupported persisted locale '{}'", code);
                    Locale::default_locale()
                }
            },
            Ok(None) => Locale::default_locale(),
            Err(e) => {
                warn!("Failed to load persisted locale: {:#}", e);
                Locale::default_locale()
            }
        };

        let (active, _) = watch::channel(initial);
        Self { storage, active }
    }

    /// The active locale.
    pub fn current(&self) -> Locale {
        *self.active.borrow()
    }

    /// Language tag for document metadata, kept in sync with the active
    /// locale on every change.
    pub fn language_tag(&self) -> &'static str {
        self.current().code()
    }

    /// Switch the active locale.
    ///
    /// Persists the choice for future sessions and notifies subscribers.
    /// A persistence failure is logged but does not block the switch.
    pub fn set_locale(&self, locale: Locale) {
        if let Err(e) = self.storage.save(locale.code()) {
            warn!("Failed to persist locale '{}': {:#}", locale, e);
        }
        self.active.send_replace(locale);
        debug!("Active locale set to '{}'", locale);
    }

    /// Switch the active locale by code.
    ///
    /// A code outside the supported set is ignored and leaves the active
    /// locale unchanged.
    ///
    /// # Returns
    /// `true` if the code was accepted, `false` if it was ignored.
    pub fn set_locale_code(&self, code: &str) -> bool {
        match Locale::from_code(code) {
            Ok(locale) => {
                self.set_locale(locale);
                true
            }
            Err(e) => {
                debug!("Ignoring locale change: {:#}", e);
                false
            }
        }
    }

    /// Subscribe to locale changes.
    ///
    /// The receiver yields the locale active at subscription time and every
    /// subsequent change; consumers use it to re-render localized content.
    pub fn subscribe(&self) -> watch::Receiver<Locale> {
        self.active.subscribe()
    }

    /// Translate a message key under the active locale.
    ///
    /// Applies the catalog's three-tier fallback chain; see
    /// [`catalog::translate`]. The result borrows from `key` (the verbatim
    /// fallback), not from the store.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        catalog::translate(self.current(), key)
    }

    /// Format a price under the active locale's conventions.
    pub fn format_currency(&self, value: f64) -> String {
        currency::format_currency(self.current(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::storage::MemoryLocaleStorage;

    fn store_with(storage: MemoryLocaleStorage) -> LocaleStore {
        LocaleStore::new(Box::new(storage))
    }

    // ==================== Initialization Tests ====================

    #[test]
    fn test_starts_with_default_when_nothing_persisted() {
        let store = store_with(MemoryLocaleStorage::new());
        assert_eq!(store.current(), Locale::default_locale());
    }

    #[test]
    fn test_restores_persisted_locale() {
        let store = store_with(MemoryLocaleStorage::with_value("fr"));
        assert_eq!(store.current(), Locale::FRENCH);
    }

    #[test]
    fn test_invalid_persisted_locale_falls_back_to_default() {
        let store = store_with(MemoryLocaleStorage::with_value("xx"));
        assert_eq!(store.current(), Locale::default_locale());
    }

    // ==================== set_locale Tests ====================

    #[test]
    fn test_set_locale_persists_choice() {
        let storage = MemoryLocaleStorage::new();
        let store = store_with(storage);

        store.set_locale(Locale::GERMAN);

        assert_eq!(store.current(), Locale::GERMAN);
        // A fresh store over the same persisted value restores the choice
        // (verified end-to-end in the integration tests with file storage).
    }

    #[test]
    fn test_set_locale_code_accepts_supported() {
        let store = store_with(MemoryLocaleStorage::new());
        assert!(store.set_locale_code("de"));
        assert_eq!(store.current(), Locale::GERMAN);
    }

    #[test]
    fn test_set_locale_code_ignores_unsupported() {
        let store = store_with(MemoryLocaleStorage::new());
        store.set_locale(Locale::FRENCH);

        assert!(!store.set_locale_code("es"));
        assert!(!store.set_locale_code(""));
        assert_eq!(store.current(), Locale::FRENCH);
    }

    // ==================== Language Tag Tests ====================

    #[test]
    fn test_language_tag_tracks_active_locale() {
        let store = store_with(MemoryLocaleStorage::new());
        assert_eq!(store.language_tag(), "en");

        store.set_locale(Locale::GERMAN);
        assert_eq!(store.language_tag(), "de");
    }

    // ==================== Subscription Tests ====================

    #[test]
    fn test_subscribers_observe_changes() {
        let store = store_with(MemoryLocaleStorage::new());
        let mut rx = store.subscribe();

        assert_eq!(*rx.borrow_and_update(), Locale::ENGLISH);

        store.set_locale(Locale::FRENCH);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Locale::FRENCH);
    }

    // ==================== Delegation Tests ====================

    #[test]
    fn test_translate_uses_active_locale() {
        let store = store_with(MemoryLocaleStorage::new());
        assert_eq!(store.translate("nav.products"), "Products");

        store.set_locale(Locale::GERMAN);
        assert_eq!(store.translate("nav.products"), "Produkte");
    }

    #[test]
    fn test_translate_result_is_not_tied_to_the_store() {
        // The returned string borrows from the key, so it stays usable
        // after the store is gone.
        let value = {
            let store = store_with(MemoryLocaleStorage::new());
            store.translate("nav.products")
        };
        assert_eq!(value, "Products");
    }

    #[test]
    fn test_format_currency_uses_active_locale() {
        let store = store_with(MemoryLocaleStorage::new());
        assert_eq!(store.format_currency(18.5), "$18.50");

        store.set_locale(Locale::GERMAN);
        assert_eq!(store.format_currency(18.5), "18,50\u{a0}$");
    }
}

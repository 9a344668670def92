//! Message catalog: localized UI strings with a total fallback lookup.
//!
//! The catalog is a two-level mapping (locale, message key) -> display string,
//! kept as static data so it is trivially testable and swappable. Lookup
//! never fails: a missing key falls back to the default locale's entry, and
//! if that is also absent the key itself is returned verbatim. The fallback
//! chain is what keeps missing translations from ever surfacing as errors.

use crate::i18n::Locale;

/// Message table for one locale: (key, display string) pairs.
type Messages = &'static [(&'static str, &'static str)];

/// Look up `key` for `locale`, applying the three-tier fallback chain.
///
/// Resolution order:
/// 1. the active locale's catalog
/// 2. the default locale's catalog
/// 3. the key itself, verbatim
///
/// The function is total; it never fails and never returns an empty string
/// for a key present in the default catalog.
pub fn translate(locale: Locale, key: &str) -> &str {
    if let Some(value) = lookup(locale, key) {
        return value;
    }
    if let Some(value) = lookup(Locale::default_locale(), key) {
        return value;
    }
    key
}

/// Look up `key` in a single locale's catalog, without fallback.
pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    messages_for(locale)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// All message keys defined for the default locale.
///
/// This is the authoritative key set; every key listed here is resolvable
/// under every supported locale through the fallback chain.
pub fn keys() -> impl Iterator<Item = &'static str> {
    messages_for(Locale::default_locale()).iter().map(|(k, _)| *k)
}

/// The raw message table for one locale.
fn messages_for(locale: Locale) -> Messages {
    match locale.code() {
        "de" => GERMAN_MESSAGES,
        "fr" => FRENCH_MESSAGES,
        _ => ENGLISH_MESSAGES,
    }
}

// ==================== English (default) ====================

const ENGLISH_MESSAGES: Messages = &[
    ("nav.products", "Products"),
    ("nav.creator", "Creator"),
    ("nav.location", "Location"),
    ("nav.order", "Order"),
    ("sections.products.title", "Products"),
    (
        "sections.products.lead",
        "Small-batch soy candles. Clean burn, long-lasting fragrance.",
    ),
    (
        "sections.products.empty",
        "Product list updating – please check back soon.",
    ),
    ("table.photo", "Photo"),
    ("table.name", "Name"),
    ("table.description", "Description"),
    ("table.scent", "Scent"),
    ("table.size", "Size"),
    ("table.price", "Price"),
    ("sections.creator.title", "Meet the Creator"),
    (
        "sections.creator.lead",
        "Craft, sustainability, and intentional calm.",
    ),
    ("sections.location.title", "Studio & Micro-Factory"),
    (
        "sections.location.mapHint",
        "Google Maps API key not set – using public embed. Add GOOGLE_MAPS_KEY for enhanced map controls.",
    ),
    ("contact.title", "Order / Contact"),
    (
        "contact.lead",
        "Want to place a custom or bulk order? Send a quick request below.",
    ),
    ("contact.form.product", "Product"),
    ("contact.form.quantity", "Quantity"),
    ("contact.form.name", "Your Name"),
    ("contact.form.email", "Email"),
    ("contact.form.notes", "Notes / Message (optional)"),
    (
        "contact.form.notesPlaceholder",
        "Scent preferences, deadline, packaging...",
    ),
    ("contact.send", "Send Request"),
    ("contact.sending", "Sending…"),
    ("contact.sent", "Sent! We will reply via email."),
    ("contact.error", "Something went wrong. Try again."),
    ("contact.privacy", "We respond from"),
    ("contact.mailto", "Open email client"),
    ("footer.backToTop", "Back to top"),
    ("skip.toProducts", "Skip to products"),
    ("products.more", "View details"),
    ("product.order.title", "Order this candle"),
    ("product.order.quantity", "Quantity"),
    ("product.order.notes", "Notes (optional)"),
    ("product.order.submit", "Send Order Email"),
    ("product.back", "Back to products"),
    ("product.notFound", "Product not found"),
    ("form.error.required", "Required"),
    ("form.error.quantityRange", "1-99"),
    ("form.error.nameShort", "Too short"),
    ("form.error.emailInvalid", "Invalid email"),
    ("form.error.fix", "Fix errors"),
];

// ==================== German ====================

const GERMAN_MESSAGES: Messages = &[
    ("nav.products", "Produkte"),
    ("nav.creator", "Schöpferin"),
    ("nav.location", "Standort"),
    ("nav.order", "Bestellen"),
    ("sections.products.title", "Produkte"),
    (
        "sections.products.lead",
        "Kleinserien-Sojakerzen. Sauberes Abbrennen, langanhaltender Duft.",
    ),
    (
        "sections.products.empty",
        "Produktliste wird aktualisiert – bitte später erneut prüfen.",
    ),
    ("table.photo", "Foto"),
    ("table.name", "Name"),
    ("table.description", "Beschreibung"),
    ("table.scent", "Duft"),
    ("table.size", "Größe"),
    ("table.price", "Preis"),
    ("sections.creator.title", "Lerne die Schöpferin kennen"),
    (
        "sections.creator.lead",
        "Handwerk, Nachhaltigkeit und bewusste Ruhe.",
    ),
    ("sections.location.title", "Studio & Mikro-Manufaktur"),
    (
        "sections.location.mapHint",
        "Google-Maps-API-Schlüssel nicht gesetzt – öffentliche Einbettung wird verwendet. GOOGLE_MAPS_KEY für erweiterte Kartenfunktionen setzen.",
    ),
    ("contact.title", "Bestellung / Kontakt"),
    (
        "contact.lead",
        "Individuelle oder Großbestellung? Sende uns eine Anfrage.",
    ),
    ("contact.form.product", "Produkt"),
    ("contact.form.quantity", "Menge"),
    ("contact.form.name", "Dein Name"),
    ("contact.form.email", "E-Mail"),
    ("contact.form.notes", "Notizen / Nachricht (optional)"),
    (
        "contact.form.notesPlaceholder",
        "Duftwünsche, Termin, Verpackung...",
    ),
    ("contact.send", "Anfrage senden"),
    ("contact.sending", "Senden…"),
    ("contact.sent", "Gesendet! Wir antworten per E-Mail."),
    ("contact.error", "Fehler aufgetreten. Bitte erneut versuchen."),
    ("contact.privacy", "Wir antworten von"),
    ("contact.mailto", "E-Mail Programm öffnen"),
    ("footer.backToTop", "Nach oben"),
    ("skip.toProducts", "Zu den Produkten springen"),
    ("products.more", "Details ansehen"),
    ("product.order.title", "Diese Kerze bestellen"),
    ("product.order.quantity", "Menge"),
    ("product.order.notes", "Notizen (optional)"),
    ("product.order.submit", "Bestell-E-Mail senden"),
    ("product.back", "Zurück zu den Produkten"),
    ("product.notFound", "Produkt nicht gefunden"),
    ("form.error.required", "Pflichtfeld"),
    ("form.error.quantityRange", "1-99"),
    ("form.error.nameShort", "Zu kurz"),
    ("form.error.emailInvalid", "Ungültige E-Mail"),
    ("form.error.fix", "Fehler beheben"),
];

// ==================== French ====================

const FRENCH_MESSAGES: Messages = &[
    ("nav.products", "Produits"),
    ("nav.creator", "Créatrice"),
    ("nav.location", "Localisation"),
    ("nav.order", "Commande"),
    ("sections.products.title", "Produits"),
    (
        "sections.products.lead",
        "Bougies de soja artisanales. Combustion propre, parfum durable.",
    ),
    (
        "sections.products.empty",
        "Liste des produits en mise à jour – revenez bientôt.",
    ),
    ("table.photo", "Photo"),
    ("table.name", "Nom"),
    ("table.description", "Description"),
    ("table.scent", "Parfum"),
    ("table.size", "Taille"),
    ("table.price", "Prix"),
    ("sections.creator.title", "Rencontrez la Créatrice"),
    (
        "sections.creator.lead",
        "Artisanat, durabilité et calme intentionnel.",
    ),
    ("sections.location.title", "Atelier & Micro-Usine"),
    (
        "sections.location.mapHint",
        "Clé API Google Maps absente – intégration publique utilisée. Définissez GOOGLE_MAPS_KEY pour des contrôles de carte avancés.",
    ),
    ("contact.title", "Commande / Contact"),
    (
        "contact.lead",
        "Commande personnalisée ou en gros ? Envoyez une demande.",
    ),
    ("contact.form.product", "Produit"),
    ("contact.form.quantity", "Quantité"),
    ("contact.form.name", "Votre Nom"),
    ("contact.form.email", "Email"),
    ("contact.form.notes", "Notes / Message (optionnel)"),
    (
        "contact.form.notesPlaceholder",
        "Préférences parfum, délai, emballage...",
    ),
    ("contact.send", "Envoyer la demande"),
    ("contact.sending", "Envoi…"),
    ("contact.sent", "Envoyé ! Nous répondrons par email."),
    ("contact.error", "Une erreur est survenue. Réessayez."),
    ("contact.privacy", "Nous répondons depuis"),
    ("contact.mailto", "Ouvrir le client e-mail"),
    ("footer.backToTop", "Haut de page"),
    ("skip.toProducts", "Aller aux produits"),
    ("products.more", "Voir le détail"),
    ("product.order.title", "Commander cette bougie"),
    ("product.order.quantity", "Quantité"),
    ("product.order.notes", "Notes (optionnel)"),
    ("product.order.submit", "Envoyer la commande"),
    ("product.back", "Retour aux produits"),
    ("product.notFound", "Produit introuvable"),
    ("form.error.required", "Requis"),
    ("form.error.quantityRange", "1-99"),
    ("form.error.nameShort", "Trop court"),
    ("form.error.emailInvalid", "Email invalide"),
    ("form.error.fix", "Corrigez les erreurs"),
];

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Lookup Tests ====================

    #[test]
    fn test_translate_active_locale() {
        assert_eq!(translate(Locale::GERMAN, "nav.products"), "Produkte");
        assert_eq!(translate(Locale::FRENCH, "nav.products"), "Produits");
        assert_eq!(translate(Locale::ENGLISH, "nav.products"), "Products");
    }

    #[test]
    fn test_translate_unknown_key_returns_key() {
        assert_eq!(translate(Locale::ENGLISH, "nav.missing"), "nav.missing");
        assert_eq!(translate(Locale::FRENCH, "nav.missing"), "nav.missing");
    }

    #[test]
    fn test_lookup_without_fallback() {
        assert_eq!(lookup(Locale::GERMAN, "table.price"), Some("Preis"));
        assert_eq!(lookup(Locale::GERMAN, "does.not.exist"), None);
    }

    // ==================== Fallback Chain Properties ====================

    #[test]
    fn test_every_default_key_resolves_non_empty_under_every_locale() {
        for locale in Locale::all() {
            for key in keys() {
                let value = translate(locale, key);
                assert!(
                    !value.is_empty(),
                    "key '{}' resolved to empty string under locale '{}'",
                    key,
                    locale
                );
            }
        }
    }

    #[test]
    fn test_catalogs_cover_identical_key_sets() {
        // The fallback chain tolerates gaps, but the shipped data keeps all
        // three catalogs in sync; this pins that down.
        let default_keys: Vec<_> = keys().collect();
        for locale in [Locale::GERMAN, Locale::FRENCH] {
            for key in &default_keys {
                assert!(
                    lookup(locale, key).is_some(),
                    "locale '{}' is missing key '{}'",
                    locale,
                    key
                );
            }
            assert_eq!(messages_for(locale).len(), default_keys.len());
        }
    }

    #[test]
    fn test_no_duplicate_keys_in_default_catalog() {
        let mut seen = std::collections::HashSet::new();
        for key in keys() {
            assert!(seen.insert(key), "duplicate catalog key '{}'", key);
        }
    }

    #[test]
    fn test_error_codes_have_messages_in_all_locales() {
        for locale in Locale::all() {
            for key in [
                "form.error.required",
                "form.error.quantityRange",
                "form.error.nameShort",
                "form.error.emailInvalid",
            ] {
                assert!(lookup(locale, key).is_some());
            }
        }
    }
}

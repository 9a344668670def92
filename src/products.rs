//! Localized product catalog.
//!
//! Product identity, price, and image are locale-invariant; only the
//! translation record (name, description, optional scent and size) is
//! swapped when the locale changes. A locale missing a product's entry
//! falls back to the default locale's translation; only an unknown product
//! id resolves to nothing.

use crate::i18n::{currency, Locale};
use serde::Serialize;

/// Per-locale translation record for one product.
#[derive(Debug, Clone, Serialize)]
pub struct ProductTranslation {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scent: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<&'static str>,
}

/// A catalog product with its per-locale translations.
#[derive(Debug)]
pub struct Product {
    /// Stable identifier, identical across locales
    pub id: &'static str,
    /// Unit price in USD, identical across locales
    pub price: f64,
    /// Image path, identical across locales
    pub image: &'static str,
    translations: &'static [(&'static str, ProductTranslation)],
}

impl Product {
    /// The translation record for `locale`, falling back to the default
    /// locale's record when the requested one is missing.
    ///
    /// # Panics
    /// Panics if the product has no translation for the default locale,
    /// which the shipped catalog data always provides.
    pub fn translation(&self, locale: Locale) -> &ProductTranslation {
        self.translation_exact(locale)
            .or_else(|| self.translation_exact(Locale::default_locale()))
            .expect("Product should have a default-locale translation")
    }

    fn translation_exact(&self, locale: Locale) -> Option<&ProductTranslation> {
        self.translations
            .iter()
            .find(|(code, _)| *code == locale.code())
            .map(|(_, t)| t)
    }
}

/// A product flattened into one locale's view, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedProduct {
    pub id: &'static str,
    pub price: f64,
    /// Price rendered under the locale's formatting conventions
    pub price_display: String,
    pub image: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scent: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<&'static str>,
}

/// All catalog products, in display order.
pub fn all() -> &'static [Product] {
    PRODUCTS
}

/// Find a product by id.
pub fn find(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// Resolve the translation for `id` under `locale`.
///
/// Falls back to the default locale's translation when `locale` is missing
/// the product's entry. Returns `None` only when the id itself is unknown.
pub fn resolve_translation(id: &str, locale: Locale) -> Option<&'static ProductTranslation> {
    find(id).map(|p| p.translation(locale))
}

/// The full catalog flattened into `locale`'s view.
pub fn localized(locale: Locale) -> Vec<LocalizedProduct> {
    PRODUCTS
        .iter()
        .map(|p| {
            let t = p.translation(locale);
            LocalizedProduct {
                id: p.id,
                price: p.price,
                price_display: currency::format_currency(locale, p.price),
                image: p.image,
                name: t.name,
                description: t.description,
                scent: t.scent,
                size: t.size,
            }
        })
        .collect()
}

// ==================== Catalog Data ====================

static PRODUCTS: &[Product] = &[
    Product {
        id: "lavender-dream",
        price: 18.5,
        image: "/images/product-lavender.svg",
        translations: &[
            (
                "en",
                ProductTranslation {
                    name: "Lavender Dream",
                    description: "Relaxing lavender candle blended with subtle vanilla notes.",
                    scent: Some("Lavender & Vanilla"),
                    size: Some("200g"),
                },
            ),
            (
                "de",
                ProductTranslation {
                    name: "Lavendel Traum",
                    description: "Entspannende Lavendelkerze mit sanften Vanillenoten.",
                    scent: Some("Lavendel & Vanille"),
                    size: Some("200g"),
                },
            ),
            (
                "fr",
                ProductTranslation {
                    name: "Rêve de Lavande",
                    description: "Bougie lavande relaxante aux douces notes de vanille.",
                    scent: Some("Lavande & Vanille"),
                    size: Some("200g"),
                },
            ),
        ],
    },
    Product {
        id: "citrus-morning",
        price: 16.0,
        image: "/images/product-citrus.svg",
        translations: &[
            (
                "en",
                ProductTranslation {
                    name: "Citrus Morning",
                    description: "Fresh citrus burst to energize your space.",
                    scent: Some("Orange & Grapefruit"),
                    size: Some("180g"),
                },
            ),
            (
                "de",
                ProductTranslation {
                    name: "Zitrus Morgen",
                    description: "Frischer Zitrus-Kick für neue Energie.",
                    scent: Some("Orange & Grapefruit"),
                    size: Some("180g"),
                },
            ),
            (
                "fr",
                ProductTranslation {
                    name: "Matin Agrume",
                    description: "Explosion d’agrumes frais pour dynamiser votre espace.",
                    scent: Some("Orange & Pamplemousse"),
                    size: Some("180g"),
                },
            ),
        ],
    },
    Product {
        id: "forest-walk",
        price: 19.75,
        image: "/images/product-forest.svg",
        translations: &[
            (
                "en",
                ProductTranslation {
                    name: "Forest Walk",
                    description: "Earthy pine and cedarwood aroma for grounding moments.",
                    scent: Some("Pine & Cedarwood"),
                    size: Some("220g"),
                },
            ),
            (
                "de",
                ProductTranslation {
                    name: "Waldspaziergang",
                    description: "Erdiger Duft aus Kiefer und Zedernholz für ruhige Momente.",
                    scent: Some("Kiefer & Zedernholz"),
                    size: Some("220g"),
                },
            ),
            (
                "fr",
                ProductTranslation {
                    name: "Promenade en Forêt",
                    description: "Arôme boisé de pin et cèdre pour des instants apaisants.",
                    scent: Some("Pin & Cèdre"),
                    size: Some("220g"),
                },
            ),
        ],
    },
];

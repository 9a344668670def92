//! Static site data: brand metadata, creator bio, and studio location.
//!
//! Central place for text, images, and links, mirroring the product catalog's
//! split between locale-invariant fields and per-locale records.

use crate::i18n::Locale;
use serde::Serialize;

/// A value with one variant per supported locale.
#[derive(Debug)]
pub struct Localized<T: 'static> {
    pub en: T,
    pub de: T,
    pub fr: T,
}

impl<T> Localized<T> {
    /// The variant for `locale`. English doubles as the default variant.
    pub fn get(&self, locale: Locale) -> &T {
        match locale.code() {
            "de" => &self.de,
            "fr" => &self.fr,
            _ => &self.en,
        }
    }
}

/// Brand-level metadata and outbound links.
#[derive(Debug)]
pub struct SiteMeta {
    pub brand: &'static str,
    pub hero_image: &'static str,
    pub tagline: Localized<&'static str>,
    pub instagram: &'static str,
    pub facebook: &'static str,
    pub tiktok: &'static str,
    /// Address orders and contact requests are answered from
    pub email: &'static str,
}

/// The person behind the brand.
#[derive(Debug)]
pub struct Creator {
    pub name: &'static str,
    pub photo: &'static str,
    pub role: Localized<&'static str>,
    pub bio: Localized<&'static str>,
}

/// The studio's physical location and map settings.
#[derive(Debug)]
pub struct StudioLocation {
    pub label: Localized<&'static str>,
    pub address_lines: Localized<&'static [&'static str]>,
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

pub static SITE: SiteMeta = SiteMeta {
    brand: "Lumos Candles",
    hero_image: "/images/hero-header.svg",
    tagline: Localized {
        en: "Hand-poured eco soy candles crafted with care",
        de: "Handgegossene ökologische Sojawachskerzen mit Sorgfalt gefertigt",
        fr: "Bougies écologiques en soja coulées à la main avec soin",
    },
    instagram: "https://instagram.com/yourbrand",
    facebook: "https://facebook.com/yourbrand",
    tiktok: "https://www.tiktok.com/@yourbrand",
    email: "orders@lumoscandles.example",
};

pub static CREATOR: Creator = Creator {
    name: "Ava Stone",
    photo: "/images/creator.svg",
    role: Localized {
        en: "Founder & Chandler",
        de: "Gründerin & Kerzenmacherin",
        fr: "Fondatrice & Maître Cirier",
    },
    bio: Localized {
        en: "I hand-pour every batch using sustainable soy wax and phthalate-free fragrances. My mission is to elevate everyday rituals with clean, calming light.",
        de: "Ich gieße jede Charge von Hand mit nachhaltigem Sojawachs und phtalatfreien Duftölen. Meine Mission: Alltägliche Rituale mit ruhigem, sauberem Licht bereichern.",
        fr: "Je coule chaque lot à la main avec une cire de soja durable et des parfums sans phtalates. Ma mission : enrichir les rituels quotidiens avec une lumière apaisante.",
    },
};

pub static LOCATION: StudioLocation = StudioLocation {
    label: Localized {
        en: "Studio & Micro-Factory",
        de: "Studio & Mikro-Manufaktur",
        fr: "Atelier & Micro-Usine",
    },
    address_lines: Localized {
        en: &["123 Candle Lane", "Greenwood, OR 97000", "USA"],
        de: &["123 Kerzenweg", "Greenwood, OR 97000", "USA"],
        fr: &["123 Allée des Bougies", "Greenwood, OR 97000", "États-Unis"],
    },
    latitude: 45.5152,
    longitude: -122.6784,
    zoom: 14,
};

/// Map embed for the studio location.
///
/// With a configured Google Maps key the Maps Embed API is used; without one
/// the site degrades to the keyless public embed and `hint_key` names the
/// catalog message explaining the degraded mode.
#[derive(Debug, Clone, Serialize)]
pub struct MapEmbed {
    pub url: String,
    /// Message key for the degraded-mode hint, present only without a key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint_key: Option<&'static str>,
}

/// Build the map embed for the studio location.
pub fn map_embed(google_maps_key: Option<&str>) -> MapEmbed {
    let lat = LOCATION.latitude;
    let lon = LOCATION.longitude;
    let zoom = LOCATION.zoom;

    match google_maps_key {
        Some(key) if !key.is_empty() => MapEmbed {
            url: format!(
                "https://www.google.com/maps/embed/v1/place?key={}&q={},{}&zoom={}",
                key, lat, lon, zoom
            ),
            hint_key: None,
        },
        _ => MapEmbed {
            url: format!(
                "https://www.google.com/maps?q={},{}&z={}&output=embed&hl=en",
                lat, lon, zoom
            ),
            hint_key: Some("sections.location.mapHint"),
        },
    }
}

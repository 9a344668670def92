use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    // Maps
    /// Optional Google Maps Embed API key; absent means the keyless public
    /// embed is used and a hint is shown
    pub google_maps_key: Option<String>,

    // Orders
    /// Optional webhook URL orders are posted to; absent means orders go to
    /// the log
    pub order_webhook_url: Option<String>,

    // Locale persistence
    pub locale_store_path: String,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            google_maps_key: optional_var("GOOGLE_MAPS_KEY"),

            order_webhook_url: optional_var("ORDER_WEBHOOK_URL"),

            locale_store_path: std::env::var("LOCALE_STORE_PATH")
                .unwrap_or_else(|_| "site-locale.txt".to_string()),

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}

/// Read an env var, treating unset and empty as absent.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

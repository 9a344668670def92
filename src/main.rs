use anyhow::Result;
use lumos_site::config::Config;
use lumos_site::i18n::storage::FileLocaleStorage;
use lumos_site::i18n::LocaleStore;
use lumos_site::server::{router, AppState};
use lumos_site::transport::AnyTransport;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lumos_site=info".parse()?),
        )
        .init();

    info!("Starting Lumos Candles site server");

    // Load configuration from environment
    let config = Config::from_env()?;

    let storage = FileLocaleStorage::new(&config.locale_store_path);
    let store = Arc::new(LocaleStore::new(Box::new(storage)));
    info!("Active locale: {}", store.current());

    let transport = Arc::new(AnyTransport::from_config(&config));

    let state = AppState {
        store,
        transport,
        google_maps_key: config.google_maps_key.clone(),
    };

    let app = router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

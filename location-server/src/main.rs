use std::net::SocketAddr;
use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use location_server::cache::{CacheConfig, SuggestionCache};
use location_server::geocoding::{GeocodingConfig, MapboxClient};
use location_server::search::{LocationSearch, SearchConfig};
use location_server::web::{AppState, create_router};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("location_server=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Get credentials from environment
    let access_token = std::env::var("MAPBOX_ACCESS_TOKEN").unwrap_or_else(|_| {
        warn!("MAPBOX_ACCESS_TOKEN not set; geocoded searches will fail");
        String::new()
    });

    let addr: SocketAddr = std::env::var("LOCATION_SERVER_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .inspect_err(|e| error!(error = %e, "invalid LOCATION_SERVER_ADDR"))?;

    let mut cache_config = CacheConfig::default();
    if let Ok(raw) = std::env::var("LOCATION_CACHE_TTL_SECS") {
        match raw.parse::<u64>() {
            Ok(secs) => cache_config = cache_config.with_ttl(Duration::from_secs(secs)),
            Err(e) => warn!(value = %raw, error = %e, "ignoring invalid LOCATION_CACHE_TTL_SECS"),
        }
    }

    let search_config = SearchConfig::default();

    let client = MapboxClient::new(
        GeocodingConfig::new(access_token).with_timeout(search_config.request_timeout),
    )?;
    let search = LocationSearch::new(
        client,
        SuggestionCache::new(&cache_config),
        search_config,
    );

    let app = create_router(AppState::new(search));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .inspect_err(|e| error!(%addr, error = %e, "failed to bind"))?;

    info!(
        %addr,
        cache_ttl_secs = cache_config.ttl.as_secs(),
        "location server listening"
    );
    info!("  GET  /health                         - Health check");
    info!("  GET  /api/locations/categories       - List search categories");
    info!("  POST /api/locations/search           - Search locations");
    info!("  GET  /api/locations/gazetteer/:id    - Look up an airport or station");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("location server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

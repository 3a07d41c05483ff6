use std::sync::Arc;

use swifteatz::adapters::http::{api_router, AppState, HttpOptions};
use swifteatz::adapters::{InMemoryAffiliateStore, InMemoryProfileStore};
use swifteatz::application::handlers::affiliate::TrackingDefaults;
use swifteatz::config::AppConfig;
use swifteatz::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init_tracing(&config)?;

    let profiles = Arc::new(InMemoryProfileStore::new());
    let affiliate = Arc::new(InMemoryAffiliateStore::new());

    let state = AppState {
        profile_reader: profiles.clone(),
        usage_recorder: profiles,
        affiliate_config: affiliate.clone(),
        affiliate_clicks: affiliate,
        tracking_defaults: TrackingDefaults {
            ids: config.affiliate.ids(),
            utm_source: config.affiliate.utm_source.clone(),
        },
        admins: config.admin.policy(),
    };

    let options = HttpOptions {
        cors_origins: config.server.cors_origins_list(),
        request_timeout: config.server.request_timeout(),
        request_tracing: config.features.enable_tracing,
    };
    let app = api_router(state, &options);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        "swifteatz listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("swifteatz shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

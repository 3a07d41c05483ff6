//! HTTP adapters - REST API over axum.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! [`api_router`] assembles them under `/api` with the shared layers.

pub mod affiliate;
pub mod auth;
pub mod error;
pub mod grocery;
pub mod plan;
pub mod state;

use std::time::Duration;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use auth::AuthenticatedUser;
pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

/// Cross-cutting HTTP settings.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    /// Allowed CORS origins. Empty allows any origin.
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
    /// Attach per-request tracing spans.
    pub request_tracing: bool,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
            request_tracing: true,
        }
    }
}

/// GET /health - Liveness check
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

/// Build the complete application router.
pub fn api_router(state: AppState, options: &HttpOptions) -> Router {
    let api = Router::new()
        .nest("/plan", plan::plan_routes())
        .nest("/grocery", grocery::grocery_routes())
        .nest("/affiliate", affiliate::affiliate_routes());

    let mut router = Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TimeoutLayer::new(options.request_timeout))
        .layer(cors_layer(&options.cors_origins))
        .with_state(state);

    if options.request_tracing {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::memory::{InMemoryAffiliateStore, InMemoryProfileStore};
    use crate::application::handlers::affiliate::TrackingDefaults;
    use crate::domain::admin::AdminPolicy;
    use crate::domain::affiliate::AffiliateIds;

    fn test_state() -> AppState {
        let profiles = Arc::new(InMemoryProfileStore::new());
        let affiliate = Arc::new(InMemoryAffiliateStore::new());
        AppState {
            profile_reader: profiles.clone(),
            usage_recorder: profiles,
            affiliate_config: affiliate.clone(),
            affiliate_clicks: affiliate,
            tracking_defaults: TrackingDefaults {
                ids: AffiliateIds::default(),
                utm_source: "swifteatz".to_string(),
            },
            admins: AdminPolicy::new(["admin@example.com"]),
        }
    }

    #[test]
    fn module_routers_accept_app_state() {
        let _: Router<()> = plan::plan_routes().with_state(test_state());
        let _: Router<()> = grocery::grocery_routes().with_state(test_state());
        let _: Router<()> = affiliate::affiliate_routes().with_state(test_state());
    }

    #[test]
    fn api_router_builds_with_restricted_origins() {
        let options = HttpOptions {
            cors_origins: vec!["https://app.example.com".to_string(), "bad\norigin".to_string()],
            ..Default::default()
        };
        let _router = api_router(test_state(), &options);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "ok");
    }
}

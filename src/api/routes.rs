//! Application route configuration.

use axum::{extract::State, http::StatusCode, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{
    admin_routes, application_routes, auth_routes, booking_routes, event_routes, host_routes,
    meta_routes, payment_routes, profile_routes, review_routes, session_routes,
};
use super::middleware::{auth_middleware, require_admin, require_host};
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let authenticated = session_routes()
        .merge(review_routes())
        .merge(booking_routes())
        .merge(application_routes())
        .merge(payment_routes());

    let host_only = host_routes().route_layer(middleware::from_fn(require_host));

    let admin_only = admin_routes().route_layer(middleware::from_fn(require_admin));

    Router::new()
        // Health endpoints, outside any middleware
        .route("/", get(root))
        .route("/health", get(health))
        // Public pages
        .merge(event_routes())
        .merge(profile_routes())
        .merge(meta_routes())
        .merge(auth_routes())
        // Session-gated pages
        .merge(
            authenticated
                .merge(host_only)
                .merge(admin_only)
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Evently web"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    upstream: UpstreamHealth,
}

/// Upstream API reachability
#[derive(Serialize)]
struct UpstreamHealth {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with upstream connectivity probe
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let upstream = match state.meta_service.home().await {
        Ok(_) => UpstreamHealth {
            status: "healthy",
            error: None,
        },
        Err(e) => UpstreamHealth {
            status: "unhealthy",
            error: Some(e.to_string()),
        },
    };

    let healthy = upstream.status == "healthy";
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        upstream,
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}

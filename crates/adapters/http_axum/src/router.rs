//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use casita_app::ports::{DeviceRepository, HouseRepository, RoomRepository, UserRepository};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the top-level service.
///
/// Trailing slashes are stripped before routing, so `/users/` matches
/// `/users`. Anything that matches no route — unknown paths, non-numeric id
/// segments, and known paths hit with an unsupported method — answers
/// 404 `{"error":"Not Found"}`. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<UR, HR, RR, DR>(state: AppState<UR, HR, RR, DR>) -> NormalizePath<Router>
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HouseRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

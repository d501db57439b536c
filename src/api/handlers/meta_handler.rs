//! Site metadata handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::domain::HomeMeta;
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Public metadata routes
pub fn meta_routes() -> Router<AppState> {
    Router::new().route("/meta/home", get(home_meta))
}

/// Landing-page counters
pub async fn home_meta(State(state): State<AppState>) -> AppResult<Json<ApiResponse<HomeMeta>>> {
    let meta = state.meta_service.home().await?;
    Ok(Json(ApiResponse::success(meta)))
}

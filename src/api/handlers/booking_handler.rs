//! Booking handlers - joining, leaving, and listing the user's events.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Extension, Router,
};

use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{Booking, JoinOutcome, Participation};
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Booking routes (behind the auth middleware)
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/events/:id/join", post(join_event))
        .route("/events/:id/leave", post(leave_event))
        .route("/events/:id/participation", get(participation))
        .route("/me/bookings", get(my_bookings))
}

/// Join an event. Paid events answer with a payment redirect URL the
/// browser should follow.
pub async fn join_event(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(event_id): Path<String>,
) -> AppResult<Json<ApiResponse<JoinOutcome>>> {
    let outcome = state.booking_service.join(&current.token, &event_id).await?;
    Ok(Json(ApiResponse::success(outcome)))
}

/// Leave an event
pub async fn leave_event(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(event_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let message = state.booking_service.leave(&current.token, &event_id).await?;
    Ok(Json(ApiResponse::message(message)))
}

/// Whether the current user has joined the event
pub async fn participation(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(event_id): Path<String>,
) -> AppResult<Json<ApiResponse<Participation>>> {
    let participation = state
        .booking_service
        .participation(&current.token, &event_id)
        .await?;
    Ok(Json(ApiResponse::success(participation)))
}

/// The current user's bookings
pub async fn my_bookings(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<Json<ApiResponse<Vec<Booking>>>> {
    let bookings = state.booking_service.my_bookings(&current.token).await?;
    Ok(Json(ApiResponse::success(bookings)))
}

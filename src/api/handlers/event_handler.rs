//! Event browsing and review handlers.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{session_token, CurrentUser};
use crate::api::AppState;
use crate::domain::{Event, Review, StatusBadge};
use crate::errors::AppResult;
use crate::services::EventFilters;
use crate::types::ApiResponse;

/// New review request
#[derive(Debug, Deserialize, Validate)]
pub struct ReviewRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be 1 to 5 stars"))]
    pub rating: u8,
    #[validate(length(min = 1, message = "Comment is required"))]
    pub comment: String,
}

/// Everything the event detail page renders, fetched in one round trip
#[derive(Debug, Serialize)]
pub struct EventPage {
    pub event: Event,
    pub badge: StatusBadge,
    pub reviews: Vec<Review>,
    pub viewer: ViewerActions,
}

/// Which actions the page enables for the current viewer.
///
/// Display-side only; the backend re-validates every action on submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerActions {
    pub joined: bool,
    pub can_join: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_disabled_reason: Option<&'static str>,
    pub can_review: bool,
    pub upcoming: bool,
}

impl ViewerActions {
    fn for_event(event: &Event, joined: bool) -> Self {
        Self {
            joined,
            can_join: event.can_join(joined),
            join_disabled_reason: event.join_refusal(joined).map(|r| r.message()),
            can_review: event.reviewable(),
            upcoming: event.is_upcoming(Utc::now()),
        }
    }
}

/// Public event browsing routes
pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/:id", get(get_event))
        .route("/events/:id/page", get(event_page))
        .route("/events/:id/reviews", get(list_reviews))
}

/// Review submission (behind the auth middleware)
pub fn review_routes() -> Router<AppState> {
    Router::new().route("/events/:id/reviews", post(create_review))
}

/// List events with filters and pagination
pub async fn list_events(
    State(state): State<AppState>,
    Query(filters): Query<EventFilters>,
) -> AppResult<Json<ApiResponse<Vec<Event>>>> {
    let (events, meta) = state.event_service.list(filters).await?;
    Ok(Json(ApiResponse::paginated(events, meta)))
}

/// Single event detail
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> AppResult<Json<ApiResponse<Event>>> {
    let event = state.event_service.get(&event_id).await?;
    Ok(Json(ApiResponse::success(event)))
}

/// Event detail plus its reviews, fetched concurrently.
///
/// The route is public; when the request carries a session the viewer's
/// participation decides which actions come back enabled.
pub async fn event_page(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    headers: HeaderMap,
) -> AppResult<Json<ApiResponse<EventPage>>> {
    let (event, reviews) = futures::try_join!(
        state.event_service.get(&event_id),
        state.event_service.reviews(&event_id),
    )?;

    let joined = match session_token(&headers, &state.config.session_cookie) {
        Some(token) => {
            state
                .booking_service
                .participation(&token, &event_id)
                .await?
                .is_joined
        }
        None => false,
    };

    let badge = event.status.badge();
    let viewer = ViewerActions::for_event(&event, joined);
    Ok(Json(ApiResponse::success(EventPage {
        event,
        badge,
        reviews,
        viewer,
    })))
}

/// Reviews for an event
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Review>>>> {
    let reviews = state.event_service.reviews(&event_id).await?;
    Ok(Json(ApiResponse::success(reviews)))
}

/// Submit a review for an attended event
pub async fn create_review(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(event_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ReviewRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let message = state
        .event_service
        .create_review(&current.token, &event_id, payload.rating, payload.comment)
        .await?;

    Ok(Json(ApiResponse::message(message)))
}

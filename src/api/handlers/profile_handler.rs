//! Profile and host-application handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use validator::Validate;

use super::auth_handler::removal_cookie;
use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{Event, HostApplication, UserProfile};
use crate::errors::AppResult;
use crate::services::HostApplicationForm;
use crate::types::ApiResponse;

/// Host application request, matching the become-a-host form
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HostApplicationRequest {
    #[validate(length(min = 5, message = "Bio must be at least 5 characters"))]
    pub bio: Option<String>,
    pub experience: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub portfolio: Option<String>,
    pub contact_number: Option<String>,
    #[validate(length(min = 2, message = "Location must be at least 2 characters"))]
    pub location: Option<String>,
}

/// Public profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profiles/:id", get(profile))
        .route("/profiles/:id/hosted-events", get(hosted_events))
        .route("/profiles/:id/joined-events", get(joined_events))
}

/// Host application routes (behind the auth middleware)
pub fn application_routes() -> Router<AppState> {
    Router::new().route(
        "/me/host-application",
        post(apply_host).get(application_status),
    )
}

/// Public profile for any user
pub async fn profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<ApiResponse<UserProfile>>> {
    let profile = state.profile_service.profile(&user_id).await?;
    Ok(Json(ApiResponse::success(profile)))
}

/// Events hosted by a user
pub async fn hosted_events(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Event>>>> {
    let events = state.profile_service.hosted_events(&user_id).await?;
    Ok(Json(ApiResponse::success(events)))
}

/// Events a user has joined
pub async fn joined_events(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Event>>>> {
    let events = state.profile_service.joined_events(&user_id).await?;
    Ok(Json(ApiResponse::success(events)))
}

/// Submit a host application.
///
/// The session cookie is cleared on success: the role embedded in the
/// current token goes stale once an admin approves, so the user signs in
/// again to pick up the new one.
pub async fn apply_host(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<HostApplicationRequest>,
) -> AppResult<(CookieJar, Json<ApiResponse<()>>)> {
    let form = HostApplicationForm {
        bio: payload.bio,
        experience: payload.experience,
        specialties: payload.specialties,
        portfolio: payload.portfolio,
        contact_number: payload.contact_number,
        location: payload.location,
    };

    let message = state.profile_service.apply_host(&current.token, form).await?;

    let jar = jar.add(removal_cookie(&state.config));
    Ok((jar, Json(ApiResponse::message(message))))
}

/// The current user's host application, if any
pub async fn application_status(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<Json<ApiResponse<Option<HostApplication>>>> {
    let application = state
        .profile_service
        .application_status(&current.token)
        .await?;
    Ok(Json(ApiResponse::success(application)))
}

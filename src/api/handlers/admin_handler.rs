//! Admin dashboard handlers.
//!
//! Account listings and status changes, the host approval queue, event
//! moderation, and the overview stats. The whole router sits behind the
//! admin role gate; the backend still re-authorizes every call.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{delete, get, patch},
    Extension, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::config::{is_valid_account_status, is_valid_event_status};
use crate::domain::{DashboardStats, Event, HostApplication, UserProfile};
use crate::errors::{AppError, AppResult};
use crate::services::AdminListFilters;
use crate::types::ApiResponse;

/// Account status change request
#[derive(Debug, Deserialize, Validate)]
pub struct AccountStatusRequest {
    #[validate(custom(function = validate_account_status, message = "Unknown account status"))]
    pub status: String,
}

fn validate_account_status(status: &str) -> Result<(), ValidationError> {
    if is_valid_account_status(status) {
        Ok(())
    } else {
        Err(ValidationError::new("status"))
    }
}

/// Event status change request
#[derive(Debug, Deserialize, Validate)]
pub struct EventStatusRequest {
    #[validate(custom(function = validate_event_status, message = "Unknown event status"))]
    pub status: String,
}

fn validate_event_status(status: &str) -> Result<(), ValidationError> {
    if is_valid_event_status(status) {
        Ok(())
    } else {
        Err(ValidationError::new("status"))
    }
}

/// Admin profile update request
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminPatchRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: Option<String>,
    pub contact_number: Option<String>,
    pub location: Option<String>,
}

impl AdminPatchRequest {
    fn to_value(&self) -> AppResult<Value> {
        let mut map = serde_json::Map::new();
        if let Some(name) = &self.name {
            map.insert("name".to_string(), Value::String(name.clone()));
        }
        if let Some(contact_number) = &self.contact_number {
            map.insert(
                "contactNumber".to_string(),
                Value::String(contact_number.clone()),
            );
        }
        if let Some(location) = &self.location {
            map.insert("location".to_string(), Value::String(location.clone()));
        }
        if map.is_empty() {
            return Err(AppError::validation("Nothing to update"));
        }
        Ok(Value::Object(map))
    }
}

/// Admin routes (behind auth + admin role gate)
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/stats", get(dashboard_stats))
        .route("/admin/admins", get(list_admins))
        .route(
            "/admin/admins/:id",
            patch(update_admin).delete(delete_admin),
        )
        .route("/admin/users", get(list_users))
        .route("/admin/users/:id", delete(delete_user))
        .route("/admin/users/:id/status", patch(update_user_status))
        .route("/admin/hosts", get(list_hosts))
        .route("/admin/hosts/:id", delete(delete_host))
        .route("/admin/hosts/:id/status", patch(update_host_status))
        .route("/admin/host-applications", get(pending_host_applications))
        .route("/admin/host-applications/:id/approve", patch(approve_application))
        .route("/admin/host-applications/:id/reject", patch(reject_application))
        .route("/admin/events", get(list_events))
        .route("/admin/events/pending", get(pending_events))
        .route("/admin/events/:id", delete(delete_event))
        .route("/admin/events/:id/status", patch(update_event_status))
        .route("/admin/events/:id/approve", patch(approve_event))
        .route("/admin/events/:id/reject", patch(reject_event))
}

/// The dashboard overview: upstream totals plus the derived success rate
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    #[serde(flatten)]
    pub stats: DashboardStats,
    pub success_percentage: u64,
}

/// Platform totals and event status breakdown
pub async fn dashboard_stats(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<Json<ApiResponse<AdminOverview>>> {
    let stats = state.admin_service.dashboard_stats(&current.token).await?;
    let overview = AdminOverview {
        success_percentage: stats.success_percentage(),
        stats,
    };
    Ok(Json(ApiResponse::success(overview)))
}

pub async fn list_admins(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Query(filters): Query<AdminListFilters>,
) -> AppResult<Json<ApiResponse<Vec<UserProfile>>>> {
    let (admins, meta) = state.admin_service.admins(&current.token, filters).await?;
    Ok(Json(ApiResponse::paginated(admins, meta)))
}

pub async fn update_admin(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(admin_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<AdminPatchRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let message = state
        .admin_service
        .update_admin(&current.token, &admin_id, payload.to_value()?)
        .await?;
    Ok(Json(ApiResponse::message(message)))
}

pub async fn delete_admin(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(admin_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let message = state
        .admin_service
        .delete_admin(&current.token, &admin_id)
        .await?;
    Ok(Json(ApiResponse::message(message)))
}

pub async fn list_users(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Query(filters): Query<AdminListFilters>,
) -> AppResult<Json<ApiResponse<Vec<UserProfile>>>> {
    let (users, meta) = state.admin_service.users(&current.token, filters).await?;
    Ok(Json(ApiResponse::paginated(users, meta)))
}

pub async fn update_user_status(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(user_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<AccountStatusRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let message = state
        .admin_service
        .update_user_status(&current.token, &user_id, payload.status)
        .await?;
    Ok(Json(ApiResponse::message(message)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(user_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let message = state
        .admin_service
        .delete_user(&current.token, &user_id)
        .await?;
    Ok(Json(ApiResponse::message(message)))
}

pub async fn list_hosts(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Query(filters): Query<AdminListFilters>,
) -> AppResult<Json<ApiResponse<Vec<UserProfile>>>> {
    let (hosts, meta) = state.admin_service.hosts(&current.token, filters).await?;
    Ok(Json(ApiResponse::paginated(hosts, meta)))
}

pub async fn update_host_status(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(host_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<AccountStatusRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let message = state
        .admin_service
        .update_host_status(&current.token, &host_id, payload.status)
        .await?;
    Ok(Json(ApiResponse::message(message)))
}

pub async fn delete_host(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(host_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let message = state
        .admin_service
        .delete_host(&current.token, &host_id)
        .await?;
    Ok(Json(ApiResponse::message(message)))
}

/// Host applications awaiting a decision
pub async fn pending_host_applications(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<Json<ApiResponse<Vec<HostApplication>>>> {
    let applications = state
        .admin_service
        .pending_host_applications(&current.token)
        .await?;
    Ok(Json(ApiResponse::success(applications)))
}

pub async fn approve_application(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(application_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let message = state
        .admin_service
        .approve_host_application(&current.token, &application_id)
        .await?;
    Ok(Json(ApiResponse::message(message)))
}

pub async fn reject_application(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(application_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let message = state
        .admin_service
        .reject_host_application(&current.token, &application_id)
        .await?;
    Ok(Json(ApiResponse::message(message)))
}

pub async fn list_events(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Query(filters): Query<AdminListFilters>,
) -> AppResult<Json<ApiResponse<Vec<Event>>>> {
    let (events, meta) = state.admin_service.events(&current.token, filters).await?;
    Ok(Json(ApiResponse::paginated(events, meta)))
}

/// Events awaiting moderation
pub async fn pending_events(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<Json<ApiResponse<Vec<Event>>>> {
    let events = state.admin_service.pending_events(&current.token).await?;
    Ok(Json(ApiResponse::success(events)))
}

pub async fn approve_event(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(event_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let message = state
        .admin_service
        .approve_event(&current.token, &event_id)
        .await?;
    Ok(Json(ApiResponse::message(message)))
}

pub async fn reject_event(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(event_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let message = state
        .admin_service
        .reject_event(&current.token, &event_id)
        .await?;
    Ok(Json(ApiResponse::message(message)))
}

pub async fn update_event_status(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(event_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<EventStatusRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let message = state
        .admin_service
        .update_event_status(&current.token, &event_id, payload.status)
        .await?;
    Ok(Json(ApiResponse::message(message)))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(event_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let message = state
        .admin_service
        .delete_event(&current.token, &event_id)
        .await?;
    Ok(Json(ApiResponse::message(message)))
}

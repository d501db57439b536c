//! Host event management handlers.

use axum::{
    extract::{Path, Query, Request, State},
    response::Json,
    routing::{get, patch},
    Extension, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::api::extractors::parse_json_or_upload;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::config::is_valid_category;
use crate::domain::{Event, StatusBadge};
use crate::errors::AppResult;
use crate::services::{EventFilters, EventForm, EventPatch};
use crate::types::{ApiResponse, Created};

/// New event request, matching the create-event form
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[validate(length(min = 2, message = "Title must be at least 2 characters"))]
    pub title: String,
    #[validate(custom(function = validate_category, message = "Unknown category"))]
    pub category: String,
    #[validate(length(min = 5, message = "Description must be at least 5 characters"))]
    pub description: String,
    pub date: DateTime<Utc>,
    #[validate(length(min = 2, message = "Location must be at least 2 characters"))]
    pub location: String,
    #[validate(range(min = 0.0, message = "Joining fee cannot be negative"))]
    pub joining_fee: f64,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: u32,
}

/// Partial event update
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[validate(length(min = 2, message = "Title must be at least 2 characters"))]
    pub title: Option<String>,
    #[validate(custom(function = validate_category, message = "Unknown category"))]
    pub category: Option<String>,
    #[validate(length(min = 5, message = "Description must be at least 5 characters"))]
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    #[validate(length(min = 2, message = "Location must be at least 2 characters"))]
    pub location: Option<String>,
    #[validate(range(min = 0.0, message = "Joining fee cannot be negative"))]
    pub joining_fee: Option<f64>,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: Option<u32>,
}

fn validate_category(category: &str) -> Result<(), ValidationError> {
    if is_valid_category(category) {
        Ok(())
    } else {
        Err(ValidationError::new("category"))
    }
}

/// An event row on the host dashboard: the record plus the badge and the
/// actions the management table enables
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostEventView {
    #[serde(flatten)]
    pub event: Event,
    pub badge: StatusBadge,
    pub editable: bool,
    pub cancellable: bool,
}

impl From<Event> for HostEventView {
    fn from(event: Event) -> Self {
        Self {
            badge: event.status.badge(),
            editable: event.editable_by_host(),
            cancellable: event.cancellable(),
            event,
        }
    }
}

/// Host routes (behind auth + host role gate)
pub fn host_routes() -> Router<AppState> {
    Router::new()
        .route("/host/events", get(my_events).post(create_event))
        .route("/host/events/:id", patch(update_event).delete(delete_event))
}

/// The host's own events, decorated for the management table
pub async fn my_events(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Query(filters): Query<EventFilters>,
) -> AppResult<Json<ApiResponse<Vec<HostEventView>>>> {
    let (events, meta) = state.host_service.my_events(&current.token, filters).await?;
    let rows = events.into_iter().map(HostEventView::from).collect();
    Ok(Json(ApiResponse::paginated(rows, meta)))
}

/// Create an event, optionally with a cover image (multipart)
pub async fn create_event(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    req: Request,
) -> AppResult<Created<Event>> {
    let (payload, image) = parse_json_or_upload::<CreateEventRequest>(req).await?;

    let form = EventForm {
        title: payload.title,
        category: payload.category,
        description: payload.description,
        date: payload.date,
        location: payload.location,
        joining_fee: payload.joining_fee,
        capacity: payload.capacity,
    };

    let event = state
        .host_service
        .create_event(&current.token, form, image)
        .await?;

    Ok(Created(event))
}

/// Update an event, optionally replacing the cover image (multipart)
pub async fn update_event(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(event_id): Path<String>,
    req: Request,
) -> AppResult<Json<ApiResponse<Event>>> {
    let (payload, image) = parse_json_or_upload::<UpdateEventRequest>(req).await?;

    let patch = EventPatch {
        title: payload.title,
        category: payload.category,
        description: payload.description,
        date: payload.date,
        location: payload.location,
        joining_fee: payload.joining_fee,
        capacity: payload.capacity,
    };

    let event = state
        .host_service
        .update_event(&current.token, &event_id, patch, image)
        .await?;

    Ok(Json(ApiResponse::with_message(event, "Event updated")))
}

/// Delete an event
pub async fn delete_event(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(event_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let message = state
        .host_service
        .delete_event(&current.token, &event_id)
        .await?;
    Ok(Json(ApiResponse::message(message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> CreateEventRequest {
        CreateEventRequest {
            title: "Jazz Night".into(),
            category: "MUSIC".into(),
            description: "Live trio downtown".into(),
            date: Utc::now(),
            location: "Blue Note".into(),
            joining_fee: 25.0,
            capacity: 80,
        }
    }

    #[test]
    fn valid_event_passes() {
        assert!(base_request().validate().is_ok());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut payload = base_request();
        payload.category = "TIME_TRAVEL".into();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let mut payload = base_request();
        payload.capacity = 0;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn patch_validates_only_present_fields() {
        let payload = UpdateEventRequest {
            capacity: Some(10),
            ..Default::default()
        };
        assert!(payload.validate().is_ok());
    }
}

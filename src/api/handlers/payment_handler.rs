//! Payment history handlers.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::Deserialize;

use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::PaymentRecord;
use crate::errors::AppResult;
use crate::types::{ApiResponse, PaginationParams};

/// Payment history query: pagination plus an optional status filter
#[derive(Debug, Default, Deserialize)]
pub struct PaymentHistoryQuery {
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
}

impl PaymentHistoryQuery {
    fn pagination(&self) -> PaginationParams {
        let defaults = PaginationParams::default();
        PaginationParams {
            page: self.page.unwrap_or(defaults.page),
            limit: self.limit.unwrap_or(defaults.limit),
        }
    }
}

/// Payment routes (behind the auth middleware)
pub fn payment_routes() -> Router<AppState> {
    Router::new().route("/me/payments", get(payment_history))
}

/// The current user's payment history
pub async fn payment_history(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Query(query): Query<PaymentHistoryQuery>,
) -> AppResult<Json<ApiResponse<Vec<PaymentRecord>>>> {
    let (records, meta) = state
        .payment_service
        .history(&current.token, query.pagination(), query.status.clone())
        .await?;
    Ok(Json(ApiResponse::paginated(records, meta)))
}

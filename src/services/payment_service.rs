//! Payment history service.
//!
//! Read-only access to the viewer's payment records. The payment flow
//! itself (gateway redirect, IPN callbacks) lives entirely upstream.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::PaymentRecord;
use crate::errors::AppResult;
use crate::types::{ListMeta, PaginationParams};
use crate::upstream::Upstream;

/// Payment service trait for dependency injection.
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// The viewer's payment history, newest first
    async fn history(
        &self,
        token: &str,
        params: PaginationParams,
        status: Option<String>,
    ) -> AppResult<(Vec<PaymentRecord>, Option<ListMeta>)>;
}

/// Concrete implementation forwarding to the upstream API.
pub struct PaymentGateway {
    upstream: Arc<dyn Upstream>,
}

impl PaymentGateway {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl PaymentService for PaymentGateway {
    async fn history(
        &self,
        token: &str,
        params: PaginationParams,
        status: Option<String>,
    ) -> AppResult<(Vec<PaymentRecord>, Option<ListMeta>)> {
        let mut query = params.to_query();
        if let Some(status) = status.filter(|s| !s.is_empty()) {
            query.push(("status".to_string(), status.to_uppercase()));
        }

        let envelope = self
            .upstream
            .get("/payment/payments-history", &query, Some(token))
            .await?;
        let records: Vec<PaymentRecord> = envelope.data_or_default()?;
        Ok((records, envelope.meta))
    }
}

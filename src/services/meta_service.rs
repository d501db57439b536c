//! Site metadata service: aggregate counts for the landing page.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::HomeMeta;
use crate::errors::AppResult;
use crate::upstream::Upstream;

/// Meta service trait for dependency injection.
#[async_trait]
pub trait MetaService: Send + Sync {
    /// Landing-page counters (events, hosts, participants)
    async fn home(&self) -> AppResult<HomeMeta>;
}

/// Concrete implementation forwarding to the upstream API.
pub struct MetaGateway {
    upstream: Arc<dyn Upstream>,
}

impl MetaGateway {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl MetaService for MetaGateway {
    async fn home(&self) -> AppResult<HomeMeta> {
        let envelope = self.upstream.get("/meta/home-meta", &[], None).await?;
        envelope.data_or_default()
    }
}

//! Ping command - Probes the upstream API.

use crate::api::AppState;
use crate::config::Config;
use crate::errors::AppResult;

/// Execute the ping command: one round trip to the upstream API
pub async fn execute(config: Config) -> AppResult<()> {
    let upstream_url = config.upstream_url.clone();
    let state = AppState::from_config(config)?;

    let meta = state.meta_service.home().await?;
    tracing::info!(
        "Upstream {} is reachable ({} events, {} hosts)",
        upstream_url,
        meta.total_events,
        meta.total_hosts
    );

    Ok(())
}

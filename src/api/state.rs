//! Application state - Dependency injection container.
//!
//! Holds one gateway per service trait, all sharing a single upstream
//! HTTP client, plus the runtime configuration.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::services::{
    AdminGateway, AdminService, AuthService, Authenticator, BookingGateway, BookingService,
    EventGateway, EventService, HostGateway, HostService, MetaGateway, MetaService,
    PaymentGateway, PaymentService, ProfileGateway, ProfileService,
};
use crate::upstream::{Backend, Upstream};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub event_service: Arc<dyn EventService>,
    pub booking_service: Arc<dyn BookingService>,
    pub host_service: Arc<dyn HostService>,
    pub profile_service: Arc<dyn ProfileService>,
    pub admin_service: Arc<dyn AdminService>,
    pub payment_service: Arc<dyn PaymentService>,
    pub meta_service: Arc<dyn MetaService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state from configuration.
    ///
    /// Builds the shared upstream client and wires every gateway to it.
    /// This is the production entry point.
    pub fn from_config(config: Config) -> AppResult<Self> {
        let upstream: Arc<dyn Upstream> = Arc::new(Backend::new(&config)?);
        Ok(Self::with_upstream(upstream, config))
    }

    /// Wire all gateways to a given upstream implementation.
    pub fn with_upstream(upstream: Arc<dyn Upstream>, config: Config) -> Self {
        Self {
            auth_service: Arc::new(Authenticator::new(upstream.clone())),
            event_service: Arc::new(EventGateway::new(upstream.clone())),
            booking_service: Arc::new(BookingGateway::new(upstream.clone())),
            host_service: Arc::new(HostGateway::new(upstream.clone())),
            profile_service: Arc::new(ProfileGateway::new(upstream.clone())),
            admin_service: Arc::new(AdminGateway::new(upstream.clone())),
            payment_service: Arc::new(PaymentGateway::new(upstream.clone())),
            meta_service: Arc::new(MetaGateway::new(upstream)),
            config: Arc::new(config),
        }
    }

    /// Create new application state with manually injected services.
    ///
    /// Intended for tests that stub individual services.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        event_service: Arc<dyn EventService>,
        booking_service: Arc<dyn BookingService>,
        host_service: Arc<dyn HostService>,
        profile_service: Arc<dyn ProfileService>,
        admin_service: Arc<dyn AdminService>,
        payment_service: Arc<dyn PaymentService>,
        meta_service: Arc<dyn MetaService>,
        config: Config,
    ) -> Self {
        Self {
            auth_service,
            event_service,
            booking_service,
            host_service,
            profile_service,
            admin_service,
            payment_service,
            meta_service,
            config: Arc::new(config),
        }
    }
}

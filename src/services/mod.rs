//! Application services layer - gateways over the upstream API.
//!
//! Each service is a trait plus a concrete gateway that forwards calls
//! to the backend and normalizes its reply envelope. Handlers depend on
//! the traits so tests can swap in mocks.

mod admin_service;
mod auth_service;
mod booking_service;
mod event_service;
mod host_service;
mod meta_service;
mod payment_service;
mod profile_service;

// Service traits and implementations
pub use admin_service::{AdminGateway, AdminListFilters, AdminService, Listing};
pub use auth_service::{AuthService, Authenticator, Claims, LoginOutcome, RegisterForm};
pub use booking_service::{BookingGateway, BookingService};
pub use event_service::{EventFilters, EventGateway, EventService};
pub use host_service::{EventForm, EventPatch, HostGateway, HostService};
pub use meta_service::{MetaGateway, MetaService};
pub use payment_service::{PaymentGateway, PaymentService};
pub use profile_service::{HostApplicationForm, ProfileGateway, ProfileService};

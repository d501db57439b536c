//! HTTP request handlers.

pub mod admin_handler;
pub mod auth_handler;
pub mod booking_handler;
pub mod event_handler;
pub mod host_handler;
pub mod meta_handler;
pub mod payment_handler;
pub mod profile_handler;

pub use admin_handler::admin_routes;
pub use auth_handler::{auth_routes, session_routes};
pub use booking_handler::booking_routes;
pub use event_handler::{event_routes, review_routes};
pub use host_handler::host_routes;
pub use meta_handler::meta_routes;
pub use payment_handler::payment_routes;
pub use profile_handler::{application_routes, profile_routes};

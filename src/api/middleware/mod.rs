//! API middleware.

mod auth;

pub use auth::{auth_middleware, require_admin, require_host, session_token, CurrentUser};

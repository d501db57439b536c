//! Evently web - browser-facing application server for an events marketplace
//!
//! Every page and action is backed by a separate REST API that owns the
//! data and the business rules. This crate is the glue in front of it:
//! role-gated routes, session handling, form validation, and thin service
//! gateways that forward calls upstream and normalize the reply envelope.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Records mirrored from the upstream API plus display rules
//! - **services**: Gateways forwarding use cases to the upstream API
//! - **upstream**: The HTTP client and reply envelope normalization
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Check upstream connectivity
//! cargo run -- ping
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod types;
pub mod upstream;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Event, EventStatus, SessionUser, UserRole};
pub use errors::{AppError, AppResult};

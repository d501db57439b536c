//! Upstream REST API integration.
//!
//! The backend service owns all business logic; this module is the one
//! doorway to it. Services above it never see reqwest types.

mod client;
mod envelope;

pub use client::{Backend, FilePart, Upstream};
pub use envelope::Envelope;

#[cfg(any(test, feature = "test-utils"))]
pub use client::MockUpstream;

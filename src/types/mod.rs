//! Shared types for DRY compliance.

mod pagination;
mod response;

pub use pagination::{ListMeta, PaginationParams};
pub use response::{ApiResponse, Created};

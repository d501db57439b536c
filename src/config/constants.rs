//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Maximum allowed items per page to prevent excessive upstream queries
pub const MAX_PAGE_SIZE: u64 = 100;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

// =============================================================================
// Session & Authentication
// =============================================================================

/// Cookie that carries the upstream-issued access token
pub const SESSION_COOKIE: &str = "accessToken";

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

// =============================================================================
// User Roles
// =============================================================================

/// Client role: browses and books events
pub const ROLE_CLIENT: &str = "CLIENT";

/// Host role: creates and manages events
pub const ROLE_HOST: &str = "HOST";

/// Admin role: approves hosts/events and reviews payments
pub const ROLE_ADMIN: &str = "ADMIN";

// =============================================================================
// Account statuses (admin status updates)
// =============================================================================

/// Statuses an admin may assign to a user/host account
pub const ACCOUNT_STATUSES: &[&str] = &["ACTIVE", "INACTIVE", "SUSPENDED", "PENDING"];

/// Check if an account status value is valid
pub fn is_valid_account_status(status: &str) -> bool {
    ACCOUNT_STATUSES.contains(&status)
}

// =============================================================================
// Event vocabulary (mirrored from the backend enums)
// =============================================================================

/// Event statuses an admin may assign directly
pub const EVENT_STATUSES: &[&str] = &[
    "PENDING", "OPEN", "FULL", "REJECTED", "CANCELLED", "COMPLETED",
];

/// Check if an event status value is valid
pub fn is_valid_event_status(status: &str) -> bool {
    EVENT_STATUSES.contains(&status)
}

/// Event categories accepted by the backend. The backend owns this list;
/// it is mirrored here only for form validation and filter passthrough.
pub const EVENT_CATEGORIES: &[&str] = &[
    "MUSIC", "MOVIE", "THEATER", "COMEDY", "PARTY", "NIGHTLIFE", "CONCERT",
    "FESTIVAL", "SPORTS", "HIKING", "CYCLING", "RUNNING", "FITNESS", "CAMPING",
    "OUTDOOR", "ADVENTURE", "SOCIAL", "NETWORKING", "MEETUP", "COMMUNITY",
    "VOLUNTEERING", "CULTURE", "RELIGION", "FOOD", "DINNER", "COOKING",
    "TASTING", "CAFE", "RESTAURANT", "TECH", "WORKSHOP", "SEMINAR",
    "CONFERENCE", "EDUCATION", "LANGUAGE", "BUSINESS", "FINANCE", "ART",
    "CRAFT", "PHOTOGRAPHY", "PAINTING", "WRITING", "DANCE", "GAMING", "OTHER",
];

/// Check if a category token is one the backend understands
pub fn is_valid_category(category: &str) -> bool {
    EVENT_CATEGORIES.contains(&category)
}

/// Client interest tags accepted on registration
pub const INTERESTS: &[&str] = &[
    "MUSIC", "SPORTS", "HIKING", "TRAVEL", "COOKING", "READING", "DANCING",
    "GAMING", "TECHNOLOGY", "PHOTOGRAPHY", "ART", "MOVIES", "FITNESS", "YOGA",
    "CYCLING", "RUNNING", "CAMPING", "FISHING", "LANGUAGES", "FOOD",
    "VOLUNTEERING", "GARDENING", "WRITING", "FASHION", "BUSINESS", "FINANCE",
    "MEDITATION", "DIY", "PETS", "SOCIALIZING", "OTHER",
];

/// Check if an interest token is one the backend understands
pub fn is_valid_interest(interest: &str) -> bool {
    INTERESTS.contains(&interest)
}

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Upstream REST API
// =============================================================================

/// Default upstream API base URL (for development)
pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:5000/api/v1";

/// Default upstream request timeout in seconds
pub const DEFAULT_UPSTREAM_TIMEOUT_SECONDS: u64 = 30;

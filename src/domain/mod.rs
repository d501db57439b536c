//! Domain layer - records mirrored from the upstream REST API.
//!
//! Nothing in this module is authoritative: the backend owns every entity
//! and every rule. What lives here is the read-side shape of those entities
//! plus the display logic (badges, enabled/disabled actions) the pages need.

pub mod booking;
pub mod event;
pub mod host_application;
pub mod meta;
pub mod payment;
pub mod review;
pub mod user;

pub use booking::{Booking, JoinOutcome, Participation};
pub use event::{BadgeTone, Event, EventHost, EventStatus, JoinRefusal, StatusBadge};
pub use host_application::{ApplicationStatus, HostApplication};
pub use meta::{DashboardStats, DashboardTotals, HomeMeta};
pub use payment::PaymentRecord;
pub use review::Review;
pub use user::{AccountStatus, SessionUser, UserProfile, UserRole};

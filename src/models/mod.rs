pub mod booking;
pub mod language;
pub mod service;

use serde::Serialize;

pub use booking::{Booking, BookingDraft, BookingStatus};
pub use language::Language;
pub use service::{LocalizedService, ServiceCategory, ServiceItem};

/// Result of an update keyed by id. A missing id is not an error.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOutcome {
    Updated,
    NotFound,
}

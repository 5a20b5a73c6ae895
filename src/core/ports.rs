// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the calendar storage capability as a trait the application layer
//   codes against.
//
// Responsibilities
// - Keep the core independent of any database by coding against traits.
// - Carry the per-user serialization guarantee: every write names the calendar
//   version it was decided against, so two submissions racing on the same
//   snapshot cannot both land.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the
//   adapters layer.
//
// Testing guidance
// - Use the in memory implementation for tests and local development.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::leave_request::state::{LeaveRequest, RequestStatus};

#[derive(Debug, Error)]
pub enum CalendarStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("leave request {leave_request_id} not found")]
    NotFound { leave_request_id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

/// One user's calendar as read at a point in time, with the version every
/// subsequent write for that user must name.
#[derive(Debug, Clone)]
pub struct LoadedCalendar {
    pub requests: Vec<LeaveRequest>,
    pub version: i64,
}

#[async_trait]
pub trait CalendarStore: Send + Sync {
    async fn load(&self, user_id: &str) -> Result<LoadedCalendar, CalendarStoreError>;

    async fn append(
        &self,
        user_id: &str,
        expected_version: i64,
        request: LeaveRequest,
    ) -> Result<(), CalendarStoreError>;

    async fn set_status(
        &self,
        user_id: &str,
        expected_version: i64,
        leave_request_id: &str,
        status: RequestStatus,
    ) -> Result<(), CalendarStoreError>;
}

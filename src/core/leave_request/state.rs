// LeaveRequest is the canonical domain record persisted in a user's calendar.
//
// Purpose
// - Carry one leave request's identity, span and workflow status.
//
// Boundaries
// - This file must not perform input or output.
// - Keep it framework-free.
//
// Notes
// - created_at uses epoch milliseconds, consistently with every other i64
//   timestamp in the crate.

use serde::{Deserialize, Serialize};

use crate::core::leave_request::interval::LeaveInterval;

/// Workflow status of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl RequestStatus {
    /// Only pending and approved requests occupy calendar cells; rejected and
    /// cancelled ones are archived and never block new bookings.
    pub fn blocks_calendar(&self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::Approved)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub leave_request_id: String,
    pub user_id: String,
    pub interval: LeaveInterval,
    pub reason: String,
    pub status: RequestStatus,
    pub created_at: i64,
    pub created_by: String,
}

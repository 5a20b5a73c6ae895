// Command data type for submitting a leave request.
//
// Purpose
// - Express user intent to book time off between two half-day endpoints.
//
// Responsibilities
// - Carry input data for the decider to validate against the user's calendar.
// - Be independent of transport layer details (not tied to any form or page).

use crate::core::leave_request::half_day::HalfDayPoint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitLeaveRequest {
    pub leave_request_id: String,
    pub user_id: String,
    pub start: HalfDayPoint,
    pub end: HalfDayPoint,
    pub reason: String,
    pub created_at: i64,
    pub created_by: String,
}

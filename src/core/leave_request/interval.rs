// The leave interval and its covered half-unit span.
//
// Purpose
// - Represent one leave request's date range with half-day endpoint caps.
//
// Responsibilities
// - Compute the contiguous half-unit span an interval covers, inclusive of its
//   endpoints' partial-day rules, and decide whether two spans intersect.
// - Reject malformed ranges where the start cap orders after the end cap.
//
// Boundaries
// - Pure values and functions. No input or output.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::leave_request::half_day::HalfDayPoint;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("interval start orders after its end")]
pub struct InvalidInterval;

/// A leave request's span at half-day resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveInterval {
    pub start: HalfDayPoint,
    pub end: HalfDayPoint,
}

impl LeaveInterval {
    pub fn new(start: HalfDayPoint, end: HalfDayPoint) -> Self {
        Self { start, end }
    }

    /// The inclusive half-unit range this interval covers, or `InvalidInterval`
    /// when the caps are mis-ordered (for example a same-day range starting in
    /// the afternoon and ending at midday).
    pub(crate) fn half_unit_span(&self) -> Result<(i64, i64), InvalidInterval> {
        let first = self.start.start_unit();
        let last = self.end.end_unit();
        if first > last {
            return Err(InvalidInterval);
        }
        Ok((first, last))
    }

    pub fn is_well_ordered(&self) -> bool {
        self.half_unit_span().is_ok()
    }

    /// True when the two intervals share at least one (date, half-unit) cell.
    /// Mis-ordered intervals cover nothing and overlap nothing.
    pub fn overlaps(&self, other: &LeaveInterval) -> bool {
        match (self.half_unit_span(), other.half_unit_span()) {
            (Ok((a_first, a_last)), Ok((b_first, b_last))) => {
                a_first <= b_last && b_first <= a_last
            }
            _ => false,
        }
    }
}

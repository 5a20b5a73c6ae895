// Shared test fixture for the SubmitLeaveRequest command.
//
// The default command is the first booking of the overlapping-bookings trace:
// afternoon of 2015-06-16 through the whole of 2015-06-17.

use crate::core::leave_request::decider::submit::command::SubmitLeaveRequest;
use crate::core::leave_request::half_day::{DayPart, HalfDayPoint};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitLeaveRequestDto {
    pub leave_request_id: String,
    pub user_id: String,
    pub from_date: NaiveDate,
    pub from_part: DayPart,
    pub to_date: NaiveDate,
    pub to_part: DayPart,
    pub reason: String,
}

pub struct SubmitLeaveRequestBuilder {
    inner: SubmitLeaveRequest,
}

impl Default for SubmitLeaveRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SubmitLeaveRequestBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/test_support/fixtures/commands/json/submit_leave_request.json")
                .unwrap();
        let dto: SubmitLeaveRequestDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: SubmitLeaveRequest {
                leave_request_id: dto.leave_request_id,
                user_id: dto.user_id,
                start: HalfDayPoint::new(dto.from_date, dto.from_part),
                end: HalfDayPoint::new(dto.to_date, dto.to_part),
                reason: dto.reason,
                created_at: 1_434_000_000_000,
                created_by: "user-fixed-0001".to_string(),
            },
        }
    }

    pub fn leave_request_id(mut self, v: impl Into<String>) -> Self {
        self.inner.leave_request_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn start(mut self, v: HalfDayPoint) -> Self {
        self.inner.start = v;
        self
    }

    pub fn end(mut self, v: HalfDayPoint) -> Self {
        self.inner.end = v;
        self
    }

    pub fn span(mut self, from: NaiveDate, from_part: DayPart, to: NaiveDate, to_part: DayPart) -> Self {
        self.inner.start = HalfDayPoint::new(from, from_part);
        self.inner.end = HalfDayPoint::new(to, to_part);
        self
    }

    pub fn reason(mut self, v: impl Into<String>) -> Self {
        self.inner.reason = v.into();
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn created_by(mut self, v: impl Into<String>) -> Self {
        self.inner.created_by = v.into();
        self
    }

    pub fn build(self) -> SubmitLeaveRequest {
        self.inner
    }
}

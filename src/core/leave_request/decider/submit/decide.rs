// Pure decision logic for submission.
//
// Purpose
// - Decide whether a candidate leave interval may join a calendar of already
//   committed intervals, at half-day resolution.
//
// Responsibilities
// - Enforce the overlap rule: a candidate is refused when its covered half-unit
//   cells intersect any single committed interval's cells. Opposite half ends
//   meeting on a boundary date do not collide; a full-day end collides with
//   either half of that date.
// - Signal a mis-ordered candidate as an error, distinct from a refusal.
// - Never perform input or output.

use crate::core::leave_request::{
    decider::submit::command::SubmitLeaveRequest,
    interval::{InvalidInterval, LeaveInterval},
    state::{LeaveRequest, RequestStatus},
};

/// Outcome of the overlap check. A refusal is a normal decision, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error(transparent)]
    InvalidInterval(#[from] InvalidInterval),
}

/// What the calendar should do with a submitted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    Booked(LeaveRequest),
    Refused,
}

/// The overlap rule on its own: `existing` must hold only committed
/// (pending or approved) intervals for the same user.
pub fn validate(
    existing: &[LeaveInterval],
    candidate: &LeaveInterval,
) -> Result<Verdict, InvalidInterval> {
    candidate.half_unit_span()?;
    if existing.iter().any(|booked| booked.overlaps(candidate)) {
        return Ok(Verdict::Reject);
    }
    Ok(Verdict::Accept)
}

/// Validate the command against the user's calendar and produce the pending
/// request to persist on acceptance. Archived entries never block.
pub fn decide_submit(
    calendar: &[LeaveRequest],
    command: SubmitLeaveRequest,
) -> Result<SubmitDecision, DecideError> {
    let candidate = LeaveInterval::new(command.start, command.end);
    let committed: Vec<LeaveInterval> = calendar
        .iter()
        .filter(|request| request.status.blocks_calendar())
        .map(|request| request.interval)
        .collect();

    match validate(&committed, &candidate)? {
        Verdict::Reject => Ok(SubmitDecision::Refused),
        Verdict::Accept => Ok(SubmitDecision::Booked(LeaveRequest {
            leave_request_id: command.leave_request_id,
            user_id: command.user_id,
            interval: candidate,
            reason: command.reason,
            status: RequestStatus::Pending,
            created_at: command.created_at,
            created_by: command.created_by,
        })),
    }
}

#[cfg(test)]
mod leave_request_submit_decide_tests {
    use super::*;
    use crate::core::leave_request::half_day::{DayPart, HalfDayPoint};
    use crate::test_support::fixtures::commands::submit_leave_request::SubmitLeaveRequestBuilder;
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[fixture]
    fn submit_command() -> SubmitLeaveRequest {
        SubmitLeaveRequestBuilder::new().build()
    }

    #[fixture]
    fn booked_request(submit_command: SubmitLeaveRequest) -> LeaveRequest {
        match decide_submit(&[], submit_command).unwrap() {
            SubmitDecision::Booked(request) => request,
            SubmitDecision::Refused => panic!("expected an empty calendar to accept"),
        }
    }

    #[rstest]
    fn it_should_decide_to_book_against_an_empty_calendar(
        submit_command: SubmitLeaveRequest,
        booked_request: LeaveRequest,
    ) {
        assert_eq!(booked_request.leave_request_id, submit_command.leave_request_id);
        assert_eq!(booked_request.user_id, submit_command.user_id);
        assert_eq!(booked_request.status, RequestStatus::Pending);
        assert_eq!(booked_request.interval.start, submit_command.start);
        assert_eq!(booked_request.interval.end, submit_command.end);
    }

    #[rstest]
    fn it_should_refuse_a_candidate_that_covers_a_booked_half(booked_request: LeaveRequest) {
        let command = SubmitLeaveRequestBuilder::new()
            .leave_request_id("lr-fixed-0002")
            .start(HalfDayPoint::full(date("2015-06-15")))
            .end(HalfDayPoint::full(date("2015-06-16")))
            .build();
        let decision = decide_submit(&[booked_request], command).unwrap();
        assert_eq!(decision, SubmitDecision::Refused);
    }

    #[rstest]
    fn it_should_book_a_candidate_that_fits_by_the_half_ends(booked_request: LeaveRequest) {
        let command = SubmitLeaveRequestBuilder::new()
            .leave_request_id("lr-fixed-0002")
            .start(HalfDayPoint::full(date("2015-06-15")))
            .end(HalfDayPoint::first_half(date("2015-06-16")))
            .build();
        let decision = decide_submit(&[booked_request], command).unwrap();
        assert!(matches!(decision, SubmitDecision::Booked(_)));
    }

    #[rstest]
    fn it_should_ignore_archived_requests(mut booked_request: LeaveRequest) {
        booked_request.status = RequestStatus::Cancelled;
        let command = SubmitLeaveRequestBuilder::new()
            .leave_request_id("lr-fixed-0002")
            .build();
        let decision = decide_submit(&[booked_request], command).unwrap();
        assert!(matches!(decision, SubmitDecision::Booked(_)));
    }

    #[rstest]
    fn it_should_decide_that_the_candidate_is_invalid_by_interval() {
        let command = SubmitLeaveRequestBuilder::new()
            .start(HalfDayPoint::second_half(date("2015-06-16")))
            .end(HalfDayPoint::first_half(date("2015-06-16")))
            .build();
        let decision = decide_submit(&[], command);
        assert_eq!(
            decision,
            Err(DecideError::InvalidInterval(
                crate::core::leave_request::interval::InvalidInterval
            ))
        );
    }

    #[rstest]
    fn it_should_refuse_only_on_a_shared_half_unit(booked_request: LeaveRequest) {
        let calendar = vec![booked_request];
        let refused = validate(
            &[calendar[0].interval],
            &LeaveInterval::new(
                HalfDayPoint::new(date("2015-06-17"), DayPart::SecondHalf),
                HalfDayPoint::full(date("2015-06-18")),
            ),
        )
        .unwrap();
        assert_eq!(refused, Verdict::Reject);

        let accepted = validate(
            &[calendar[0].interval],
            &LeaveInterval::new(
                HalfDayPoint::full(date("2015-06-18")),
                HalfDayPoint::full(date("2015-06-19")),
            ),
        )
        .unwrap();
        assert_eq!(accepted, Verdict::Accept);
    }
}

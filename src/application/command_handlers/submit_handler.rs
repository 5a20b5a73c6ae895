// Submission command handler orchestrates the write flow.
//
// Responsibilities
// - Load the user's calendar snapshot from the store.
// - Call the decider with the command against the committed requests.
// - Append the pending request with optimistic concurrency on acceptance.
// - Map the decision to the user-facing outcome; a refusal is a normal result,
//   a mis-ordered candidate is a domain error.
//
// Concurrency
// - Two submissions racing on the same calendar snapshot cannot both land: the
//   second append fails the version check and surfaces as a store error, and
//   the caller re-reads and retries.

use std::sync::Arc;

use uuid::Uuid;

use crate::application::errors::ApplicationError;
use crate::core::leave_request::decider::submit::{
    command::SubmitLeaveRequest,
    decide::{decide_submit, SubmitDecision},
};
use crate::core::leave_request::state::LeaveRequest;
use crate::core::ports::CalendarStore;

/// What the caller shows the user, word for word.
pub const MSG_REQUEST_ADDED: &str = "New leave request was added";
pub const MSG_REQUEST_FAILED: &str = "Failed to create a leave request";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(LeaveRequest),
    Refused,
}

impl SubmitOutcome {
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitOutcome::Added(_) => MSG_REQUEST_ADDED,
            SubmitOutcome::Refused => MSG_REQUEST_FAILED,
        }
    }
}

/// Mint an identifier for a new submission.
pub fn next_leave_request_id() -> String {
    Uuid::now_v7().to_string()
}

pub struct SubmitLeaveRequestHandler<Store: CalendarStore> {
    store: Arc<Store>,
}

impl<Store: CalendarStore> SubmitLeaveRequestHandler<Store> {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: SubmitLeaveRequest,
    ) -> Result<SubmitOutcome, ApplicationError> {
        let user_id = command.user_id.clone();
        let calendar = self.store.load(&user_id).await?;

        let decision = decide_submit(&calendar.requests, command)
            .map_err(|e| ApplicationError::Domain(e.to_string()))?;

        match decision {
            SubmitDecision::Refused => {
                tracing::info!(user_id = %user_id, "leave request overlaps an existing booking");
                Ok(SubmitOutcome::Refused)
            }
            SubmitDecision::Booked(request) => {
                self.store
                    .append(&user_id, calendar.version, request.clone())
                    .await?;
                tracing::info!(
                    user_id = %user_id,
                    leave_request_id = %request.leave_request_id,
                    "leave request added"
                );
                Ok(SubmitOutcome::Added(request))
            }
        }
    }
}

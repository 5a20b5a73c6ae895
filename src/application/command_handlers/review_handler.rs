// Review command handler for the request lifecycle.
//
// Responsibilities
// - Approve or reject a pending request; cancel a pending or approved one.
// - Refuse any other transition: a request that was already processed stays
//   processed, mirroring the pending-only guard of the HR review flow.
// - Write the status change with optimistic concurrency against the calendar
//   snapshot it was checked on.

use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::core::leave_request::state::RequestStatus;
use crate::core::ports::{CalendarStore, CalendarStoreError};

pub struct ReviewLeaveRequestHandler<Store: CalendarStore> {
    store: Arc<Store>,
}

impl<Store: CalendarStore> ReviewLeaveRequestHandler<Store> {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub async fn approve(
        &self,
        user_id: &str,
        leave_request_id: &str,
    ) -> Result<(), ApplicationError> {
        self.transition(user_id, leave_request_id, RequestStatus::Approved)
            .await
    }

    pub async fn reject(
        &self,
        user_id: &str,
        leave_request_id: &str,
    ) -> Result<(), ApplicationError> {
        self.transition(user_id, leave_request_id, RequestStatus::Rejected)
            .await
    }

    pub async fn cancel(
        &self,
        user_id: &str,
        leave_request_id: &str,
    ) -> Result<(), ApplicationError> {
        self.transition(user_id, leave_request_id, RequestStatus::Cancelled)
            .await
    }

    async fn transition(
        &self,
        user_id: &str,
        leave_request_id: &str,
        to: RequestStatus,
    ) -> Result<(), ApplicationError> {
        let calendar = self.store.load(user_id).await?;
        let request = calendar
            .requests
            .iter()
            .find(|r| r.leave_request_id == leave_request_id)
            .ok_or_else(|| CalendarStoreError::NotFound {
                leave_request_id: leave_request_id.to_string(),
            })?;

        let allowed = match to {
            RequestStatus::Approved | RequestStatus::Rejected => {
                request.status == RequestStatus::Pending
            }
            RequestStatus::Cancelled => request.status.blocks_calendar(),
            RequestStatus::Pending => false,
        };
        if !allowed {
            tracing::warn!(
                user_id = %user_id,
                leave_request_id = %leave_request_id,
                from = ?request.status,
                to = ?to,
                "refused leave request transition"
            );
            return Err(ApplicationError::Domain(
                "leave request not found or already processed".to_string(),
            ));
        }

        self.store
            .set_status(user_id, calendar.version, leave_request_id, to)
            .await?;
        tracing::info!(
            user_id = %user_id,
            leave_request_id = %leave_request_id,
            status = ?to,
            "leave request status changed"
        );
        Ok(())
    }
}

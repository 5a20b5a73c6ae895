// In memory implementation of the CalendarStore port.
//
// Purpose
// - Support command handler tests and local development without a database.
//
// Responsibilities
// - Store leave requests per user in memory.
// - Enforce optimistic concurrency by checking the expected version on every
//   write; the version counts writes, not rows, so status changes bump it too.

use crate::core::leave_request::state::{LeaveRequest, RequestStatus};
use crate::core::ports::{CalendarStore, CalendarStoreError, LoadedCalendar};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct UserCalendar {
    requests: Vec<LeaveRequest>,
    version: i64,
}

pub struct InMemoryCalendarStore {
    inner: RwLock<HashMap<String, UserCalendar>>,
}

impl InMemoryCalendarStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCalendarStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CalendarStore for InMemoryCalendarStore {
    async fn load(&self, user_id: &str) -> Result<LoadedCalendar, CalendarStoreError> {
        let guard = self.inner.read().await;
        let calendar = guard.get(user_id);
        Ok(LoadedCalendar {
            requests: calendar.map(|c| c.requests.clone()).unwrap_or_default(),
            version: calendar.map(|c| c.version).unwrap_or(0),
        })
    }

    async fn append(
        &self,
        user_id: &str,
        expected_version: i64,
        request: LeaveRequest,
    ) -> Result<(), CalendarStoreError> {
        let mut guard = self.inner.write().await;
        let calendar = guard.entry(user_id.to_string()).or_default();
        if calendar.version != expected_version {
            return Err(CalendarStoreError::VersionMismatch {
                expected: expected_version,
                actual: calendar.version,
            });
        }
        calendar.requests.push(request);
        calendar.version += 1;
        Ok(())
    }

    async fn set_status(
        &self,
        user_id: &str,
        expected_version: i64,
        leave_request_id: &str,
        status: RequestStatus,
    ) -> Result<(), CalendarStoreError> {
        let mut guard = self.inner.write().await;
        let calendar = guard.entry(user_id.to_string()).or_default();
        if calendar.version != expected_version {
            return Err(CalendarStoreError::VersionMismatch {
                expected: expected_version,
                actual: calendar.version,
            });
        }
        let request = calendar
            .requests
            .iter_mut()
            .find(|r| r.leave_request_id == leave_request_id)
            .ok_or_else(|| CalendarStoreError::NotFound {
                leave_request_id: leave_request_id.to_string(),
            })?;
        request.status = status;
        calendar.version += 1;
        Ok(())
    }
}

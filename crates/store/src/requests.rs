//! Request store: the request lifecycle over a [`RequestRepository`].
//!
//! Each mutating call reads the full collection, changes it in memory and
//! writes it back. Lookup failures are not errors: an unknown id yields
//! `Ok(None)` and leaves storage untouched.

use std::sync::Arc;

use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use mockable::Clock;
use tracing::{debug, info, instrument};

use service_desk_core::{
    NewRequest, QueueNumber, RequestId, RequestStatus, RequestUpdate, ServiceRequest, User,
    UserId,
};

use crate::{RequestRepository, StoreError, seed};

/// Access layer for service requests.
pub struct RequestStore<R> {
    repo: R,
    clock: Arc<dyn Clock>,
}

impl<R: RequestRepository> RequestStore<R> {
    /// Create a store over `repo`, stamping records with `clock`.
    #[must_use]
    pub fn new(repo: R, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Current time at the precision records are persisted with.
    fn now(&self) -> DateTime<Utc> {
        self.clock.utc().trunc_subsecs(3)
    }

    /// Seed the demo requests if no collection exists yet.
    ///
    /// Returns `true` when seeding happened. Calling again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read or written.
    #[instrument(skip(self))]
    pub fn init(&self) -> Result<bool, StoreError> {
        if self.repo.is_initialized()? {
            debug!("Request collection already present");
            return Ok(false);
        }

        let requests = seed::initial_requests(self.now());
        self.repo.replace_all(&requests)?;
        info!(count = requests.len(), "Seeded demo requests");
        Ok(true)
    }

    /// Fetch one request by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read.
    pub fn get(&self, id: &RequestId) -> Result<Option<ServiceRequest>, StoreError> {
        Ok(self.repo.get_all()?.into_iter().find(|r| &r.id == id))
    }

    /// A student's own requests, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read.
    #[instrument(skip(self), fields(student = %student_id))]
    pub fn list_for_student(&self, student_id: &UserId) -> Result<Vec<ServiceRequest>, StoreError> {
        let mut requests: Vec<_> = self
            .repo
            .get_all()?
            .into_iter()
            .filter(|r| &r.student_id == student_id)
            .collect();
        requests.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        debug!(count = requests.len(), "Listed student requests");
        Ok(requests)
    }

    /// Every request, newest submission first.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read.
    #[instrument(skip(self))]
    pub fn list_all(&self) -> Result<Vec<ServiceRequest>, StoreError> {
        let mut requests = self.repo.get_all()?;
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        debug!(count = requests.len(), "Listed all requests");
        Ok(requests)
    }

    /// [`RequestStore::list_all`] restricted to one status.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read.
    pub fn list_all_with_status(
        &self,
        status: RequestStatus,
    ) -> Result<Vec<ServiceRequest>, StoreError> {
        let mut requests = self.list_all()?;
        requests.retain(|r| r.status == status);
        Ok(requests)
    }

    /// File a new request on behalf of `submitter`.
    ///
    /// The queue number counts the requests already filed in the same
    /// category, so concurrent writers can hand out duplicates.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read or written.
    #[instrument(skip(self, submitter, new), fields(student = %submitter.id, category = %new.category))]
    pub fn create(&self, submitter: &User, new: NewRequest) -> Result<ServiceRequest, StoreError> {
        let mut requests = self.repo.get_all()?;

        let prior = requests
            .iter()
            .filter(|r| r.category == new.category)
            .count();
        let queue_number = QueueNumber::assign(new.category, prior);

        let request =
            ServiceRequest::submit(RequestId::generate(), submitter, new, queue_number, self.now());

        requests.insert(0, request.clone());
        self.repo.replace_all(&requests)?;

        info!(
            request_id = %request.id,
            queue_number = %request.queue_number,
            "Created request"
        );
        Ok(request)
    }

    /// Apply a reviewer's status change.
    ///
    /// Any status may follow any other, including reopening a completed
    /// request. `updated_at` always moves forward, by at least one
    /// millisecond, even if the clock has not.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read or written.
    #[instrument(skip(self, update), fields(status = %update.status))]
    pub fn update_status(
        &self,
        id: &RequestId,
        update: RequestUpdate,
    ) -> Result<Option<ServiceRequest>, StoreError> {
        let mut requests = self.repo.get_all()?;

        let Some(request) = requests.iter_mut().find(|r| &r.id == id) else {
            debug!(request_id = %id, "No request with this id, nothing updated");
            return Ok(None);
        };

        let previous = request.status;
        let now = self
            .now()
            .max(request.updated_at + TimeDelta::milliseconds(1));
        request.apply(update, now);
        let updated = request.clone();

        self.repo.replace_all(&requests)?;

        info!(
            request_id = %updated.id,
            from = %previous,
            to = %updated.status,
            "Updated request status"
        );
        Ok(Some(updated))
    }
}

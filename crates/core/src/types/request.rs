//! Service request records and the updates applied to them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::RequestCategory;
use super::id::{RequestId, UserId};
use super::queue::QueueNumber;
use super::status::{Priority, RequestStatus};
use super::user::User;

/// A single support ticket.
///
/// The JSON field names and epoch-millisecond timestamps match the layout
/// the portal has always persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    /// Unique, immutable identifier.
    pub id: RequestId,
    /// Submitting student.
    pub student_id: UserId,
    /// Student's display name at submission time.
    pub student_name: String,
    pub category: RequestCategory,
    pub subject: String,
    pub description: String,
    pub status: RequestStatus,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// Never earlier than `created_at`.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
    /// Assigned once at creation.
    pub queue_number: QueueNumber,
    /// Reviewer's response or internal note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_notes: Option<String>,
    /// Name of the attached file; the file itself is not stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// What a student fills in when filing a request.
///
/// Subject and description are free text; nothing here is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRequest {
    pub category: RequestCategory,
    pub subject: String,
    pub description: String,
    pub attachment_name: Option<String>,
}

/// How an update treats the existing staff note.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NoteUpdate {
    /// Leave the current note untouched.
    #[default]
    Keep,
    /// Replace the note (an empty string is stored as-is).
    Set(String),
    /// Remove the note.
    Clear,
}

impl From<Option<String>> for NoteUpdate {
    fn from(note: Option<String>) -> Self {
        note.map_or(Self::Keep, Self::Set)
    }
}

/// A reviewer's change to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUpdate {
    pub status: RequestStatus,
    pub staff_notes: NoteUpdate,
}

impl RequestUpdate {
    /// Change only the status.
    #[must_use]
    pub const fn status(status: RequestStatus) -> Self {
        Self {
            status,
            staff_notes: NoteUpdate::Keep,
        }
    }

    /// Change the status and replace the note.
    #[must_use]
    pub fn with_note(status: RequestStatus, note: impl Into<String>) -> Self {
        Self {
            status,
            staff_notes: NoteUpdate::Set(note.into()),
        }
    }
}

impl ServiceRequest {
    /// Build a freshly submitted request.
    ///
    /// Both timestamps are set to `now` and the status to
    /// [`RequestStatus::INITIAL`].
    #[must_use]
    pub fn submit(
        id: RequestId,
        submitter: &User,
        new: NewRequest,
        queue_number: QueueNumber,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            student_id: submitter.id.clone(),
            student_name: submitter.name.clone(),
            category: new.category,
            subject: new.subject,
            description: new.description,
            status: RequestStatus::INITIAL,
            created_at: now,
            updated_at: now,
            queue_number,
            staff_notes: None,
            attachment_name: new.attachment_name,
            priority: None,
        }
    }

    /// Apply a reviewer update and stamp `updated_at` with `now`.
    pub fn apply(&mut self, update: RequestUpdate, now: DateTime<Utc>) {
        self.status = update.status;
        match update.staff_notes {
            NoteUpdate::Keep => {}
            NoteUpdate::Set(note) => self.staff_notes = Some(note),
            NoteUpdate::Clear => self.staff_notes = None,
        }
        self.updated_at = now;
    }
}

/// Dashboard counters for a set of requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RequestSummary {
    pub total: usize,
    /// Still waiting for a reviewer.
    pub pending: usize,
    /// Approved or rejected.
    pub completed: usize,
    /// Waiting on the student.
    pub action_needed: usize,
}

impl RequestSummary {
    #[must_use]
    pub fn from_requests(requests: &[ServiceRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut summary, request| {
            summary.total += 1;
            match request.status {
                RequestStatus::Pending => summary.pending += 1,
                RequestStatus::ActionRequired => summary.action_needed += 1,
                status if status.is_completed() => summary.completed += 1,
                _ => {}
            }
            summary
        })
    }
}

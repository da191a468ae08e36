//! Integration tests for the request lifecycle.
//!
//! A student files a request, staff triage it, and every step is read back
//! through freshly opened stores to prove it reached the data directory.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use chrono::TimeDelta;
use mockable::Clock;
use service_desk_core::{
    NewRequest, RequestCategory, RequestId, RequestStatus, RequestUpdate, UserId,
};
use service_desk_integration_tests::TestDesk;
use service_desk_store::seed;

fn attendance(subject: &str) -> NewRequest {
    NewRequest {
        category: RequestCategory::Attendance,
        subject: subject.to_owned(),
        description: "Marked absent while present".to_owned(),
        attachment_name: Some("attendance-slip.pdf".to_owned()),
    }
}

// =============================================================================
// Seeding
// =============================================================================

#[test]
fn test_init_on_empty_directory_seeds_three_requests() {
    let dir = tempfile::tempdir().unwrap();
    let desk = TestDesk::open(dir.path());

    assert!(desk.requests.init().unwrap());

    let all = desk.requests.list_all().unwrap();
    let ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["req_1", "req_2", "req_3"]);
}

#[test]
fn test_init_is_idempotent_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    TestDesk::open(dir.path()).requests.init().unwrap();

    let reopened = TestDesk::open(dir.path());
    assert!(!reopened.requests.init().unwrap());
    assert_eq!(reopened.requests.list_all().unwrap().len(), 3);
}

// =============================================================================
// End-to-end scenario
// =============================================================================

#[test]
fn test_seed_then_attendance_request_gets_next_queue_number() {
    let dir = tempfile::tempdir().unwrap();
    let desk = TestDesk::open(dir.path());
    desk.requests.init().unwrap();

    let student = desk
        .session
        .login(UserId::new(seed::DEMO_STUDENT_ID))
        .unwrap()
        .unwrap();

    desk.clock.advance(TimeDelta::minutes(1));
    let created = desk
        .requests
        .create(&student, attendance("Attendance Correction for CSE-305"))
        .unwrap();

    // One seeded attendance request already exists.
    assert_eq!(created.queue_number.as_str(), "A-102");
    assert_eq!(created.status, RequestStatus::Pending);
    assert_eq!(created.created_at, created.updated_at);

    let reopened = TestDesk::open(dir.path());
    let mine = reopened.requests.list_for_student(&student.id).unwrap();
    assert_eq!(mine.len(), 4);
    assert_eq!(mine[0], created);
}

#[test]
fn test_staff_triage_flow() {
    let dir = tempfile::tempdir().unwrap();
    let desk = TestDesk::open(dir.path());
    desk.requests.init().unwrap();

    let student = seed::find_demo_user(&UserId::new(seed::DEMO_STUDENT_ID)).unwrap();
    let created = desk
        .requests
        .create(&student, attendance("Lab attendance"))
        .unwrap();

    desk.clock.advance(TimeDelta::hours(2));
    let in_progress = desk
        .requests
        .update_status(
            &created.id,
            RequestUpdate::with_note(RequestStatus::InProgress, "Checking with faculty"),
        )
        .unwrap()
        .unwrap();

    desk.clock.advance(TimeDelta::hours(1));
    let approved = desk
        .requests
        .update_status(&created.id, RequestUpdate::status(RequestStatus::Approved))
        .unwrap()
        .unwrap();

    assert!(in_progress.updated_at > created.updated_at);
    assert!(approved.updated_at > in_progress.updated_at);
    assert_eq!(approved.staff_notes.as_deref(), Some("Checking with faculty"));
    assert_eq!(approved.updated_at, desk.clock.utc());
    assert_eq!(approved.queue_number, created.queue_number);

    // Reopening an approved request is allowed.
    let reopened = desk
        .requests
        .update_status(&created.id, RequestUpdate::status(RequestStatus::Pending))
        .unwrap()
        .unwrap();
    assert_eq!(reopened.status, RequestStatus::Pending);
}

#[test]
fn test_update_unknown_request_leaves_files_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let desk = TestDesk::open(dir.path());
    desk.requests.init().unwrap();
    let before = std::fs::read_to_string(dir.path().join("esqm_requests.json")).unwrap();

    let result = desk
        .requests
        .update_status(
            &RequestId::new("req_unknown"),
            RequestUpdate::with_note(RequestStatus::Rejected, "n/a"),
        )
        .unwrap();

    assert!(result.is_none());
    let after = std::fs::read_to_string(dir.path().join("esqm_requests.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_two_desks_on_one_directory_last_write_wins() {
    let dir = tempfile::tempdir().unwrap();
    let first = TestDesk::open(dir.path());
    first.requests.init().unwrap();
    let second = TestDesk::open_with_clock(dir.path(), first.clock.clone());

    let student = seed::find_demo_user(&UserId::new(seed::DEMO_STUDENT_ID)).unwrap();
    first.requests.create(&student, attendance("first")).unwrap();
    second.requests.create(&student, attendance("second")).unwrap();

    // Sequential writers see each other's data; only interleaved
    // read-modify-write cycles can lose updates.
    let subjects: Vec<String> = first
        .requests
        .list_all()
        .unwrap()
        .into_iter()
        .map(|r| r.subject)
        .take(2)
        .collect();
    assert!(subjects.contains(&"first".to_owned()));
    assert!(subjects.contains(&"second".to_owned()));
}

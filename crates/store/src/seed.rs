//! Demo users and the initial request set.
//!
//! Seeded timestamps are relative to the moment the store is initialised, so
//! a fresh install always shows requests from the last few days.

use chrono::{DateTime, TimeDelta, Utc};

use service_desk_core::{
    Email, Priority, QueueNumber, RequestCategory, RequestId, RequestStatus, Role,
    ServiceRequest, User, UserId,
};

/// Demo student id.
pub const DEMO_STUDENT_ID: &str = "u_student_1";

/// Demo staff id.
pub const DEMO_STAFF_ID: &str = "u_staff_1";

/// Users selectable from the login screen.
#[must_use]
pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: UserId::new(DEMO_STUDENT_ID),
            name: "Rohan Sharma".to_owned(),
            email: Email::new("rahul.s@galgotias.edu.in"),
            role: Role::Student,
            avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Rohan".to_owned()),
        },
        User {
            id: UserId::new(DEMO_STAFF_ID),
            name: "Dr. Anjali Gupta".to_owned(),
            email: Email::new("anjali.g@galgotias.edu.in"),
            role: Role::Staff,
            avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Anjali".to_owned()),
        },
    ]
}

/// Look up a demo user by id.
#[must_use]
pub fn find_demo_user(id: &UserId) -> Option<User> {
    demo_users().into_iter().find(|user| &user.id == id)
}

/// The three requests a fresh store starts with.
#[must_use]
pub fn initial_requests(now: DateTime<Utc>) -> Vec<ServiceRequest> {
    let ago = |millis: i64| now - TimeDelta::milliseconds(millis);
    let student = UserId::new(DEMO_STUDENT_ID);
    let student_name = "Rohan Sharma";

    vec![
        ServiceRequest {
            id: RequestId::new("req_1"),
            student_id: student.clone(),
            student_name: student_name.to_owned(),
            category: RequestCategory::Attendance,
            subject: "Attendance Correction for CSE-302".to_owned(),
            description: "I was present for the Data Structures lecture on Oct 12th but marked absent in iCloud ERP. Please rectify.".to_owned(),
            status: RequestStatus::Pending,
            created_at: ago(86_400_000),
            updated_at: ago(86_400_000),
            queue_number: QueueNumber::new("A-101"),
            staff_notes: None,
            attachment_name: None,
            priority: Some(Priority::Medium),
        },
        ServiceRequest {
            id: RequestId::new("req_2"),
            student_id: student.clone(),
            student_name: student_name.to_owned(),
            category: RequestCategory::Auditorium,
            subject: "C-Block Auditorium Booking".to_owned(),
            description: "Requesting permission to use C-Block Auditorium for the Coding Club Hackathon orientation on Nov 5th.".to_owned(),
            status: RequestStatus::InProgress,
            created_at: ago(172_800_000),
            updated_at: ago(40_000_000),
            queue_number: QueueNumber::new("E-204"),
            staff_notes: None,
            attachment_name: None,
            priority: Some(Priority::High),
        },
        ServiceRequest {
            id: RequestId::new("req_3"),
            student_id: student,
            student_name: student_name.to_owned(),
            category: RequestCategory::Misc,
            subject: "Hostel Wi-Fi Issue".to_owned(),
            description: "The Wi-Fi in Boys Hostel Block 2, Room 405 is not connecting since yesterday evening.".to_owned(),
            status: RequestStatus::Approved,
            created_at: ago(432_000_000),
            updated_at: ago(300_000_000),
            queue_number: QueueNumber::new("M-098"),
            staff_notes: Some("Reset the router configuration. Should be working now.".to_owned()),
            attachment_name: None,
            priority: Some(Priority::Low),
        },
    ]
}

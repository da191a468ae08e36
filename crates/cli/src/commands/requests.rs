//! Request commands: init, submit, list, show, update, guidance, stats.
//!
//! Students see and file their own requests. Staff see every request and
//! are the only ones allowed to change a status. These role checks shape
//! the interface; they are not access control.
//!
//! # Usage
//!
//! ```bash
//! desk submit --category attendance --subject "Marked absent" \
//!     --description "Present on Oct 12" --attachment slip.pdf
//! desk list --status pending
//! desk show req_1
//! desk update req_1 --status approved --note "Corrected in ERP"
//! desk stats
//! ```

use std::io::Write;

use tracing::info;

use service_desk_core::{
    NewRequest, NoteUpdate, RequestCategory, RequestId, RequestStatus, RequestSummary,
    RequestUpdate, ServiceRequest, User,
};
use service_desk_store::KeyValueStore;

use super::{CommandError, Desk, render};

/// Seed the demo data if this is a fresh data directory.
pub fn init<S: KeyValueStore>(desk: &Desk<S>, out: &mut impl Write) -> Result<(), CommandError> {
    if desk.requests.init()? {
        writeln!(out, "Seeded demo requests.")?;
    } else {
        writeln!(out, "Already initialised.")?;
    }
    Ok(())
}

/// File a new request as the logged-in student.
///
/// Waits for the configured submission delay before saving.
pub async fn submit<S: KeyValueStore>(
    desk: &Desk<S>,
    out: &mut impl Write,
    new: NewRequest,
) -> Result<(), CommandError> {
    desk.requests.init()?;
    let user = desk.require_user()?;
    if user.is_reviewer() {
        return Err(CommandError::Forbidden("only students can submit requests"));
    }

    if !desk.submit_delay.is_zero() {
        info!(delay_ms = desk.submit_delay.as_millis(), "Submitting request");
        tokio::time::sleep(desk.submit_delay).await;
    }

    let request = desk.requests.create(&user, new)?;
    writeln!(
        out,
        "Submitted {} as {}. Status: {}.",
        request.id,
        request.queue_number,
        request.status.label()
    )?;
    Ok(())
}

/// Requests visible to `user`: their own for students, all for staff.
fn visible_requests<S: KeyValueStore>(
    desk: &Desk<S>,
    user: &User,
) -> Result<Vec<ServiceRequest>, CommandError> {
    let requests = if user.is_reviewer() {
        desk.requests.list_all()?
    } else {
        desk.requests.list_for_student(&user.id)?
    };
    Ok(requests)
}

/// List requests, optionally restricted to one status.
pub fn list<S: KeyValueStore>(
    desk: &Desk<S>,
    out: &mut impl Write,
    status: Option<RequestStatus>,
) -> Result<(), CommandError> {
    desk.requests.init()?;
    let user = desk.require_user()?;

    let requests = match status {
        Some(status) if user.is_reviewer() => desk.requests.list_all_with_status(status)?,
        Some(status) => {
            let mut requests = visible_requests(desk, &user)?;
            requests.retain(|r| r.status == status);
            requests
        }
        None => visible_requests(desk, &user)?,
    };

    render::request_rows(out, &requests)?;
    Ok(())
}

/// Show one request in full.
pub fn show<S: KeyValueStore>(
    desk: &Desk<S>,
    out: &mut impl Write,
    id: &RequestId,
) -> Result<(), CommandError> {
    desk.requests.init()?;
    let user = desk.require_user()?;

    let request = desk
        .requests
        .get(id)?
        .filter(|r| user.is_reviewer() || r.student_id == user.id)
        .ok_or_else(|| CommandError::NotFound(id.to_string()))?;

    render::request_detail(out, &request)?;
    Ok(())
}

/// Change a request's status as the logged-in staff member.
pub fn update<S: KeyValueStore>(
    desk: &Desk<S>,
    out: &mut impl Write,
    id: &RequestId,
    status: RequestStatus,
    staff_notes: NoteUpdate,
) -> Result<(), CommandError> {
    desk.requests.init()?;
    let user = desk.require_user()?;
    if !user.is_reviewer() {
        return Err(CommandError::Forbidden("only staff can change request status"));
    }

    let Some(request) = desk
        .requests
        .update_status(id, RequestUpdate { status, staff_notes })?
    else {
        return Err(CommandError::NotFound(id.to_string()));
    };

    writeln!(
        out,
        "{} ({}) is now {}.",
        request.id,
        request.queue_number,
        request.status.label()
    )?;
    Ok(())
}

/// Print the common problems for a category.
pub fn guidance(out: &mut impl Write, category: RequestCategory) -> Result<(), CommandError> {
    render::guidance(out, category)?;
    Ok(())
}

/// Dashboard counters for the requests visible to the logged-in user.
pub fn stats<S: KeyValueStore>(desk: &Desk<S>, out: &mut impl Write) -> Result<(), CommandError> {
    desk.requests.init()?;
    let user = desk.require_user()?;

    let requests = visible_requests(desk, &user)?;
    render::summary(out, &RequestSummary::from_requests(&requests))?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use mockable::DefaultClock;
    use service_desk_core::{Role, UserId};
    use service_desk_store::MemoryStore;

    use super::*;

    fn desk() -> Desk<MemoryStore> {
        Desk::new(
            Arc::new(MemoryStore::new()),
            Arc::new(DefaultClock),
            Duration::ZERO,
        )
    }

    fn login(desk: &Desk<MemoryStore>, id: &str) {
        desk.session.login(UserId::new(id)).unwrap().unwrap();
    }

    fn text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    fn attendance() -> NewRequest {
        NewRequest {
            category: RequestCategory::Attendance,
            subject: "Marked absent in CSE-302".to_owned(),
            description: "Present on Oct 12".to_owned(),
            attachment_name: None,
        }
    }

    #[test]
    fn test_init_reports_seeding() {
        let desk = desk();
        let mut buf = Vec::new();
        init(&desk, &mut buf).unwrap();
        init(&desk, &mut buf).unwrap();
        assert_eq!(text(buf), "Seeded demo requests.\nAlready initialised.\n");
    }

    #[tokio::test]
    async fn test_student_submits_and_sees_queue_number() {
        let desk = desk();
        login(&desk, "u_student_1");

        let mut buf = Vec::new();
        submit(&desk, &mut buf, attendance()).await.unwrap();

        let text = text(buf);
        assert!(text.contains("as A-102"), "{text}");
        assert!(text.contains("Status: Pending"));
    }

    #[tokio::test]
    async fn test_submit_requires_login() {
        let desk = desk();
        let err = submit(&desk, &mut Vec::new(), attendance()).await.unwrap_err();
        assert!(matches!(err, CommandError::NotLoggedIn));
    }

    #[tokio::test]
    async fn test_staff_cannot_submit() {
        let desk = desk();
        login(&desk, "u_staff_1");
        let err = submit(&desk, &mut Vec::new(), attendance()).await.unwrap_err();
        assert!(matches!(err, CommandError::Forbidden(_)));
    }

    #[test]
    fn test_student_cannot_update() {
        let desk = desk();
        login(&desk, "u_student_1");
        let err = update(
            &desk,
            &mut Vec::new(),
            &RequestId::new("req_1"),
            RequestStatus::Approved,
            NoteUpdate::Keep,
        )
        .unwrap_err();
        assert!(matches!(err, CommandError::Forbidden(_)));
    }

    #[test]
    fn test_staff_updates_request() {
        let desk = desk();
        login(&desk, "u_staff_1");

        let mut buf = Vec::new();
        update(
            &desk,
            &mut buf,
            &RequestId::new("req_1"),
            RequestStatus::Approved,
            NoteUpdate::Set("Corrected in ERP".to_owned()),
        )
        .unwrap();

        assert_eq!(text(buf), "req_1 (A-101) is now Approved.\n");
        let stored = desk.requests.get(&RequestId::new("req_1")).unwrap().unwrap();
        assert_eq!(stored.staff_notes.as_deref(), Some("Corrected in ERP"));
    }

    #[test]
    fn test_update_unknown_request() {
        let desk = desk();
        login(&desk, "u_staff_1");
        let err = update(
            &desk,
            &mut Vec::new(),
            &RequestId::new("req_404"),
            RequestStatus::Approved,
            NoteUpdate::Keep,
        )
        .unwrap_err();
        assert!(matches!(err, CommandError::NotFound(id) if id == "req_404"));
    }

    #[test]
    fn test_students_only_see_their_own_requests() {
        let desk = desk();
        let stranger = User::from_name("Someone Else", Role::Student).unwrap();
        desk.session.login(stranger).unwrap();

        let mut buf = Vec::new();
        list(&desk, &mut buf, None).unwrap();
        assert_eq!(text(buf), "No requests found.\n");

        let err = show(&desk, &mut Vec::new(), &RequestId::new("req_1")).unwrap_err();
        assert!(matches!(err, CommandError::NotFound(_)));
    }

    #[test]
    fn test_staff_list_filtered_by_status() {
        let desk = desk();
        login(&desk, "u_staff_1");

        let mut buf = Vec::new();
        list(&desk, &mut buf, Some(RequestStatus::Approved)).unwrap();

        let text = text(buf);
        assert!(text.contains("req_3"));
        assert!(!text.contains("req_1"));
    }

    #[test]
    fn test_show_renders_staff_notes() {
        let desk = desk();
        login(&desk, "u_student_1");

        let mut buf = Vec::new();
        show(&desk, &mut buf, &RequestId::new("req_3")).unwrap();

        let text = text(buf);
        assert!(text.starts_with("Hostel Wi-Fi Issue (M-098)"));
        assert!(text.contains("priority:    LOW"));
        assert!(text.contains("Staff response: Reset the router configuration."));
    }

    #[test]
    fn test_stats_for_seeded_student() {
        let desk = desk();
        login(&desk, "u_student_1");

        let mut buf = Vec::new();
        stats(&desk, &mut buf).unwrap();

        assert_eq!(
            text(buf),
            "Total:         3\nPending:       1\nCompleted:     1\nAction needed: 0\n"
        );
    }

    #[test]
    fn test_guidance_lists_hints() {
        let mut buf = Vec::new();
        guidance(&mut buf, RequestCategory::Auditorium).unwrap();
        let text = text(buf);
        assert!(text.starts_with("Before raising a request for Auditorium Booking:"));
        assert_eq!(text.lines().count(), 4);
    }
}

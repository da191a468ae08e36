//! Integration tests for login state persisted in the data directory.

#![allow(clippy::unwrap_used)]

use service_desk_core::{Role, User, UserId};
use service_desk_integration_tests::TestDesk;
use service_desk_store::seed;

#[test]
fn test_login_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let staff = TestDesk::open(dir.path())
        .session
        .login(UserId::new(seed::DEMO_STAFF_ID))
        .unwrap()
        .unwrap();

    let reopened = TestDesk::open(dir.path());
    assert_eq!(reopened.session.current_user().unwrap(), Some(staff));
}

#[test]
fn test_unknown_demo_id_does_not_replace_session() {
    let dir = tempfile::tempdir().unwrap();
    let desk = TestDesk::open(dir.path());
    let fresh = User::from_name("Kavya Rao", Role::Student).unwrap();
    desk.session.login(fresh.clone()).unwrap();

    assert_eq!(desk.session.login(UserId::new("u_intruder")).unwrap(), None);
    assert_eq!(desk.session.current_user().unwrap(), Some(fresh));
}

#[test]
fn test_logout_removes_session_file() {
    let dir = tempfile::tempdir().unwrap();
    let desk = TestDesk::open(dir.path());
    desk.session.login(UserId::new(seed::DEMO_STUDENT_ID)).unwrap();
    assert!(dir.path().join("esqm_current_user.json").exists());

    desk.session.logout().unwrap();

    assert!(!dir.path().join("esqm_current_user.json").exists());
    assert_eq!(TestDesk::open(dir.path()).session.current_user().unwrap(), None);
}

#[test]
fn test_logout_keeps_requests() {
    let dir = tempfile::tempdir().unwrap();
    let desk = TestDesk::open(dir.path());
    desk.requests.init().unwrap();
    desk.session.login(UserId::new(seed::DEMO_STUDENT_ID)).unwrap();

    desk.session.logout().unwrap();

    assert_eq!(desk.requests.list_all().unwrap().len(), 3);
}

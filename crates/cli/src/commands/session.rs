//! Login, logout and whoami.
//!
//! # Usage
//!
//! ```bash
//! # Log in as a demo account
//! desk login --demo u_student_1
//!
//! # Log in with a typed name
//! desk login --name "Priya Singh" --role staff
//!
//! desk whoami
//! desk logout
//! ```

use std::io::Write;

use service_desk_core::{Role, User, UserId};

use super::{CommandError, Desk, render};
use service_desk_store::KeyValueStore;

/// Log in as a demo account.
///
/// An unknown id leaves the current session alone and reports the demo
/// accounts that do exist.
pub fn login_demo<S: KeyValueStore>(
    desk: &Desk<S>,
    out: &mut impl Write,
    id: UserId,
) -> Result<(), CommandError> {
    desk.requests.init()?;

    if let Some(user) = desk.session.login(id.clone())? {
        write!(out, "Logged in as ")?;
        render::user(out, &user)?;
        return Ok(());
    }

    writeln!(out, "No demo account with id {id}. Available accounts:")?;
    for user in service_desk_store::seed::demo_users() {
        write!(out, "  ")?;
        render::user(out, &user)?;
    }
    Ok(())
}

/// Log in with a freshly constructed user.
pub fn login_named<S: KeyValueStore>(
    desk: &Desk<S>,
    out: &mut impl Write,
    name: &str,
    role: Role,
) -> Result<(), CommandError> {
    desk.requests.init()?;

    let user = User::from_name(name, role)?;
    if let Some(user) = desk.session.login(user)? {
        write!(out, "Logged in as ")?;
        render::user(out, &user)?;
    }
    Ok(())
}

/// Forget the current user.
pub fn logout<S: KeyValueStore>(desk: &Desk<S>, out: &mut impl Write) -> Result<(), CommandError> {
    desk.session.logout()?;
    writeln!(out, "Logged out.")?;
    Ok(())
}

/// Show the current user.
pub fn whoami<S: KeyValueStore>(desk: &Desk<S>, out: &mut impl Write) -> Result<(), CommandError> {
    match desk.session.current_user()? {
        Some(user) => render::user(out, &user)?,
        None => writeln!(out, "Not logged in.")?,
    }
    Ok(())
}

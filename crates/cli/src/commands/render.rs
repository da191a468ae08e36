//! Plain-text rendering of users and requests.

use std::io::{self, Write};

use chrono::{DateTime, Local, Utc};

use service_desk_core::{RequestCategory, RequestSummary, ServiceRequest, User};

fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// One line per user.
pub fn user(out: &mut impl Write, user: &User) -> io::Result<()> {
    writeln!(
        out,
        "{} <{}> ({}) [{}]",
        user.name, user.email, user.role, user.id
    )
}

/// A table row per request.
pub fn request_rows(out: &mut impl Write, requests: &[ServiceRequest]) -> io::Result<()> {
    if requests.is_empty() {
        return writeln!(out, "No requests found.");
    }

    for request in requests {
        writeln!(
            out,
            "{:<7} {:<16} {:<22} {:<38} {}",
            request.queue_number,
            request.status.label(),
            request.category,
            request.id,
            request.subject
        )?;
    }
    Ok(())
}

/// Full detail view of one request.
pub fn request_detail(out: &mut impl Write, request: &ServiceRequest) -> io::Result<()> {
    writeln!(out, "{} ({})", request.subject, request.queue_number)?;
    writeln!(out, "  id:          {}", request.id)?;
    writeln!(out, "  student:     {} [{}]", request.student_name, request.student_id)?;
    writeln!(out, "  category:    {}", request.category)?;
    writeln!(out, "  status:      {}", request.status.label())?;
    if let Some(priority) = request.priority {
        writeln!(out, "  priority:    {priority}")?;
    }
    writeln!(out, "  created:     {}", local_time(request.created_at))?;
    writeln!(out, "  updated:     {}", local_time(request.updated_at))?;
    if let Some(attachment) = &request.attachment_name {
        writeln!(out, "  attachment:  {attachment}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", request.description)?;
    if let Some(notes) = &request.staff_notes {
        writeln!(out)?;
        writeln!(out, "Staff response: {notes}")?;
    }
    Ok(())
}

/// Dashboard counters.
pub fn summary(out: &mut impl Write, summary: &RequestSummary) -> io::Result<()> {
    writeln!(out, "Total:         {}", summary.total)?;
    writeln!(out, "Pending:       {}", summary.pending)?;
    writeln!(out, "Completed:     {}", summary.completed)?;
    writeln!(out, "Action needed: {}", summary.action_needed)
}

/// Common problems for a category.
pub fn guidance(out: &mut impl Write, category: RequestCategory) -> io::Result<()> {
    writeln!(out, "Before raising a request for {category}:")?;
    for hint in category.guidance() {
        writeln!(out, "  - {hint}")?;
    }
    Ok(())
}

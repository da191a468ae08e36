//! Core types for the service desk.
//!
//! This module provides type-safe wrappers for the domain concepts shared by
//! the store and the CLI.

pub mod category;
pub mod email;
pub mod id;
pub mod queue;
pub mod request;
pub mod status;
pub mod user;

pub use category::RequestCategory;
pub use email::Email;
pub use id::*;
pub use queue::QueueNumber;
pub use request::{NewRequest, NoteUpdate, RequestSummary, RequestUpdate, ServiceRequest};
pub use status::*;
pub use user::{User, UserError};

//! Service Desk Core - Shared domain types.
//!
//! This crate provides the types used across all Service Desk components:
//! - `store` - Request and session stores over a key-value substrate
//! - `cli` - Command-line front end for students and staff
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! storage access, no clocks. Timestamps are handed in by the caller; fresh
//! identifiers come from random UUIDs.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids, email, statuses, categories, users and requests

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

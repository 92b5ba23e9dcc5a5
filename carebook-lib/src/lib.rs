//! Carebook contact console core
//!
//! The client-side engine behind the Carebook contacts table: in-memory
//! filtering, sorting and selection reconciliation over contact records,
//! plus a TTL cache for email/website reachability checks.

pub mod error;
pub mod model;
pub mod reach;
pub mod view;

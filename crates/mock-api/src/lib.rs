//! In-process stand-in for the platform's alert-muting API.
//!
//! Mirrors the server-side behavior the provider has to cope with: start
//! times in the past are moved forward to "now" on every write.

pub mod config;
pub mod middleware;
pub mod rest;
pub mod store;

pub use rest::{router, spawn, AppState};

//! Academic-metrics engine
//!
//! Everything here is pure and synchronous; reading and writing student
//! data is left to the caller.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod grade;
pub mod input;
pub mod models;
pub mod projector;

/// Returns the current version of the `grade-tracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Library for `grade-tracker`
//! Contains the academic-metrics engine and the logger shared with the CLI

pub mod core;
pub mod logger;

pub use crate::core::{config, error, get_version};

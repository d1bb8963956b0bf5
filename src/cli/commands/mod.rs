//! CLI command handlers for `gradetracker`.
//!
//! Each command is implemented in its own submodule. Handlers that work on
//! student data report whether they changed it so the caller knows to save.

pub mod config;
pub mod record;
pub mod target;
pub mod unit;
pub mod whatif;

use grade_tracker::error::TrackerError;

/// `Ok(true)` when the student data was modified
pub type CommandResult = Result<bool, Box<dyn std::error::Error>>;

/// Report a failed positional removal using the 1-based number the user typed
pub fn numbered_error(label: &str, err: TrackerError) -> Box<dyn std::error::Error> {
    match err {
        TrackerError::OutOfRange { index, len } => {
            format!("No {label} #{} ({len} present)", index + 1).into()
        }
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_error_is_one_based() {
        let err = numbered_error("Unit", TrackerError::OutOfRange { index: 2, len: 2 });
        assert_eq!(err.to_string(), "No Unit #3 (2 present)");

        let err = numbered_error("Assessment", TrackerError::UnknownUnit("FIT2004".to_string()));
        assert_eq!(err.to_string(), "unit FIT2004 is not registered");
    }
}

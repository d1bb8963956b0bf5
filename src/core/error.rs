//! Error types for the academic-metrics engine

use std::fmt;
use thiserror::Error;

/// Input field that failed validation.
///
/// The `Display` form is the user-facing field label, so a failed field
/// renders as e.g. "Weight is invalid."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Unit code (three letters and four digits)
    UnitCode,
    /// Unit mark (0-100)
    Mark,
    /// Letter grade
    Grade,
    /// Credit points (1-24)
    CreditPoints,
    /// Year level of a hypothetical unit (1-9)
    YearLevel,
    /// Assessment name
    AssessmentName,
    /// Assessment weight
    Weight,
    /// Marks obtained on an assessment
    ObtainedMarks,
    /// Marks available on an assessment
    TotalMarks,
    /// Target grade
    TargetGrade,
    /// Target mark
    TargetMark,
}

impl Field {
    /// User-facing label for this field
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnitCode => "Unit code",
            Self::Mark => "Mark",
            Self::Grade => "Grade",
            Self::CreditPoints => "Credit points",
            Self::YearLevel => "Year level",
            Self::AssessmentName => "Assessment name",
            Self::Weight => "Weight",
            Self::ObtainedMarks => "Obtained marks",
            Self::TotalMarks => "Total marks",
            Self::TargetGrade => "Target grade",
            Self::TargetMark => "Target mark",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// A single input field was rejected; nothing was changed.
    #[error("{0} is invalid.")]
    Invalid(Field),

    /// A positional removal addressed an entry that does not exist.
    #[error("no entry at index {index} ({len} present)")]
    OutOfRange {
        /// Requested 0-based position
        index: usize,
        /// Number of entries at the time of the request
        len: usize,
    },

    /// An operation named an in-progress unit that is not registered.
    #[error("unit {0} is not registered")]
    UnknownUnit(String),

    /// Stored data carries a grade outside the fixed scale.
    #[error("corrupted data: unknown grade '{0}'")]
    UnknownGrade(String),

    /// A stored row could not be split into the expected fields.
    #[error("corrupted data: line {line} is malformed")]
    MalformedRow {
        /// 1-based line number
        line: usize,
    },
}

impl TrackerError {
    /// Whether this error reports corrupted stored data rather than bad input
    #[must_use]
    pub const fn is_integrity(&self) -> bool {
        matches!(self, Self::UnknownGrade(_) | Self::MalformedRow { .. })
    }
}

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_message() {
        assert_eq!(
            TrackerError::Invalid(Field::Weight).to_string(),
            "Weight is invalid."
        );
        assert_eq!(
            TrackerError::Invalid(Field::ObtainedMarks).to_string(),
            "Obtained marks is invalid."
        );
    }

    #[test]
    fn test_integrity_is_distinct() {
        assert!(TrackerError::UnknownGrade("A+".to_string()).is_integrity());
        assert!(TrackerError::MalformedRow { line: 2 }.is_integrity());
        assert!(!TrackerError::Invalid(Field::Grade).is_integrity());
        assert!(!TrackerError::OutOfRange { index: 3, len: 1 }.is_integrity());
    }
}

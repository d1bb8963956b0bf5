//! Target model

use crate::core::error::{Field, Result, TrackerError};
use crate::core::grade::GradeLetter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The grade or mark a student is aiming for in every in-progress unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "value",
    rename_all = "lowercase",
    try_from = "RawTarget"
)]
pub enum Target {
    /// Reach at least the bottom of this grade's band
    Grade(GradeLetter),
    /// Reach at least this mark
    Mark(u8),
}

impl Target {
    /// Target a grade
    ///
    /// # Errors
    /// Returns `Invalid(TargetGrade)` for `WN`, which cannot be aimed for
    pub fn grade(grade: GradeLetter) -> Result<Self> {
        if grade == GradeLetter::WN {
            return Err(TrackerError::Invalid(Field::TargetGrade));
        }
        Ok(Self::Grade(grade))
    }

    /// Target a mark
    ///
    /// # Errors
    /// Returns `Invalid(TargetMark)` above 100
    pub const fn mark(mark: u8) -> Result<Self> {
        if mark > 100 {
            return Err(TrackerError::Invalid(Field::TargetMark));
        }
        Ok(Self::Mark(mark))
    }

    /// Mark that must be reached to meet this target
    #[must_use]
    pub const fn numeric(self) -> u8 {
        match self {
            Self::Grade(grade) => grade.minimum_mark(),
            Self::Mark(mark) => mark,
        }
    }
}

#[derive(Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
enum RawTarget {
    Grade(GradeLetter),
    Mark(u8),
}

impl TryFrom<RawTarget> for Target {
    type Error = TrackerError;

    fn try_from(raw: RawTarget) -> Result<Self> {
        match raw {
            RawTarget::Grade(grade) => Self::grade(grade),
            RawTarget::Mark(mark) => Self::mark(mark),
        }
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::Grade(GradeLetter::HD)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grade(grade) => write!(f, "Target Grade: {grade}"),
            Self::Mark(mark) => write!(f, "Target Mark: {mark}"),
        }
    }
}

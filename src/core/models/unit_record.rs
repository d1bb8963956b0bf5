//! Completed unit model

use super::UnitCode;
use crate::core::aggregate::{GpaInput, WamInput};
use crate::core::error::{Field, Result, TrackerError};
use crate::core::grade::GradeLetter;
use serde::{Deserialize, Serialize};

/// Highest mark a unit can carry
pub const MAX_MARK: u8 = 100;

/// Range of credit points a unit can be worth
pub const CREDIT_POINTS: std::ops::RangeInclusive<u8> = 1..=24;

/// A completed unit on the academic record.
///
/// Fields are private so a record can only exist in a consistent state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawUnitRecord")]
pub struct UnitRecord {
    code: UnitCode,
    mark: u8,
    grade: GradeLetter,
    credit_points: u8,
}

impl UnitRecord {
    /// Create a unit record
    ///
    /// # Arguments
    /// * `code` - Validated unit code
    /// * `mark` - Final mark (0-100)
    /// * `grade` - Grade awarded; must sit in the mark's band (or `WN` below 50)
    /// * `credit_points` - Credit points (1-24)
    ///
    /// # Errors
    /// Returns `Invalid` naming the first offending field
    pub fn new(code: UnitCode, mark: u8, grade: GradeLetter, credit_points: u8) -> Result<Self> {
        if mark > MAX_MARK {
            return Err(TrackerError::Invalid(Field::Mark));
        }
        if !CREDIT_POINTS.contains(&credit_points) {
            return Err(TrackerError::Invalid(Field::CreditPoints));
        }
        if !grade.accepts_mark(mark) {
            return Err(TrackerError::Invalid(Field::Grade));
        }
        Ok(Self {
            code,
            mark,
            grade,
            credit_points,
        })
    }

    /// Unit code
    #[must_use]
    pub const fn code(&self) -> &UnitCode {
        &self.code
    }

    /// Final mark
    #[must_use]
    pub const fn mark(&self) -> u8 {
        self.mark
    }

    /// Grade awarded
    #[must_use]
    pub const fn grade(&self) -> GradeLetter {
        self.grade
    }

    /// Credit points
    #[must_use]
    pub const fn credit_points(&self) -> u8 {
        self.credit_points
    }
}

impl WamInput for UnitRecord {
    fn mark(&self) -> u8 {
        self.mark
    }

    fn year_level(&self) -> u8 {
        self.code.year_level()
    }

    fn credit_points(&self) -> u8 {
        self.credit_points
    }
}

impl GpaInput for UnitRecord {
    fn grade(&self) -> GradeLetter {
        self.grade
    }

    fn credit_points(&self) -> u8 {
        self.credit_points
    }
}

#[derive(Deserialize)]
struct RawUnitRecord {
    code: UnitCode,
    mark: u8,
    grade: GradeLetter,
    credit_points: u8,
}

impl TryFrom<RawUnitRecord> for UnitRecord {
    type Error = TrackerError;

    fn try_from(raw: RawUnitRecord) -> Result<Self> {
        Self::new(raw.code, raw.mark, raw.grade, raw.credit_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> UnitCode {
        UnitCode::parse(s).unwrap()
    }

    #[test]
    fn test_unit_record_creation() {
        let unit = UnitRecord::new(code("FIT1045"), 85, GradeLetter::HD, 6).unwrap();
        assert_eq!(unit.code().as_str(), "FIT1045");
        assert_eq!(unit.mark(), 85);
        assert_eq!(unit.grade(), GradeLetter::HD);
        assert_eq!(unit.credit_points(), 6);
    }

    #[test]
    fn test_mark_out_of_range() {
        assert_eq!(
            UnitRecord::new(code("FIT1045"), 101, GradeLetter::HD, 6),
            Err(TrackerError::Invalid(Field::Mark))
        );
    }

    #[test]
    fn test_credit_points_out_of_range() {
        assert_eq!(
            UnitRecord::new(code("FIT1045"), 70, GradeLetter::D, 0),
            Err(TrackerError::Invalid(Field::CreditPoints))
        );
        assert_eq!(
            UnitRecord::new(code("FIT1045"), 70, GradeLetter::D, 25),
            Err(TrackerError::Invalid(Field::CreditPoints))
        );
        assert!(UnitRecord::new(code("FIT1045"), 70, GradeLetter::D, 24).is_ok());
    }

    #[test]
    fn test_mark_grade_boundaries() {
        assert!(UnitRecord::new(code("FIT1045"), 49, GradeLetter::N, 6).is_ok());
        assert!(UnitRecord::new(code("FIT1045"), 49, GradeLetter::WN, 6).is_ok());
        assert_eq!(
            UnitRecord::new(code("FIT1045"), 49, GradeLetter::P, 6),
            Err(TrackerError::Invalid(Field::Grade))
        );
        assert!(UnitRecord::new(code("FIT1045"), 50, GradeLetter::P, 6).is_ok());
        assert_eq!(
            UnitRecord::new(code("FIT1045"), 50, GradeLetter::N, 6),
            Err(TrackerError::Invalid(Field::Grade))
        );
        assert_eq!(
            UnitRecord::new(code("FIT1045"), 50, GradeLetter::WN, 6),
            Err(TrackerError::Invalid(Field::Grade))
        );
    }

    #[test]
    fn test_withdrawal_with_zero_mark() {
        let unit = UnitRecord::new(code("FIT2004"), 0, GradeLetter::WN, 6).unwrap();
        assert_eq!(unit.grade(), GradeLetter::WN);
    }
}

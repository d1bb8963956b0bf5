//! Academic record model

use super::{UnitCode, UnitRecord};
use crate::core::aggregate::{gpa, wam, GpaTotals, WamTotals};
use crate::core::error::{Field, Result, TrackerError};
use crate::debug;
use serde::{Deserialize, Serialize};

/// Completed units in the order they were entered.
///
/// Units are addressed by position; the displayed "Unit #" is the
/// zero-based position plus one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<UnitRecord>", into = "Vec<UnitRecord>")]
pub struct AcademicRecord {
    units: Vec<UnitRecord>,
}

impl AcademicRecord {
    /// Create an empty record
    #[must_use]
    pub const fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Append a unit
    ///
    /// # Errors
    /// Returns `Invalid(UnitCode)` if a unit with the same code is already recorded
    pub fn add(&mut self, unit: UnitRecord) -> Result<()> {
        if self.contains(unit.code()) {
            return Err(TrackerError::Invalid(Field::UnitCode));
        }
        debug!(
            "Recording {} ({} {}, {}cp)",
            unit.code(),
            unit.mark(),
            unit.grade(),
            unit.credit_points()
        );
        self.units.push(unit);
        Ok(())
    }

    /// Remove the unit at zero-based `position`
    ///
    /// # Errors
    /// Returns `OutOfRange` if no unit exists at `position`
    pub fn remove(&mut self, position: usize) -> Result<UnitRecord> {
        if position >= self.units.len() {
            return Err(TrackerError::OutOfRange {
                index: position,
                len: self.units.len(),
            });
        }
        let unit = self.units.remove(position);
        debug!("Removed {} from record", unit.code());
        Ok(unit)
    }

    /// Whether a unit with `code` is recorded
    #[must_use]
    pub fn contains(&self, code: &UnitCode) -> bool {
        self.units.iter().any(|unit| unit.code() == code)
    }

    /// Recorded units in entry order
    #[must_use]
    pub fn units(&self) -> &[UnitRecord] {
        &self.units
    }

    /// Units paired with their 1-based "Unit #"
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &UnitRecord)> {
        self.units.iter().enumerate().map(|(idx, unit)| (idx + 1, unit))
    }

    /// Number of recorded units
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the record is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Weighted average mark, e.g. `72.500`
    #[must_use]
    pub fn wam(&self) -> String {
        wam(&self.units)
    }

    /// Grade point average, e.g. `2.667`
    #[must_use]
    pub fn gpa(&self) -> String {
        gpa(&self.units)
    }

    /// Raw WAM sums, for combining with hypothetical units
    #[must_use]
    pub fn wam_totals(&self) -> WamTotals {
        WamTotals::from_units(&self.units)
    }

    /// Raw GPA sums, for combining with hypothetical units
    #[must_use]
    pub fn gpa_totals(&self) -> GpaTotals {
        GpaTotals::from_units(&self.units)
    }
}

impl TryFrom<Vec<UnitRecord>> for AcademicRecord {
    type Error = TrackerError;

    fn try_from(units: Vec<UnitRecord>) -> Result<Self> {
        let mut record = Self::new();
        for unit in units {
            record.add(unit)?;
        }
        Ok(record)
    }
}

impl From<AcademicRecord> for Vec<UnitRecord> {
    fn from(record: AcademicRecord) -> Self {
        record.units
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grade::GradeLetter;

    fn unit(code: &str, mark: u8, grade: GradeLetter) -> UnitRecord {
        UnitRecord::new(UnitCode::parse(code).unwrap(), mark, grade, 6).unwrap()
    }

    #[test]
    fn test_add_preserves_order() {
        let mut record = AcademicRecord::new();
        record.add(unit("FIT1045", 85, GradeLetter::HD)).unwrap();
        record.add(unit("MAT1830", 62, GradeLetter::C)).unwrap();

        let numbered: Vec<(usize, &str)> = record
            .numbered()
            .map(|(no, unit)| (no, unit.code().as_str()))
            .collect();
        assert_eq!(numbered, vec![(1, "FIT1045"), (2, "MAT1830")]);
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let mut record = AcademicRecord::new();
        record.add(unit("FIT1045", 85, GradeLetter::HD)).unwrap();

        let result = record.add(unit("FIT1045", 55, GradeLetter::P));
        assert_eq!(result, Err(TrackerError::Invalid(Field::UnitCode)));
        assert_eq!(record.len(), 1);
        assert_eq!(record.units()[0].mark(), 85);
    }

    #[test]
    fn test_remove_by_position() {
        let mut record = AcademicRecord::new();
        record.add(unit("FIT1045", 85, GradeLetter::HD)).unwrap();
        record.add(unit("MAT1830", 62, GradeLetter::C)).unwrap();
        record.add(unit("FIT1008", 71, GradeLetter::D)).unwrap();

        let removed = record.remove(1).unwrap();
        assert_eq!(removed.code().as_str(), "MAT1830");
        assert_eq!(record.len(), 2);
        assert_eq!(record.units()[1].code().as_str(), "FIT1008");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut record = AcademicRecord::new();
        record.add(unit("FIT1045", 85, GradeLetter::HD)).unwrap();

        assert_eq!(
            record.remove(1),
            Err(TrackerError::OutOfRange { index: 1, len: 1 })
        );
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_removed_code_can_be_added_again() {
        let mut record = AcademicRecord::new();
        record.add(unit("FIT1045", 40, GradeLetter::N)).unwrap();
        record.remove(0).unwrap();
        assert!(record.add(unit("FIT1045", 75, GradeLetter::D)).is_ok());
    }

    #[test]
    fn test_aggregates_are_stable() {
        let mut record = AcademicRecord::new();
        record.add(unit("FIT1045", 85, GradeLetter::HD)).unwrap();
        record.add(unit("FIT2004", 62, GradeLetter::C)).unwrap();

        assert_eq!(record.wam(), record.wam());
        assert_eq!(record.gpa(), record.gpa());
        assert_eq!(record.gpa(), "3.000");
    }
}

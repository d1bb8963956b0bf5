//! Hypothetical units for what-if WAM and GPA planning
//!
//! Entries are kept apart from the academic record. Each plan reports a
//! "current" value over the record alone and a "calculated" value over the
//! record plus its entries. Entries are removed from the end.

use super::unit_record::{CREDIT_POINTS, MAX_MARK};
use super::AcademicRecord;
use crate::core::aggregate::{GpaInput, GpaTotals, WamInput, WamTotals};
use crate::core::error::{Field, Result, TrackerError};
use crate::core::grade::GradeLetter;
use serde::{Deserialize, Serialize};

/// Range of year levels a hypothetical unit can have
pub const YEAR_LEVELS: std::ops::RangeInclusive<u8> = 1..=9;

/// A hypothetical unit for WAM planning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWamEntry")]
pub struct WamEntry {
    year_level: u8,
    mark: u8,
    credit_points: u8,
}

impl WamEntry {
    /// Create a WAM entry
    ///
    /// # Errors
    /// Returns `Invalid` naming the first offending field
    pub fn new(year_level: u8, mark: u8, credit_points: u8) -> Result<Self> {
        if !YEAR_LEVELS.contains(&year_level) {
            return Err(TrackerError::Invalid(Field::YearLevel));
        }
        if mark > MAX_MARK {
            return Err(TrackerError::Invalid(Field::Mark));
        }
        if !CREDIT_POINTS.contains(&credit_points) {
            return Err(TrackerError::Invalid(Field::CreditPoints));
        }
        Ok(Self {
            year_level,
            mark,
            credit_points,
        })
    }
}

impl WamInput for WamEntry {
    fn mark(&self) -> u8 {
        self.mark
    }

    fn year_level(&self) -> u8 {
        self.year_level
    }

    fn credit_points(&self) -> u8 {
        self.credit_points
    }
}

#[derive(Deserialize)]
struct RawWamEntry {
    year_level: u8,
    mark: u8,
    credit_points: u8,
}

impl TryFrom<RawWamEntry> for WamEntry {
    type Error = TrackerError;

    fn try_from(raw: RawWamEntry) -> Result<Self> {
        Self::new(raw.year_level, raw.mark, raw.credit_points)
    }
}

/// A hypothetical unit for GPA planning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGpaEntry")]
pub struct GpaEntry {
    grade: GradeLetter,
    credit_points: u8,
}

impl GpaEntry {
    /// Create a GPA entry
    ///
    /// # Errors
    /// Returns `Invalid(CreditPoints)` outside 1-24
    pub fn new(grade: GradeLetter, credit_points: u8) -> Result<Self> {
        if !CREDIT_POINTS.contains(&credit_points) {
            return Err(TrackerError::Invalid(Field::CreditPoints));
        }
        Ok(Self {
            grade,
            credit_points,
        })
    }
}

impl GpaInput for GpaEntry {
    fn grade(&self) -> GradeLetter {
        self.grade
    }

    fn credit_points(&self) -> u8 {
        self.credit_points
    }
}

#[derive(Deserialize)]
struct RawGpaEntry {
    grade: GradeLetter,
    credit_points: u8,
}

impl TryFrom<RawGpaEntry> for GpaEntry {
    type Error = TrackerError;

    fn try_from(raw: RawGpaEntry) -> Result<Self> {
        Self::new(raw.grade, raw.credit_points)
    }
}

/// Hypothetical units layered over the record for WAM planning
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WamPlan {
    entries: Vec<WamEntry>,
}

impl WamPlan {
    /// Append an entry
    pub fn add(&mut self, entry: WamEntry) {
        self.entries.push(entry);
    }

    /// Remove the most recent entry, if any
    pub fn remove_last(&mut self) -> Option<WamEntry> {
        self.entries.pop()
    }

    /// Entries paired with their row number, continuing after the record's units
    pub fn numbered<'a>(
        &'a self,
        record: &AcademicRecord,
    ) -> impl Iterator<Item = (usize, &'a WamEntry)> {
        let offset = record.len();
        self.entries
            .iter()
            .enumerate()
            .map(move |(idx, entry)| (offset + idx + 1, entry))
    }

    /// WAM of the record alone
    #[must_use]
    pub fn current(record: &AcademicRecord) -> String {
        record.wam()
    }

    /// WAM of the record plus every entry
    #[must_use]
    pub fn calculated(&self, record: &AcademicRecord) -> String {
        let mut totals: WamTotals = record.wam_totals();
        totals.extend(&self.entries);
        totals.display()
    }
}

/// Hypothetical units layered over the record for GPA planning
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GpaPlan {
    entries: Vec<GpaEntry>,
}

impl GpaPlan {
    /// Append an entry
    pub fn add(&mut self, entry: GpaEntry) {
        self.entries.push(entry);
    }

    /// Remove the most recent entry, if any
    pub fn remove_last(&mut self) -> Option<GpaEntry> {
        self.entries.pop()
    }

    /// Entries paired with their row number, continuing after the record's units
    pub fn numbered<'a>(
        &'a self,
        record: &AcademicRecord,
    ) -> impl Iterator<Item = (usize, &'a GpaEntry)> {
        let offset = record.len();
        self.entries
            .iter()
            .enumerate()
            .map(move |(idx, entry)| (offset + idx + 1, entry))
    }

    /// GPA of the record alone
    #[must_use]
    pub fn current(record: &AcademicRecord) -> String {
        record.gpa()
    }

    /// GPA of the record plus every entry
    #[must_use]
    pub fn calculated(&self, record: &AcademicRecord) -> String {
        let mut totals: GpaTotals = record.gpa_totals();
        totals.extend(&self.entries);
        totals.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{UnitCode, UnitRecord};

    fn record() -> AcademicRecord {
        let mut record = AcademicRecord::new();
        record
            .add(UnitRecord::new(UnitCode::parse("FIT2004").unwrap(), 70, GradeLetter::D, 6).unwrap())
            .unwrap();
        record
    }

    #[test]
    fn test_wam_entry_validation() {
        assert_eq!(WamEntry::new(0, 70, 6), Err(TrackerError::Invalid(Field::YearLevel)));
        assert_eq!(WamEntry::new(10, 70, 6), Err(TrackerError::Invalid(Field::YearLevel)));
        assert_eq!(WamEntry::new(2, 101, 6), Err(TrackerError::Invalid(Field::Mark)));
        assert_eq!(WamEntry::new(2, 70, 0), Err(TrackerError::Invalid(Field::CreditPoints)));
        assert!(WamEntry::new(9, 100, 24).is_ok());
    }

    #[test]
    fn test_gpa_entry_validation() {
        assert_eq!(
            GpaEntry::new(GradeLetter::HD, 25),
            Err(TrackerError::Invalid(Field::CreditPoints))
        );
        assert!(GpaEntry::new(GradeLetter::WN, 1).is_ok());
    }

    #[test]
    fn test_wam_current_and_calculated() {
        let record = record();
        let mut plan = WamPlan::default();
        plan.add(WamEntry::new(3, 90, 6).unwrap());

        assert_eq!(WamPlan::current(&record), "70.000");
        assert_eq!(plan.calculated(&record), "80.000");
    }

    #[test]
    fn test_wam_first_year_entry_counts_half() {
        let record = record();
        let mut plan = WamPlan::default();
        plan.add(WamEntry::new(1, 100, 12).unwrap());
        // (70*6 + 100*6) / 12
        assert_eq!(plan.calculated(&record), "85.000");
    }

    #[test]
    fn test_gpa_current_and_calculated() {
        let record = record();
        let mut plan = GpaPlan::default();
        plan.add(GpaEntry::new(GradeLetter::HD, 6).unwrap());
        plan.add(GpaEntry::new(GradeLetter::P, 12).unwrap());

        assert_eq!(GpaPlan::current(&record), "3.000");
        // (18 + 24 + 12) / 24
        assert_eq!(plan.calculated(&record), "2.250");
    }

    #[test]
    fn test_entries_only() {
        let record = AcademicRecord::new();
        let mut plan = GpaPlan::default();
        assert_eq!(plan.calculated(&record), "0.000");
        plan.add(GpaEntry::new(GradeLetter::C, 6).unwrap());
        assert_eq!(plan.calculated(&record), "2.000");
    }

    #[test]
    fn test_remove_last_and_numbering() {
        let record = record();
        let mut plan = WamPlan::default();
        plan.add(WamEntry::new(2, 60, 6).unwrap());
        plan.add(WamEntry::new(3, 80, 6).unwrap());

        let numbers: Vec<usize> = plan.numbered(&record).map(|(no, _)| no).collect();
        assert_eq!(numbers, vec![2, 3]);

        assert_eq!(plan.remove_last(), Some(WamEntry::new(3, 80, 6).unwrap()));
        assert_eq!(plan.numbered(&record).count(), 1);
        plan.remove_last();
        assert_eq!(plan.remove_last(), None);
        assert_eq!(plan.calculated(&record), WamPlan::current(&record));
    }
}

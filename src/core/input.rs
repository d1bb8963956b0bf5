//! Input boundary: raw text rows parsed once into validated values
//!
//! Form rows report the first failing field as `Invalid(field)`. Stored
//! legacy rows are matched exactly, so an unknown grade there is reported
//! as corrupted data instead.

use super::error::{Field, Result, TrackerError};
use super::grade::GradeLetter;
use super::models::assessment::validate_name;
use super::models::{
    AcademicRecord, Assessment, AssessmentLedger, GpaEntry, Target, UnitCode, UnitRecord,
    WamEntry, Weight,
};
use std::str::FromStr;

fn parse_field<T: FromStr>(value: &str, field: Field) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| TrackerError::Invalid(field))
}

/// Parse a typed-in grade, ignoring case
///
/// # Errors
/// Returns `Invalid(Grade)` for anything outside the scale
pub fn parse_grade(value: &str) -> Result<GradeLetter> {
    value
        .trim()
        .to_ascii_uppercase()
        .parse()
        .map_err(|_| TrackerError::Invalid(Field::Grade))
}

/// Parse a completed-unit row: code, mark, grade, credit points
///
/// # Errors
/// Returns `Invalid` naming the first offending field
pub fn parse_unit_row(code: &str, mark: &str, grade: &str, credit_points: &str) -> Result<UnitRecord> {
    let code = UnitCode::parse(code)?;
    let mark = parse_field(mark, Field::Mark)?;
    let grade = parse_grade(grade)?;
    let credit_points = parse_field(credit_points, Field::CreditPoints)?;
    UnitRecord::new(code, mark, grade, credit_points)
}

/// Parse an assessment row against the ledger it will be added to
///
/// Fields are checked in form order: name (length and uniqueness), weight
/// (format and remaining budget), obtained marks, total marks.
///
/// # Errors
/// Returns `Invalid` naming the first offending field
pub fn parse_assessment_row(
    name: &str,
    weight: &str,
    score: &str,
    max_score: &str,
    ledger: &AssessmentLedger,
) -> Result<Assessment> {
    let name = name.trim();
    validate_name(name)?;
    if ledger.position_of(name).is_some() {
        return Err(TrackerError::Invalid(Field::AssessmentName));
    }

    let weight: Weight = parse_field(weight, Field::Weight)?;
    if !ledger.fits(weight) {
        return Err(TrackerError::Invalid(Field::Weight));
    }

    let score: f64 = parse_field(score, Field::ObtainedMarks)?;
    let max_score: f64 = parse_field(max_score, Field::TotalMarks)?;
    Assessment::new(name, weight, score, max_score)
}

/// Parse a what-if WAM row: year level, mark, credit points
///
/// # Errors
/// Returns `Invalid` naming the first offending field
pub fn parse_wam_row(year_level: &str, mark: &str, credit_points: &str) -> Result<WamEntry> {
    WamEntry::new(
        parse_field(year_level, Field::YearLevel)?,
        parse_field(mark, Field::Mark)?,
        parse_field(credit_points, Field::CreditPoints)?,
    )
}

/// Parse a what-if GPA row: grade, credit points
///
/// # Errors
/// Returns `Invalid` naming the first offending field
pub fn parse_gpa_row(grade: &str, credit_points: &str) -> Result<GpaEntry> {
    GpaEntry::new(
        parse_grade(grade)?,
        parse_field(credit_points, Field::CreditPoints)?,
    )
}

/// Parse a target given its kind (`grade` or `mark`) and value
///
/// # Errors
/// Returns `Invalid(TargetGrade)` or `Invalid(TargetMark)`
pub fn parse_target(kind: &str, value: &str) -> Result<Target> {
    if kind.trim().eq_ignore_ascii_case("mark") {
        Target::mark(parse_field(value, Field::TargetMark)?)
    } else {
        let grade = parse_grade(value).map_err(|_| TrackerError::Invalid(Field::TargetGrade))?;
        Target::grade(grade)
    }
}

/// Parse a legacy whitespace-separated record file.
///
/// Each non-blank line is `CODE MARK GRADE CP`, optionally preceded by its
/// unit number.
///
/// # Errors
/// Returns `MalformedRow` for a line with the wrong number of fields,
/// `UnknownGrade` for a grade outside the scale, or the first validation
/// failure of a row
pub fn parse_record_text(text: &str) -> Result<AcademicRecord> {
    let mut record = AcademicRecord::new();
    for (idx, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let (code, mark, grade, credit_points) = match fields.as_slice() {
            [] => continue,
            [code, mark, grade, cp] | [_, code, mark, grade, cp] => (*code, *mark, *grade, *cp),
            _ => return Err(TrackerError::MalformedRow { line: idx + 1 }),
        };
        let grade: GradeLetter = grade.parse()?;
        let unit = UnitRecord::new(
            UnitCode::parse(code)?,
            parse_field(mark, Field::Mark)?,
            grade,
            parse_field(credit_points, Field::CreditPoints)?,
        )?;
        record.add(unit)?;
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_row_normalises_case() {
        let unit = parse_unit_row(" fit1045 ", "85", "hd", "6").unwrap();
        assert_eq!(unit.code().as_str(), "FIT1045");
        assert_eq!(unit.grade(), GradeLetter::HD);
    }

    #[test]
    fn test_unit_row_field_errors() {
        assert_eq!(
            parse_unit_row("FIT104", "85", "HD", "6"),
            Err(TrackerError::Invalid(Field::UnitCode))
        );
        assert_eq!(
            parse_unit_row("FIT1045", "eighty", "HD", "6"),
            Err(TrackerError::Invalid(Field::Mark))
        );
        assert_eq!(
            parse_unit_row("FIT1045", "85", "A", "6"),
            Err(TrackerError::Invalid(Field::Grade))
        );
        assert_eq!(
            parse_unit_row("FIT1045", "85", "HD", "0"),
            Err(TrackerError::Invalid(Field::CreditPoints))
        );
        assert_eq!(
            parse_unit_row("FIT1045", "85", "D", "6"),
            Err(TrackerError::Invalid(Field::Grade))
        );
    }

    #[test]
    fn test_assessment_row_order() {
        let mut ledger = AssessmentLedger::new();
        ledger
            .add(parse_assessment_row("Exam", "60", "40", "60", &ledger).unwrap())
            .unwrap();

        assert_eq!(
            parse_assessment_row("Exam", "abc", "x", "y", &ledger),
            Err(TrackerError::Invalid(Field::AssessmentName))
        );
        assert_eq!(
            parse_assessment_row("Project", "50", "x", "y", &ledger),
            Err(TrackerError::Invalid(Field::Weight))
        );
        assert_eq!(
            parse_assessment_row("Project", "10.125", "5", "10", &ledger),
            Err(TrackerError::Invalid(Field::Weight))
        );
        for weight in ["12.3400000001", "0.000000001"] {
            assert_eq!(
                parse_assessment_row("Project", weight, "5", "10", &ledger),
                Err(TrackerError::Invalid(Field::Weight))
            );
        }
        assert_eq!(
            parse_assessment_row("Project", "40", "x", "10", &ledger),
            Err(TrackerError::Invalid(Field::ObtainedMarks))
        );
        assert_eq!(
            parse_assessment_row("Project", "40", "5", "0", &ledger),
            Err(TrackerError::Invalid(Field::TotalMarks))
        );
        assert_eq!(
            parse_assessment_row("Project", "40", "11", "10", &ledger),
            Err(TrackerError::Invalid(Field::ObtainedMarks))
        );
        assert!(parse_assessment_row("Project", "40", "10", "10", &ledger).is_ok());
    }

    #[test]
    fn test_whatif_rows() {
        assert!(parse_wam_row("3", "75", "6").is_ok());
        assert_eq!(
            parse_wam_row("0", "75", "6"),
            Err(TrackerError::Invalid(Field::YearLevel))
        );
        assert!(parse_gpa_row("wn", "6").is_ok());
        assert_eq!(
            parse_gpa_row("Z", "6"),
            Err(TrackerError::Invalid(Field::Grade))
        );
    }

    #[test]
    fn test_target() {
        assert_eq!(parse_target("grade", "d").unwrap(), Target::Grade(GradeLetter::D));
        assert_eq!(parse_target("mark", "72").unwrap(), Target::Mark(72));
        assert_eq!(
            parse_target("grade", "WN"),
            Err(TrackerError::Invalid(Field::TargetGrade))
        );
        assert_eq!(
            parse_target("mark", "120"),
            Err(TrackerError::Invalid(Field::TargetMark))
        );
    }

    #[test]
    fn test_record_text() {
        let text = "FIT1045 85 HD 6\n\n2 FIT2004 72 D 6\n";
        let record = parse_record_text(text).unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.units()[1].code().as_str(), "FIT2004");
    }

    #[test]
    fn test_record_text_integrity_errors() {
        let err = parse_record_text("FIT1045 85 A+ 6").unwrap_err();
        assert_eq!(err, TrackerError::UnknownGrade("A+".to_string()));
        assert!(err.is_integrity());

        // Stored grades are not case-folded
        assert!(parse_record_text("FIT1045 85 hd 6").unwrap_err().is_integrity());

        assert_eq!(
            parse_record_text("FIT1045 85 HD 6\nFIT2004 72").unwrap_err(),
            TrackerError::MalformedRow { line: 2 }
        );
    }
}

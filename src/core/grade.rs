//! Grade scale: letter grades, grade points and mark bands

use super::error::TrackerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade awarded for a unit.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GradeLetter {
    /// Withdrawn, fail
    WN,
    /// Fail
    N,
    /// Pass
    P,
    /// Credit
    C,
    /// Distinction
    D,
    /// High distinction
    HD,
}

impl GradeLetter {
    /// Every grade on the scale, lowest first
    pub const ALL: [Self; 6] = [Self::WN, Self::N, Self::P, Self::C, Self::D, Self::HD];

    /// Grade point value used for GPA
    #[must_use]
    pub const fn grade_point(self) -> f64 {
        match self {
            Self::WN => 0.0,
            Self::N => 0.3,
            Self::P => 1.0,
            Self::C => 2.0,
            Self::D => 3.0,
            Self::HD => 4.0,
        }
    }

    /// Band classification of a mark. Never yields `WN`.
    #[must_use]
    pub const fn for_mark(mark: u8) -> Self {
        match mark {
            0..=49 => Self::N,
            50..=59 => Self::P,
            60..=69 => Self::C,
            70..=79 => Self::D,
            _ => Self::HD,
        }
    }

    /// Lowest mark in this grade's band
    #[must_use]
    pub const fn minimum_mark(self) -> u8 {
        match self {
            Self::WN | Self::N => 0,
            Self::P => 50,
            Self::C => 60,
            Self::D => 70,
            Self::HD => 80,
        }
    }

    /// Whether a unit with `mark` may carry this grade.
    ///
    /// A mark below 50 may be recorded as `WN` for a withdrawal.
    #[must_use]
    pub fn accepts_mark(self, mark: u8) -> bool {
        self == Self::for_mark(mark) || (self == Self::WN && mark < 50)
    }

    /// Short code as written on a transcript
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WN => "WN",
            Self::N => "N",
            Self::P => "P",
            Self::C => "C",
            Self::D => "D",
            Self::HD => "HD",
        }
    }
}

/// Grade point value of `grade`
#[must_use]
pub const fn grade_point(grade: GradeLetter) -> f64 {
    grade.grade_point()
}

/// Grade band that `mark` falls into
#[must_use]
pub const fn grade_for_mark(mark: u8) -> GradeLetter {
    GradeLetter::for_mark(mark)
}

impl fmt::Display for GradeLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradeLetter {
    type Err = TrackerError;

    /// Exact match against the scale; stored data is never case-folded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|grade| grade.as_str() == s)
            .ok_or_else(|| TrackerError::UnknownGrade(s.to_string()))
    }
}

impl TryFrom<String> for GradeLetter {
    type Error = TrackerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GradeLetter> for String {
    fn from(grade: GradeLetter) -> Self {
        grade.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_points() {
        assert!((grade_point(GradeLetter::WN) - 0.0).abs() < f64::EPSILON);
        assert!((grade_point(GradeLetter::N) - 0.3).abs() < f64::EPSILON);
        assert!((grade_point(GradeLetter::P) - 1.0).abs() < f64::EPSILON);
        assert!((grade_point(GradeLetter::C) - 2.0).abs() < f64::EPSILON);
        assert!((grade_point(GradeLetter::D) - 3.0).abs() < f64::EPSILON);
        assert!((grade_point(GradeLetter::HD) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(grade_for_mark(0), GradeLetter::N);
        assert_eq!(grade_for_mark(49), GradeLetter::N);
        assert_eq!(grade_for_mark(50), GradeLetter::P);
        assert_eq!(grade_for_mark(59), GradeLetter::P);
        assert_eq!(grade_for_mark(60), GradeLetter::C);
        assert_eq!(grade_for_mark(69), GradeLetter::C);
        assert_eq!(grade_for_mark(70), GradeLetter::D);
        assert_eq!(grade_for_mark(79), GradeLetter::D);
        assert_eq!(grade_for_mark(80), GradeLetter::HD);
        assert_eq!(grade_for_mark(100), GradeLetter::HD);
    }

    #[test]
    fn test_withdrawal_only_below_pass() {
        assert!(GradeLetter::WN.accepts_mark(0));
        assert!(GradeLetter::WN.accepts_mark(49));
        assert!(!GradeLetter::WN.accepts_mark(50));
        assert!(GradeLetter::N.accepts_mark(49));
        assert!(!GradeLetter::N.accepts_mark(50));
        assert!(GradeLetter::P.accepts_mark(50));
        assert!(!GradeLetter::P.accepts_mark(49));
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!("HD".parse::<GradeLetter>(), Ok(GradeLetter::HD));
        assert_eq!("WN".parse::<GradeLetter>(), Ok(GradeLetter::WN));
        assert_eq!(
            "hd".parse::<GradeLetter>(),
            Err(TrackerError::UnknownGrade("hd".to_string()))
        );
        assert!("A".parse::<GradeLetter>().is_err());
    }

    #[test]
    fn test_minimum_marks() {
        assert_eq!(GradeLetter::N.minimum_mark(), 0);
        assert_eq!(GradeLetter::P.minimum_mark(), 50);
        assert_eq!(GradeLetter::C.minimum_mark(), 60);
        assert_eq!(GradeLetter::D.minimum_mark(), 70);
        assert_eq!(GradeLetter::HD.minimum_mark(), 80);
    }
}

//! Assessment model

use crate::core::error::{Field, Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest permitted assessment name, in characters
pub const MAX_NAME_LEN: usize = 15;

/// Weight of a full unit, in hundredths of a percent
pub const FULL_WEIGHT: Weight = Weight(10_000);

/// Assessment weight on a 0-100 scale with at most two decimal places.
///
/// Stored as whole hundredths so ledger totals are exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(u32);

impl Weight {
    /// Zero weight
    pub const ZERO: Self = Self(0);

    /// Build a weight from a percentage
    ///
    /// # Errors
    /// Returns `Invalid(Weight)` for negative, non-finite, over-100 values or
    /// values with more than two decimal places
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(percent: f64) -> Result<Self> {
        if !percent.is_finite() || percent < 0.0 {
            return Err(TrackerError::Invalid(Field::Weight));
        }
        let scaled = percent * 100.0;
        let hundredths = scaled.round();
        // Only absorb the representation error of a two-decimal value
        let tolerance = 4.0 * f64::EPSILON * scaled.max(1.0);
        if (scaled - hundredths).abs() > tolerance || hundredths > f64::from(FULL_WEIGHT.0) {
            return Err(TrackerError::Invalid(Field::Weight));
        }
        Ok(Self(hundredths as u32))
    }

    /// Build a weight from whole hundredths of a percent
    ///
    /// # Errors
    /// Returns `Invalid(Weight)` above 100%
    pub const fn from_hundredths(hundredths: u32) -> Result<Self> {
        if hundredths > FULL_WEIGHT.0 {
            Err(TrackerError::Invalid(Field::Weight))
        } else {
            Ok(Self(hundredths))
        }
    }

    /// Whole hundredths of a percent
    #[must_use]
    pub const fn hundredths(self) -> u32 {
        self.0
    }

    /// Weight as a percentage
    #[must_use]
    pub fn percent(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Weight {
    type Err = TrackerError;

    /// Parse a decimal percentage exactly. Trailing zeros after the point
    /// are ignored, so `50.000` is accepted but `12.341` is not.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TrackerError::Invalid(Field::Weight);
        let s = s.trim();
        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
        let frac = frac.trim_end_matches('0');
        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty())
            || !is_digits(whole)
            || !is_digits(frac)
            || frac.len() > 2
        {
            return Err(invalid());
        }
        let whole: u32 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let frac: u32 = format!("{frac:0<2}").parse().map_err(|_| invalid())?;
        let hundredths = whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(frac))
            .ok_or_else(invalid)?;
        Self::from_hundredths(hundredths)
    }
}

impl TryFrom<f64> for Weight {
    type Error = TrackerError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.percent()
    }
}

/// One graded component of an in-progress unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAssessment")]
pub struct Assessment {
    name: String,
    weight: Weight,
    score: f64,
    max_score: f64,
}

impl Assessment {
    /// Create an assessment
    ///
    /// Uniqueness of the name and the weight budget are checked by the
    /// ledger it is added to.
    ///
    /// # Errors
    /// Returns `Invalid` naming the first offending field
    pub fn new(name: impl Into<String>, weight: Weight, score: f64, max_score: f64) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        if !score.is_finite() || score < 0.0 {
            return Err(TrackerError::Invalid(Field::ObtainedMarks));
        }
        if !max_score.is_finite() || max_score <= 0.0 {
            return Err(TrackerError::Invalid(Field::TotalMarks));
        }
        if score > max_score {
            return Err(TrackerError::Invalid(Field::ObtainedMarks));
        }
        Ok(Self {
            name,
            weight,
            score,
            max_score,
        })
    }

    /// Assessment name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight toward the unit's final mark
    #[must_use]
    pub const fn weight(&self) -> Weight {
        self.weight
    }

    /// Marks obtained
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Marks available
    #[must_use]
    pub const fn max_score(&self) -> f64 {
        self.max_score
    }

    /// Fraction of the available marks obtained (0-1)
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.score / self.max_score
    }

    /// Normalised mark for this assessment (0-100)
    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.fraction() * 100.0
    }

    /// Contribution to the unit mark in weight units
    #[must_use]
    pub fn weighted_mark(&self) -> f64 {
        self.weight.percent() * self.fraction()
    }
}

/// Check an assessment name is 1-15 characters long
///
/// # Errors
/// Returns `Invalid(AssessmentName)` otherwise
pub fn validate_name(name: &str) -> Result<()> {
    let len = name.chars().count();
    if len == 0 || len > MAX_NAME_LEN {
        Err(TrackerError::Invalid(Field::AssessmentName))
    } else {
        Ok(())
    }
}

/// Normalised mark of `assessment` formatted to two decimals
#[must_use]
pub fn percentage(assessment: &Assessment) -> String {
    format!("{:.2}", assessment.percentage())
}

#[derive(Deserialize)]
struct RawAssessment {
    name: String,
    weight: Weight,
    score: f64,
    max_score: f64,
}

impl TryFrom<RawAssessment> for Assessment {
    type Error = TrackerError;

    fn try_from(raw: RawAssessment) -> Result<Self> {
        Self::new(raw.name, raw.weight, raw.score, raw.max_score)
    }
}

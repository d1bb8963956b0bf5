//! Unit code model

use crate::core::error::{Field, Result, TrackerError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static UNIT_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}[0-9]{4}$").expect("unit code pattern is valid"));

/// A validated unit code such as `FIT1045`.
///
/// The fourth character is the year level digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UnitCode(String);

impl UnitCode {
    /// Parse a unit code, upper-casing the input first
    ///
    /// # Errors
    /// Returns `Invalid(UnitCode)` unless the input is three letters followed by four digits
    pub fn parse(input: &str) -> Result<Self> {
        let code = input.trim().to_ascii_uppercase();
        if UNIT_CODE_PATTERN.is_match(&code) {
            Ok(Self(code))
        } else {
            Err(TrackerError::Invalid(Field::UnitCode))
        }
    }

    /// The code as text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Year level digit (4th character)
    #[must_use]
    pub fn year_level(&self) -> u8 {
        self.0.as_bytes()[3] - b'0'
    }

    /// WAM weighting for this unit: first-year units count half
    #[must_use]
    pub fn credit_weight(&self) -> f64 {
        credit_weight_for_year(self.year_level())
    }
}

/// WAM weighting for a year level
#[must_use]
pub fn credit_weight_for_year(year_level: u8) -> f64 {
    if year_level == 1 {
        0.5
    } else {
        1.0
    }
}

impl fmt::Display for UnitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UnitCode {
    type Error = TrackerError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<UnitCode> for String {
    fn from(code: UnitCode) -> Self {
        code.0
    }
}

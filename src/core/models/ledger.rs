//! Assessment ledger model

use super::assessment::{Assessment, Weight, FULL_WEIGHT};
use crate::core::error::{Field, Result, TrackerError};
use crate::debug;
use serde::{Deserialize, Serialize};

/// Ordered assessments for one in-progress unit.
///
/// Insertion order is significant: assessments are removed by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Assessment>", into = "Vec<Assessment>")]
pub struct AssessmentLedger {
    assessments: Vec<Assessment>,
}

impl AssessmentLedger {
    /// Create an empty ledger
    #[must_use]
    pub const fn new() -> Self {
        Self {
            assessments: Vec::new(),
        }
    }

    /// Append an assessment
    ///
    /// # Errors
    /// Returns `Invalid(AssessmentName)` if the name is already used in this
    /// ledger, or `Invalid(Weight)` if the total weight would exceed 100
    pub fn add(&mut self, assessment: Assessment) -> Result<()> {
        if self.position_of(assessment.name()).is_some() {
            return Err(TrackerError::Invalid(Field::AssessmentName));
        }
        if !self.fits(assessment.weight()) {
            return Err(TrackerError::Invalid(Field::Weight));
        }
        debug!(
            "Adding assessment {} ({}%)",
            assessment.name(),
            assessment.weight()
        );
        self.assessments.push(assessment);
        Ok(())
    }

    /// Remove the assessment at zero-based `position`
    ///
    /// # Errors
    /// Returns `OutOfRange` if no assessment exists at `position`
    pub fn remove(&mut self, position: usize) -> Result<Assessment> {
        if position >= self.assessments.len() {
            return Err(TrackerError::OutOfRange {
                index: position,
                len: self.assessments.len(),
            });
        }
        let assessment = self.assessments.remove(position);
        debug!("Removed assessment {}", assessment.name());
        Ok(assessment)
    }

    /// Whether an extra `weight` stays within the 100% budget
    #[must_use]
    pub fn fits(&self, weight: Weight) -> bool {
        self.total_weight().hundredths() + weight.hundredths() <= FULL_WEIGHT.hundredths()
    }

    /// Position of the assessment called `name`
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.assessments.iter().position(|a| a.name() == name)
    }

    /// Sum of all weights
    #[must_use]
    pub fn total_weight(&self) -> Weight {
        let hundredths = self
            .assessments
            .iter()
            .map(|a| a.weight().hundredths())
            .sum();
        // The budget check in `add` keeps the sum within 100%.
        Weight::from_hundredths(hundredths).unwrap_or(FULL_WEIGHT)
    }

    /// Weight not yet assessed
    #[must_use]
    pub fn remaining_weight(&self) -> Weight {
        Weight::from_hundredths(FULL_WEIGHT.hundredths() - self.total_weight().hundredths())
            .unwrap_or(Weight::ZERO)
    }

    /// Assessments in insertion order
    #[must_use]
    pub fn assessments(&self) -> &[Assessment] {
        &self.assessments
    }

    /// Number of assessments
    #[must_use]
    pub fn len(&self) -> usize {
        self.assessments.len()
    }

    /// Whether no assessments have been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assessments.is_empty()
    }
}

impl TryFrom<Vec<Assessment>> for AssessmentLedger {
    type Error = TrackerError;

    fn try_from(assessments: Vec<Assessment>) -> Result<Self> {
        let mut ledger = Self::new();
        for assessment in assessments {
            ledger.add(assessment)?;
        }
        Ok(ledger)
    }
}

impl From<AssessmentLedger> for Vec<Assessment> {
    fn from(ledger: AssessmentLedger) -> Self {
        ledger.assessments
    }
}

//! In-progress units and their assessment ledgers

use super::{Assessment, AssessmentLedger, Target, UnitCode};
use crate::core::error::{Field, Result, TrackerError};
use crate::core::projector::OverviewRow;
use crate::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Units currently being studied, keyed by unit code.
///
/// Units are listed in code order and removed by code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitRegistry {
    units: BTreeMap<UnitCode, AssessmentLedger>,
}

impl UnitRegistry {
    /// Create an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            units: BTreeMap::new(),
        }
    }

    /// Start tracking `code` with an empty ledger
    ///
    /// # Errors
    /// Returns `Invalid(UnitCode)` if the unit is already tracked
    pub fn add_unit(&mut self, code: UnitCode) -> Result<()> {
        if self.units.contains_key(&code) {
            return Err(TrackerError::Invalid(Field::UnitCode));
        }
        debug!("Tracking unit {code}");
        self.units.insert(code, AssessmentLedger::new());
        Ok(())
    }

    /// Stop tracking `code`, returning its ledger
    ///
    /// # Errors
    /// Returns `UnknownUnit` if the unit is not tracked
    pub fn remove_unit(&mut self, code: &UnitCode) -> Result<AssessmentLedger> {
        let ledger = self
            .units
            .remove(code)
            .ok_or_else(|| TrackerError::UnknownUnit(code.to_string()))?;
        debug!("Stopped tracking {code} ({} assessments)", ledger.len());
        Ok(ledger)
    }

    /// Ledger of `code`
    ///
    /// # Errors
    /// Returns `UnknownUnit` if the unit is not tracked
    pub fn ledger(&self, code: &UnitCode) -> Result<&AssessmentLedger> {
        self.units
            .get(code)
            .ok_or_else(|| TrackerError::UnknownUnit(code.to_string()))
    }

    fn ledger_mut(&mut self, code: &UnitCode) -> Result<&mut AssessmentLedger> {
        self.units
            .get_mut(code)
            .ok_or_else(|| TrackerError::UnknownUnit(code.to_string()))
    }

    /// Append an assessment to the ledger of `code`
    ///
    /// # Errors
    /// Returns `UnknownUnit` for an untracked unit, or the ledger's rejection
    pub fn add_assessment(&mut self, code: &UnitCode, assessment: Assessment) -> Result<()> {
        self.ledger_mut(code)?.add(assessment)
    }

    /// Remove the assessment at zero-based `position` from the ledger of `code`
    ///
    /// # Errors
    /// Returns `UnknownUnit` for an untracked unit, or `OutOfRange`
    pub fn remove_assessment(&mut self, code: &UnitCode, position: usize) -> Result<Assessment> {
        self.ledger_mut(code)?.remove(position)
    }

    /// Whether `code` is tracked
    #[must_use]
    pub fn contains(&self, code: &UnitCode) -> bool {
        self.units.contains_key(code)
    }

    /// Tracked units with their ledgers, in code order
    pub fn iter(&self) -> impl Iterator<Item = (&UnitCode, &AssessmentLedger)> {
        self.units.iter()
    }

    /// Number of tracked units
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether no units are tracked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// One overview row per tracked unit
    #[must_use]
    pub fn overview(&self, target: Target) -> Vec<OverviewRow> {
        self.units
            .iter()
            .map(|(code, ledger)| OverviewRow::new(code, ledger, target))
            .collect()
    }
}

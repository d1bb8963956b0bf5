//! Target projection for in-progress units
//!
//! A projection is computed fresh from a ledger and the student's target on
//! every refresh; nothing is cached.

use super::grade::{grade_for_mark, GradeLetter};
use super::models::{AssessmentLedger, Target, UnitCode, Weight};

/// Display value for projections that have no meaningful number
pub const NO_VALUE: &str = "-";

/// What is still needed on the remaining weight to meet the target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Requirement {
    /// Average percentage required across all remaining weight (0-100)
    Needed(f64),
    /// The target is met even with zero on everything remaining
    Secured,
    /// More than 100% would be needed on the remaining weight
    OutOfReach,
    /// No weight remains; the outcome is already fixed
    NoWeightRemaining,
}

impl Requirement {
    /// Classify a required average
    #[must_use]
    pub fn classify(average_required: Option<f64>) -> Self {
        match average_required {
            None => Self::NoWeightRemaining,
            Some(avg) if avg < 0.0 => Self::Secured,
            Some(avg) if avg > 100.0 => Self::OutOfReach,
            Some(avg) => Self::Needed(avg),
        }
    }

    /// Two-decimal value, or `-` for every state without one
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Needed(avg) => format!("{avg:.2}"),
            Self::Secured | Self::OutOfReach | Self::NoWeightRemaining => NO_VALUE.to_string(),
        }
    }
}

/// Snapshot of one unit's progress against the target
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// Σ weight × (score / max score), in weight units
    pub current_weighted_mark: f64,
    /// Σ weight of entered assessments
    pub total_weight_used: Weight,
    /// Weight still to be assessed
    pub remaining_weight: Weight,
    /// Numeric threshold the target resolves to
    pub target_numeric: u8,
}

impl Projection {
    /// Project `ledger` against `target`
    #[must_use]
    pub fn new(ledger: &AssessmentLedger, target: Target) -> Self {
        let current_weighted_mark = ledger
            .assessments()
            .iter()
            .map(super::models::Assessment::weighted_mark)
            .sum();
        Self {
            current_weighted_mark,
            total_weight_used: ledger.total_weight(),
            remaining_weight: ledger.remaining_weight(),
            target_numeric: target.numeric(),
        }
    }

    /// Mark as if no further weight existed, rounded half to even.
    /// `None` before any weight has been entered.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn overall_mark(&self) -> Option<u8> {
        let used = self.total_weight_used.percent();
        if used <= 0.0 {
            return None;
        }
        let mark = (self.current_weighted_mark * 100.0 / used).round_ties_even();
        Some(mark.clamp(0.0, 100.0) as u8)
    }

    /// Grade band of [`overall_mark`](Self::overall_mark)
    #[must_use]
    pub fn overall_grade(&self) -> Option<GradeLetter> {
        self.overall_mark().map(grade_for_mark)
    }

    /// Average needed on the remaining weight to land exactly on the target.
    /// `None` when no weight remains.
    #[must_use]
    pub fn average_required(&self) -> Option<f64> {
        let remaining = self.remaining_weight.percent();
        (self.remaining_weight > Weight::ZERO).then(|| {
            (f64::from(self.target_numeric) - self.current_weighted_mark) * 100.0 / remaining
        })
    }

    /// Feasibility of the target
    #[must_use]
    pub fn requirement(&self) -> Requirement {
        Requirement::classify(self.average_required())
    }

    /// Overall mark with its grade, e.g. `40 (N)`, or `-`
    #[must_use]
    pub fn overall_display(&self) -> String {
        self.overall_mark().zip(self.overall_grade()).map_or_else(
            || NO_VALUE.to_string(),
            |(mark, grade)| format!("{mark} ({grade})"),
        )
    }

    /// Remaining weight to two decimals
    #[must_use]
    pub fn remaining_display(&self) -> String {
        self.remaining_weight.to_string()
    }
}

/// One overview table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewRow {
    /// Unit code
    pub unit_code: String,
    /// Mark (Grade)
    pub mark: String,
    /// Remaining weight
    pub remaining: String,
    /// Average required
    pub average_required: String,
}

impl OverviewRow {
    /// Build the display row for `code`
    #[must_use]
    pub fn new(code: &UnitCode, ledger: &AssessmentLedger, target: Target) -> Self {
        let projection = Projection::new(ledger, target);
        Self {
            unit_code: code.to_string(),
            mark: projection.overall_display(),
            remaining: projection.remaining_display(),
            average_required: projection.requirement().display(),
        }
    }
}

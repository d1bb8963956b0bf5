//! Student aggregate

use super::{AcademicRecord, GpaPlan, Target, UnitRegistry, WamPlan};
use serde::{Deserialize, Serialize};

/// Everything tracked for one student.
///
/// Deserialization re-validates every nested value, so a loaded `Student`
/// satisfies the same invariants as one built through the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Target grade or mark applied to every in-progress unit
    #[serde(default)]
    pub target: Target,
    /// Completed units
    #[serde(default)]
    pub record: AcademicRecord,
    /// In-progress units and their assessments
    #[serde(default)]
    pub units: UnitRegistry,
    /// Hypothetical units for WAM planning
    #[serde(default)]
    pub wam_plan: WamPlan,
    /// Hypothetical units for GPA planning
    #[serde(default)]
    pub gpa_plan: GpaPlan,
}

impl Student {
    /// Create a student with nothing recorded and the default target
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

//! Data models for grade tracking

pub mod assessment;
pub mod ledger;
pub mod record;
pub mod student;
pub mod target;
pub mod unit_code;
pub mod unit_record;
pub mod units;
pub mod whatif;

pub use assessment::{Assessment, Weight};
pub use ledger::AssessmentLedger;
pub use record::AcademicRecord;
pub use student::Student;
pub use target::Target;
pub use unit_code::UnitCode;
pub use unit_record::UnitRecord;
pub use units::UnitRegistry;
pub use whatif::{GpaEntry, GpaPlan, WamEntry, WamPlan};

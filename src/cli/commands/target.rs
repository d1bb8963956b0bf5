//! Target command handler

use super::CommandResult;
use crate::args::{TargetSubcommand, TargetValue};
use grade_tracker::core::input::parse_target;
use grade_tracker::core::models::Student;
use grade_tracker::info;

/// Dispatch target subcommands
pub fn run(subcommand: Option<TargetSubcommand>, student: &mut Student) -> CommandResult {
    match subcommand {
        None | Some(TargetSubcommand::Show) => {
            println!("{}", student.target);
            Ok(false)
        }
        Some(TargetSubcommand::Set { value }) => {
            let TargetValue { grade, mark } = value;
            let target = match (grade, mark) {
                (_, Some(mark)) => parse_target("mark", &mark)?,
                (Some(grade), None) => parse_target("grade", &grade)?,
                (None, None) => return Err("Provide --grade or --mark".into()),
            };
            student.target = target;
            info!("{target}");
            println!("✓ {target}");
            Ok(true)
        }
    }
}

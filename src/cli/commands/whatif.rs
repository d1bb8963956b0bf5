//! What-if WAM and GPA command handlers

use super::CommandResult;
use crate::args::{GpaSubcommand, WamSubcommand};
use grade_tracker::core::aggregate::{GpaInput, WamInput};
use grade_tracker::core::input::{parse_gpa_row, parse_wam_row};
use grade_tracker::core::models::{GpaPlan, Student, WamPlan};
use grade_tracker::info;

/// Dispatch wam subcommands
pub fn run_wam(subcommand: Option<WamSubcommand>, student: &mut Student) -> CommandResult {
    let changed = match subcommand {
        None | Some(WamSubcommand::List) => false,
        Some(WamSubcommand::Add {
            year_level,
            mark,
            credit_points,
        }) => {
            student
                .wam_plan
                .add(parse_wam_row(&year_level, &mark, &credit_points)?);
            info!("Added hypothetical WAM unit");
            true
        }
        Some(WamSubcommand::Remove) => remove_last(student.wam_plan.remove_last().is_some()),
    };
    print_wam(student);
    Ok(changed)
}

/// Dispatch gpa subcommands
pub fn run_gpa(subcommand: Option<GpaSubcommand>, student: &mut Student) -> CommandResult {
    let changed = match subcommand {
        None | Some(GpaSubcommand::List) => false,
        Some(GpaSubcommand::Add {
            grade,
            credit_points,
        }) => {
            student
                .gpa_plan
                .add(parse_gpa_row(&grade, &credit_points)?);
            info!("Added hypothetical GPA unit");
            true
        }
        Some(GpaSubcommand::Remove) => remove_last(student.gpa_plan.remove_last().is_some()),
    };
    print_gpa(student);
    Ok(changed)
}

fn remove_last(removed: bool) -> bool {
    if removed {
        info!("Removed last hypothetical unit");
    } else {
        println!("No hypothetical units to remove");
    }
    removed
}

fn print_wam(student: &Student) {
    let record = &student.record;
    println!("{:<8}{:<7}{:<6}Credit Points", "Unit #", "Year", "Mark");
    for (unit_no, unit) in record.numbered() {
        println!(
            "{:<8}{:<7}{:<6}{}",
            unit_no,
            unit.code().year_level(),
            unit.mark(),
            unit.credit_points()
        );
    }
    for (unit_no, entry) in student.wam_plan.numbered(record) {
        println!(
            "{:<8}{:<7}{:<6}{}",
            format!("{unit_no}*"),
            entry.year_level(),
            entry.mark(),
            entry.credit_points()
        );
    }
    println!(
        "\nCurrent WAM: {}    Calculated WAM: {}",
        WamPlan::current(record),
        student.wam_plan.calculated(record)
    );
}

fn print_gpa(student: &Student) {
    let record = &student.record;
    println!("{:<8}{:<7}Credit Points", "Unit #", "Grade");
    for (unit_no, unit) in record.numbered() {
        println!("{:<8}{:<7}{}", unit_no, unit.grade(), unit.credit_points());
    }
    for (unit_no, entry) in student.gpa_plan.numbered(record) {
        println!(
            "{:<8}{:<7}{}",
            format!("{unit_no}*"),
            entry.grade(),
            entry.credit_points()
        );
    }
    println!(
        "\nCurrent GPA: {}    Calculated GPA: {}",
        GpaPlan::current(record),
        student.gpa_plan.calculated(record)
    );
}

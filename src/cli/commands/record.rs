//! Record command handler

use super::{numbered_error, CommandResult};
use crate::args::RecordSubcommand;
use grade_tracker::core::input::{parse_record_text, parse_unit_row};
use grade_tracker::core::models::{AcademicRecord, Student};
use grade_tracker::info;
use std::fs;
use std::path::Path;

/// Dispatch record subcommands
pub fn run(subcommand: Option<RecordSubcommand>, student: &mut Student) -> CommandResult {
    match subcommand {
        None | Some(RecordSubcommand::List) => {
            print_record(&student.record);
            Ok(false)
        }
        Some(RecordSubcommand::Add {
            code,
            mark,
            grade,
            credit_points,
        }) => {
            let unit = parse_unit_row(&code, &mark, &grade, &credit_points)?;
            let code = unit.code().clone();
            student.record.add(unit)?;
            info!("Recorded {code}");
            println!("✓ Recorded {code}");
            print_record(&student.record);
            Ok(true)
        }
        Some(RecordSubcommand::Remove { unit_no }) => {
            let position = unit_no.checked_sub(1).ok_or("Unit # starts at 1")?;
            let removed = student
                .record
                .remove(position)
                .map_err(|e| numbered_error("Unit", e))?;
            info!("Removed {} from record", removed.code());
            println!("✓ Removed {}", removed.code());
            print_record(&student.record);
            Ok(true)
        }
        Some(RecordSubcommand::Import { file }) => import(&file, student),
    }
}

fn import(file: &Path, student: &mut Student) -> CommandResult {
    let text = fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {e}", file.display()))?;
    let imported = parse_record_text(&text)?;

    // Validate the whole batch before touching the stored record
    let mut record = student.record.clone();
    for unit in imported.units() {
        record.add(unit.clone())?;
    }
    student.record = record;

    info!("Imported {} units from {}", imported.len(), file.display());
    println!("✓ Imported {} units", imported.len());
    print_record(&student.record);
    Ok(true)
}

/// Print the numbered record followed by WAM and GPA
pub fn print_record(record: &AcademicRecord) {
    println!(
        "{:<8}{:<11}{:<6}{:<7}Credit Points",
        "Unit #", "Unit Code", "Mark", "Grade"
    );
    for (unit_no, unit) in record.numbered() {
        println!(
            "{:<8}{:<11}{:<6}{:<7}{}",
            unit_no,
            unit.code(),
            unit.mark(),
            unit.grade(),
            unit.credit_points()
        );
    }
    println!("\nWAM: {}    GPA: {}", record.wam(), record.gpa());
}

//! Unit command handler

use super::{numbered_error, CommandResult};
use crate::args::UnitSubcommand;
use grade_tracker::core::input::parse_assessment_row;
use grade_tracker::core::models::assessment::percentage;
use grade_tracker::core::models::{Student, UnitCode};
use grade_tracker::core::projector::{Projection, Requirement};
use grade_tracker::{info, verbose};

/// Dispatch unit subcommands
pub fn run(subcommand: Option<UnitSubcommand>, student: &mut Student) -> CommandResult {
    match subcommand {
        None | Some(UnitSubcommand::List) => {
            print_overview(student);
            Ok(false)
        }
        Some(UnitSubcommand::Add { code }) => {
            let code = UnitCode::parse(&code)?;
            student.units.add_unit(code.clone())?;
            info!("Tracking {code}");
            println!("✓ Tracking {code}");
            Ok(true)
        }
        Some(UnitSubcommand::Remove { code }) => {
            let code = UnitCode::parse(&code)?;
            student.units.remove_unit(&code)?;
            info!("Stopped tracking {code}");
            println!("✓ Removed {code}");
            Ok(true)
        }
        Some(UnitSubcommand::Assessments { code }) => {
            print_assessments(student, &UnitCode::parse(&code)?)?;
            Ok(false)
        }
        Some(UnitSubcommand::Assess {
            code,
            name,
            weight,
            score,
            max_score,
        }) => {
            let code = UnitCode::parse(&code)?;
            let ledger = student.units.ledger(&code)?;
            let assessment = parse_assessment_row(&name, &weight, &score, &max_score, ledger)?;
            student.units.add_assessment(&code, assessment)?;
            info!("Added assessment '{name}' to {code}");
            print_assessments(student, &code)?;
            Ok(true)
        }
        Some(UnitSubcommand::Unassess { code, index }) => {
            let code = UnitCode::parse(&code)?;
            let position = index.checked_sub(1).ok_or("Assessment # starts at 1")?;
            let removed = student
                .units
                .remove_assessment(&code, position)
                .map_err(|e| numbered_error("Assessment", e))?;
            info!("Removed assessment '{}' from {code}", removed.name());
            print_assessments(student, &code)?;
            Ok(true)
        }
    }
}

fn print_overview(student: &Student) {
    println!("{}\n", student.target);
    println!(
        "{:<11}{:<14}{:<11}Average Required",
        "Unit Code", "Mark (Grade)", "Remaining"
    );
    for row in student.units.overview(student.target) {
        println!(
            "{:<11}{:<14}{:<11}{}",
            row.unit_code, row.mark, row.remaining, row.average_required
        );
    }
}

fn print_assessments(student: &Student, code: &UnitCode) -> Result<(), Box<dyn std::error::Error>> {
    let ledger = student.units.ledger(code)?;
    println!("{code}\n");
    println!(
        "{:<4}{:<17}{:<9}{:<10}{:<8}Percentage",
        "#", "Assessment", "Weight", "Obtained", "Total"
    );
    for (idx, assessment) in ledger.assessments().iter().enumerate() {
        println!(
            "{:<4}{:<17}{:<9}{:<10}{:<8}{}",
            idx + 1,
            assessment.name(),
            assessment.weight().to_string(),
            assessment.score(),
            assessment.max_score(),
            percentage(assessment)
        );
    }

    let projection = Projection::new(ledger, student.target);
    println!("\nMark (Grade): {}", projection.overall_display());
    println!("Remaining: {}", projection.remaining_display());
    let requirement = projection.requirement();
    println!("Average Required: {}", requirement.display());
    match requirement {
        Requirement::Secured => verbose!("Target is met whatever the remaining results"),
        Requirement::OutOfReach => verbose!("Target needs more than 100% on the remaining weight"),
        Requirement::Needed(_) | Requirement::NoWeightRemaining => {}
    }
    Ok(())
}

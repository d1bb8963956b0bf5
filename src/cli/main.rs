//! Command-line interface entry point for `gradetracker`

mod args;
mod commands;
mod store;

use args::{Cli, Command};
use clap::Parser;
use commands::CommandResult;
use grade_tracker::config::Config;
use grade_tracker::core::models::Student;
use grade_tracker::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use grade_tracker::{error, info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }
    set_level(level);

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }

    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));
    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        start_file_logging(log_path, verbose);
    }

    match run(args.command, &mut config, &defaults) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("✗ {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    command: Command,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Config { subcommand } => commands::config::run(subcommand, config, defaults),
        Command::Record { subcommand } => {
            with_student(config, |student| commands::record::run(subcommand, student))
        }
        Command::Unit { subcommand } => {
            with_student(config, |student| commands::unit::run(subcommand, student))
        }
        Command::Target { subcommand } => {
            with_student(config, |student| commands::target::run(subcommand, student))
        }
        Command::Wam { subcommand } => {
            with_student(config, |student| commands::whatif::run_wam(subcommand, student))
        }
        Command::Gpa { subcommand } => {
            with_student(config, |student| commands::whatif::run_gpa(subcommand, student))
        }
    }
}

/// Load the student, run `action`, and save if it changed anything
fn with_student(
    config: &Config,
    action: impl FnOnce(&mut Student) -> CommandResult,
) -> Result<(), Box<dyn std::error::Error>> {
    let student_file = config.student_file_path();
    let mut student = store::load(&student_file)?;

    if action(&mut student)? {
        store::save(&student_file, &student)
            .map_err(|e| format!("Failed to save {}: {e}", student_file.display()))?;
        info!("Student data written to {}", student_file.display());
    }
    Ok(())
}

fn start_file_logging(log_path: &std::path::Path, verbose: bool) {
    if let Some(parent) = log_path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            warn!("Could not create log directory {}", parent.display());
        }
    }
    let display_path = log_path.to_string_lossy();
    if init_file_logging(log_path) {
        if verbose {
            eprintln!("✓ File logging initialized at: {display_path}");
        } else {
            info!("File logging initialized at: {display_path}");
        }
    } else {
        eprintln!("✗ Failed to initialize file logging at: {display_path}");
    }
}

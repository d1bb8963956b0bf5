//! CLI argument definitions for `gradetracker`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use grade_tracker::config::ConfigOverrides;
use grade_tracker::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for
/// runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key to display (`level`, `file`, `verbose`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum RecordSubcommand {
    /// Show completed units with the current WAM and GPA.
    List,
    /// Record a completed unit.
    Add {
        /// Unit code, e.g. FIT1045
        code: String,
        /// Final mark (0-100)
        mark: String,
        /// Grade awarded (WN, N, P, C, D, HD)
        grade: String,
        /// Credit points (1-24)
        credit_points: String,
    },
    /// Remove a completed unit by its Unit # as shown by `record list`.
    Remove {
        /// Unit # (1-based)
        #[arg(value_name = "UNIT_NO")]
        unit_no: usize,
    },
    /// Import units from a whitespace-separated record file.
    Import {
        /// File with one `CODE MARK GRADE CP` row per line
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum UnitSubcommand {
    /// Show every in-progress unit against the target.
    List,
    /// Start tracking an in-progress unit.
    Add {
        /// Unit code, e.g. FIT2004
        code: String,
    },
    /// Stop tracking an in-progress unit and discard its assessments.
    Remove {
        /// Unit code
        code: String,
    },
    /// Show the assessments entered for a unit.
    Assessments {
        /// Unit code
        code: String,
    },
    /// Enter an assessment result for a unit.
    Assess {
        /// Unit code
        code: String,
        /// Assessment name (1-15 characters)
        name: String,
        /// Weight toward the unit mark (0-100, two decimals)
        weight: String,
        /// Marks obtained
        score: String,
        /// Marks available
        max_score: String,
    },
    /// Remove an assessment by its # as shown by `unit assessments`.
    Unassess {
        /// Unit code
        code: String,
        /// Assessment # (1-based)
        #[arg(value_name = "INDEX")]
        index: usize,
    },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct TargetValue {
    /// Target grade (N, P, C, D, HD)
    #[arg(long, value_name = "GRADE")]
    pub grade: Option<String>,
    /// Target mark (0-100)
    #[arg(long, value_name = "MARK")]
    pub mark: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum TargetSubcommand {
    /// Show the current target.
    Show,
    /// Set the target grade or mark.
    Set {
        #[command(flatten)]
        value: TargetValue,
    },
}

#[derive(Debug, Subcommand)]
pub enum WamSubcommand {
    /// Show the record plus hypothetical units with current and calculated WAM.
    List,
    /// Add a hypothetical unit.
    Add {
        /// Year level (1-9)
        year_level: String,
        /// Mark (0-100)
        mark: String,
        /// Credit points (1-24)
        credit_points: String,
    },
    /// Remove the most recently added hypothetical unit.
    Remove,
}

#[derive(Debug, Subcommand)]
pub enum GpaSubcommand {
    /// Show the record plus hypothetical units with current and calculated GPA.
    List,
    /// Add a hypothetical unit.
    Add {
        /// Grade (WN, N, P, C, D, HD)
        grade: String,
        /// Credit points (1-24)
        credit_points: String,
    },
    /// Remove the most recently added hypothetical unit.
    Remove,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage the academic record of completed units.
    Record {
        #[command(subcommand)]
        subcommand: Option<RecordSubcommand>,
    },
    /// Manage in-progress units and their assessments.
    Unit {
        #[command(subcommand)]
        subcommand: Option<UnitSubcommand>,
    },
    /// Show or change the target grade or mark.
    Target {
        #[command(subcommand)]
        subcommand: Option<TargetSubcommand>,
    },
    /// What-if WAM planning with hypothetical units.
    Wam {
        #[command(subcommand)]
        subcommand: Option<WamSubcommand>,
    },
    /// What-if GPA planning with hypothetical units.
    Gpa {
        #[command(subcommand)]
        subcommand: Option<GpaSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gradetracker",
    about = "Track WAM, GPA and target marks for your units",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config data directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config data directory (short form)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `--data-dir` takes precedence over `--config-data-dir` when both are
    /// provided. `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .or(self.config_data_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

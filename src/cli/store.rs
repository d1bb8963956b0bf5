//! Student data file handling

use grade_tracker::core::models::Student;
use grade_tracker::{debug, info};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Load the student stored at `path`, or a fresh student if no file exists yet
///
/// # Errors
/// Returns an error if the file cannot be read, or if it fails validation
/// (for example a stored grade outside the scale)
pub fn load(path: &Path) -> Result<Student, Box<dyn Error>> {
    if !path.exists() {
        info!("No student data at {}, starting fresh", path.display());
        return Ok(Student::new());
    }
    let content = fs::read_to_string(path)?;
    let student: Student = toml::from_str(&content)
        .map_err(|e| format!("{} is corrupted: {}", path.display(), e.message()))?;
    debug!(
        "Loaded {} recorded units and {} in-progress units",
        student.record.len(),
        student.units.len()
    );
    Ok(student)
}

/// Write `student` to `path`, creating the data directory if needed
///
/// # Errors
/// Returns an error if the directory cannot be created or the file cannot be written
pub fn save(path: &Path, student: &Student) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(student)?;
    fs::write(path, toml_str)?;
    debug!("Saved student data to {}", path.display());
    Ok(())
}

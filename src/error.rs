//! Error types shared by the library and the CLI.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// `humanage.toml` could not be read or parsed
    #[error("Config error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// A patient dataset file could not be read or parsed
    #[error("Dataset error in {}: {message}", .path.display())]
    Dataset { path: PathBuf, message: String },

    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    #[error("Habit slot {0} does not exist")]
    InvalidHabitSlot(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

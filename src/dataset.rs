//! Read-only patient data behind a lookup capability.
//!
//! Rendering code only sees [`PatientRepository`], so the built-in example
//! records can be swapped for a JSON file without touching anything else.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::patient::{Gender, Patient};

pub trait PatientRepository: Sync {
    fn patients(&self) -> &[Patient];

    /// Exact match on an already decoded name.
    fn find_by_name(&self, name: &str) -> Option<&Patient> {
        self.patients().iter().find(|p| p.name == name)
    }

    /// Case-insensitive substring search. A blank query matches nothing.
    fn search(&self, query: &str) -> Vec<&Patient> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return vec![];
        }
        self.patients()
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&q))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    patients: Vec<Patient>,
}

impl InMemoryRepository {
    pub fn new(patients: Vec<Patient>) -> Self {
        InMemoryRepository { patients }
    }

    pub fn example() -> Self {
        InMemoryRepository::new(vec![
            Patient {
                name: "Ava Martinez".to_string(),
                image: "/ava-martinez.jpg".to_string(),
                biological_age: 29,
                chronological_age: 35,
                bmi: 22.5,
                gender: Gender::Female,
            },
            Patient {
                name: "Marcus Lee".to_string(),
                image: "/marcus-lee.jpg".to_string(),
                biological_age: 36,
                chronological_age: 40,
                bmi: 27.8,
                gender: Gender::Male,
            },
            Patient {
                name: "Jordan Patel".to_string(),
                image: "/jordan-patel.jpg".to_string(),
                biological_age: 31,
                chronological_age: 31,
                bmi: 24.1,
                gender: Gender::NonBinary,
            },
        ])
    }

    /// Load a JSON array of patients.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::Dataset {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let patients: Vec<Patient> =
            serde_json::from_str(&contents).map_err(|e| Error::Dataset {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        debug!(path = %path.display(), count = patients.len(), "loaded patient dataset");
        Ok(InMemoryRepository::new(patients))
    }
}

impl PatientRepository for InMemoryRepository {
    fn patients(&self) -> &[Patient] {
        &self.patients
    }
}

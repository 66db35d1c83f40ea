use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    /// URL or local path of the avatar
    pub image: String,
    pub biological_age: u32,
    pub chronological_age: u32,
    pub bmi: f64,
    pub gender: Gender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::NonBinary => write!(f, "non-binary"),
            Gender::Other => write!(f, "other"),
        }
    }
}

impl Patient {
    /// Biological over chronological age; `None` without a chronological age.
    pub fn pace_of_aging(&self) -> Option<f64> {
        if self.chronological_age == 0 {
            return None;
        }
        Some(self.biological_age as f64 / self.chronological_age as f64)
    }

    pub fn pace_of_aging_display(&self) -> String {
        match self.pace_of_aging() {
            Some(pace) => format!("{pace:.1}"),
            None => "—".to_string(),
        }
    }

    /// Years the biological age sits below (positive) or above (negative)
    /// the chronological age.
    pub fn age_gap(&self) -> i64 {
        self.chronological_age as i64 - self.biological_age as i64
    }

    pub fn bmi_display(&self) -> String {
        format!("{:.1}", self.bmi)
    }

    /// Avatar fallback: first letters of the first two words.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

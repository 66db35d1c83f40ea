use serde::{Deserialize, Serialize};

use crate::ring::{Mode, DEFAULT_EXTRA_MAX};

/// Input record for one health category ring.
///
/// `label` is shown verbatim and may contain `\n` to break the caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub key: String,
    pub label: String,
    pub base_value: f64,
    #[serde(default)]
    pub intensity: Option<f64>,
    #[serde(default = "default_extra_max")]
    pub extra_max: f64,
}

fn default_extra_max() -> f64 {
    DEFAULT_EXTRA_MAX
}

impl CategoryScore {
    pub fn new(key: &str, label: &str, base_value: f64) -> Self {
        CategoryScore {
            key: key.to_string(),
            label: label.to_string(),
            base_value,
            intensity: None,
            extra_max: DEFAULT_EXTRA_MAX,
        }
    }

    /// Same category projected at `intensity`.
    pub fn with_intensity(&self, intensity: f64) -> Self {
        CategoryScore {
            intensity: Some(intensity),
            ..self.clone()
        }
    }

    /// Same category without any projection.
    pub fn current(&self) -> Self {
        CategoryScore {
            intensity: None,
            ..self.clone()
        }
    }

    pub fn mode(&self) -> Mode {
        if self.intensity.is_some() {
            Mode::Improvement
        } else {
            Mode::Single
        }
    }
}

/// The five categories of the test evaluation screen.
pub fn default_categories() -> Vec<CategoryScore> {
    vec![
        CategoryScore::new("anthropometry", "Körperliche\nGrunddaten", 30.0),
        CategoryScore::new("activity", "Bewegung & Aktivität", 50.0),
        CategoryScore::new(
            "cardio-metabolic",
            "Herz- Kreislauf &\nStoffwechselrisiken",
            34.0,
        ),
        CategoryScore::new("lifestyle", "Lifestyle-Risiken", 71.0),
        CategoryScore::new("nutrition", "Ernährung", 85.0),
    ]
}

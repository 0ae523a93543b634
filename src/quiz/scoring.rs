use serde::{Deserialize, Serialize};

use crate::quiz::{ResponseValue, QUESTION_COUNT};

pub const LOW_MAX: u32 = 21;
pub const MODERATE_MAX: u32 = 35;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Low,
    Moderate,
    Severe,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Low => "Ansiedad muy baja",
            Category::Moderate => "Ansiedad moderada",
            Category::Severe => "Ansiedad severa",
        }
    }

    /// Recommendation addressed to `name`.
    pub fn message(self, name: &str) -> String {
        match self {
            Category::Low => format!(
                "{}, tu nivel de ansiedad es muy bajo. ¡Sigue cuidándote!",
                name
            ),
            Category::Moderate => format!(
                "{}, tu nivel de ansiedad es moderado. Es recomendable que hables con un profesional de la salud mental.",
                name
            ),
            Category::Severe => format!(
                "{}, tu nivel de ansiedad es severo. Es muy importante que busques ayuda profesional de inmediato.",
                name
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreResult {
    pub total: u32,
    pub category: Category,
    pub label: String,
    pub message: String,
}

impl ScoreResult {
    pub fn new(total: u32, name: &str) -> Self {
        let category = classify(total);
        Self {
            total,
            category,
            label: category.label().to_string(),
            message: category.message(name),
        }
    }
}

pub fn score(responses: &[ResponseValue; QUESTION_COUNT]) -> u32 {
    responses.iter().map(|r| u32::from(r.value())).sum()
}

pub fn classify(total: u32) -> Category {
    match total {
        t if t <= LOW_MAX => Category::Low,
        t if t <= MODERATE_MAX => Category::Moderate,
        _ => Category::Severe,
    }
}

pub fn validate_name(name: &str) -> bool {
    !name.trim().is_empty()
}

use log::{debug, warn};

use crate::error::QuizError;
use crate::quiz::scoring::{self, ScoreResult};
use crate::quiz::{Respondent, ResponseValue, QUESTION_COUNT};

/// Everything typed by one respondent while the questionnaire is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub respondent: Respondent,
    responses: [ResponseValue; QUESTION_COUNT],
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the name without surrounding whitespace, so the recommendation
    /// reads "Ana, ..." for an input of "  Ana  ".
    pub fn set_name(&mut self, name: &str) {
        self.respondent.name = name.trim().to_string();
    }

    pub fn set_age(&mut self, age: &str) {
        self.respondent.age = age.to_string();
    }

    /// Records the answer for the 1-based `question` index.
    pub fn answer(&mut self, question: usize, value: ResponseValue) -> Result<(), QuizError> {
        let slot = question
            .checked_sub(1)
            .and_then(|i| self.responses.get_mut(i))
            .ok_or(QuizError::UnknownQuestion(question))?;
        debug!("question {} answered with {}", question, value.value());
        *slot = value;
        Ok(())
    }

    pub fn response(&self, question: usize) -> Option<ResponseValue> {
        self.responses.get(question.checked_sub(1)?).copied()
    }

    pub fn responses(&self) -> &[ResponseValue; QUESTION_COUNT] {
        &self.responses
    }

    pub fn evaluate(&self) -> Result<ScoreResult, QuizError> {
        if !scoring::validate_name(&self.respondent.name) {
            warn!("scoring requested without a name");
            return Err(QuizError::EmptyName);
        }
        let total = scoring::score(&self.responses);
        Ok(ScoreResult::new(total, &self.respondent.name))
    }
}

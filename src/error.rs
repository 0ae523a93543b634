use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("El nombre no puede estar vacío.")]
    EmptyName,
    #[error("response value {0} is outside 0..=3")]
    ResponseOutOfRange(u8),
    #[error("question {0} is not part of the questionnaire")]
    UnknownQuestion(usize),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("QUESTIONNAIRE_OUTPUT must be `text` or `json`, got `{0}`")]
    InvalidOutputFormat(String),
}

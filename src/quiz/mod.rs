pub mod catalog;
pub mod scoring;
pub mod session;

use crate::error::QuizError;

pub const QUESTION_COUNT: usize = 21;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub index: usize,
    pub text: String,
}
impl Question {
    pub fn new(index: usize, text: String) -> Self {
        Self { index, text }
    }
}

/// Severity picked for one question, stored as 0..=3 and shown to the
/// respondent as 1..=4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResponseValue(u8);

impl ResponseValue {
    pub const MAX: u8 = 3;

    pub const NONE: ResponseValue = ResponseValue(0);
    pub const MILD: ResponseValue = ResponseValue(1);
    pub const MODERATE: ResponseValue = ResponseValue(2);
    pub const SEVERE: ResponseValue = ResponseValue(3);

    pub fn new(value: u8) -> Result<Self, QuizError> {
        if value > Self::MAX {
            return Err(QuizError::ResponseOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Parses the 1..=4 option typed by the respondent.
    pub fn from_option(option: &str) -> Option<Self> {
        let option: u8 = option.trim().parse().ok()?;
        option.checked_sub(1).and_then(|v| Self::new(v).ok())
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn option(self) -> u8 {
        self.0 + 1
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "No",
            1 => "Leve",
            2 => "Moderado",
            _ => "Bastante",
        }
    }

    pub fn all() -> [ResponseValue; 4] {
        [Self::NONE, Self::MILD, Self::MODERATE, Self::SEVERE]
    }
}

impl TryFrom<u8> for ResponseValue {
    type Error = QuizError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResponseValue> for u8 {
    fn from(value: ResponseValue) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Respondent {
    pub name: String,
    pub age: String,
}
impl Respondent {
    pub fn new(name: String, age: String) -> Self {
        Self { name, age }
    }
}

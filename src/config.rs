use std::env;

use crate::error::ConfigError;

pub const OUTPUT_VAR: &str = "QUESTIONNAIRE_OUTPUT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_lowercase().as_str() {
            "" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub output: OutputFormat,
}

impl Config {
    /// Reads the process environment; `.env` has to be loaded beforehand.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let output = match lookup(OUTPUT_VAR) {
            Some(raw) => OutputFormat::parse(&raw)?,
            None => OutputFormat::default(),
        };
        Ok(Self { output })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_the_default() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn json_output_is_case_insensitive() {
        let config = Config::from_lookup(|_| Some(" JSON ".to_string())).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = Config::from_lookup(|_| Some("xml".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOutputFormat(ref v) if v == "xml"));
    }
}

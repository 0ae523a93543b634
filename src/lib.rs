pub mod config;
pub mod dialogue;
pub mod error;
pub mod quiz;

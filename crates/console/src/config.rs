//! # Console Configuration
//!
//! Settings are read from environment variables (a `.env` file is loaded by
//! the binary first):
//!
//! - `LOG_LEVEL`: trace, debug, info, warn or error (default: info)
//! - `LESSONBOOK_STUDENT_ID`: id of the session's current student
//! - `LESSONBOOK_STUDENT_NAME`: display name of the session's current student
//! - `LESSONBOOK_ID_STRATEGY`: `uuid` (default) or `sequential`
//! - `LESSONBOOK_PROMPT`: prompt printed before each command (default: "> ")

use std::env;
use std::str::FromStr;

use eyre::{Result, eyre};
use lessonbook_core::ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
use tracing::Level;

/// How new enrollment ids are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    #[default]
    Uuid,
    Sequential,
}

impl IdStrategy {
    pub fn generator(&self) -> Box<dyn IdGenerator> {
        match self {
            Self::Uuid => Box::new(UuidIdGenerator),
            Self::Sequential => Box::new(SequentialIdGenerator::new()),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(Self::Uuid),
            "sequential" => Ok(Self::Sequential),
            other => Err(eyre!(
                "LESSONBOOK_ID_STRATEGY must be 'uuid' or 'sequential', got '{}'",
                other
            )),
        }
    }
}

/// Configuration for one console session.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Log level for the application
    pub log_level: Level,
    /// Overrides the seeded current student's id
    pub student_id: Option<String>,
    /// Overrides the seeded current student's name
    pub student_name: Option<String>,
    pub id_strategy: IdStrategy,
    /// Prompt (defaults to "> ")
    pub prompt: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            student_id: None,
            student_name: None,
            id_strategy: IdStrategy::default(),
            prompt: None,
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Fails when `LESSONBOOK_ID_STRATEGY` holds an unknown strategy.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_level = match lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let id_strategy = match lookup("LESSONBOOK_ID_STRATEGY") {
            Some(value) => value.parse::<IdStrategy>()?,
            None => IdStrategy::default(),
        };

        Ok(Self {
            log_level,
            student_id: non_empty("LESSONBOOK_STUDENT_ID"),
            student_name: non_empty("LESSONBOOK_STUDENT_NAME"),
            id_strategy,
            prompt: lookup("LESSONBOOK_PROMPT"),
        })
    }

    /// Get the prompt (defaults to "> " if not set)
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or("> ")
    }
}

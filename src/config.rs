//! Runtime configuration.
//!
//! Resolved once at startup from environment values and then passed into command handlers,
//! so nothing reads process-wide environment variables while a command runs.

/// Environment variable holding the default number of UUIDs for `generate`.
pub const DEFAULT_COUNT_VAR: &str = "UUIDV4_DEFAULT_COUNT";

/// Environment variable selecting uppercase output.
pub const UPPERCASE_VAR: &str = "UUIDV4_UPPERCASE";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidCount { var: &'static str, value: String },
    #[error("{var} must be one of true/false/1/0/yes/no, got '{value}'")]
    InvalidFlag { var: &'static str, value: String },
}

/// Configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    default_count: usize,
    uppercase: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            default_count: 1,
            uppercase: false,
        }
    }
}

impl RunConfig {
    /// Builds a config from raw environment values without touching the environment itself.
    ///
    /// `None`, empty and whitespace-only values fall back to the defaults.
    pub fn from_env_values(
        default_count: Option<String>,
        uppercase: Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let default_count = match non_blank(default_count) {
            Some(value) => parse_count(&value)?,
            None => defaults.default_count,
        };
        let uppercase = match non_blank(uppercase) {
            Some(value) => parse_flag(&value)?,
            None => defaults.uppercase,
        };

        Ok(Self {
            default_count,
            uppercase,
        })
    }

    /// Reads [`DEFAULT_COUNT_VAR`] and [`UPPERCASE_VAR`] from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_values(
            std::env::var(DEFAULT_COUNT_VAR).ok(),
            std::env::var(UPPERCASE_VAR).ok(),
        )
    }

    pub fn default_count(&self) -> usize {
        self.default_count
    }

    pub fn uppercase(&self) -> bool {
        self.uppercase
    }

    /// Applies the configured letter case to a canonical string.
    ///
    /// Uppercase output still validates: position 14 is a digit and the variant position
    /// accepts `A` and `B`.
    pub fn render(&self, canonical: String) -> String {
        if self.uppercase {
            canonical.to_ascii_uppercase()
        } else {
            canonical
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_count(value: &str) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(ConfigError::InvalidCount {
            var: DEFAULT_COUNT_VAR,
            value: value.to_string(),
        }),
    }
}

fn parse_flag(value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var: UPPERCASE_VAR,
            value: value.to_string(),
        }),
    }
}

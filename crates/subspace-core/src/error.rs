//! Error types for subspace-core
//!
//! The navbar itself never fails; these cover site configuration and the
//! email input on the auth view.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for subspace operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ===================
    // Config Errors
    // ===================
    #[error("Failed to parse config in {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        message: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    // ===================
    // Session Errors
    // ===================
    #[error("Invalid email address: {email:?}")]
    InvalidEmail { email: String },
}

impl CoreError {
    /// Actionable hint for the CLI, when one exists
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CoreError::FileRead { path, .. } => {
                Some(format!("Check the file exists and is readable: ls -l {}", path.display()))
            }
            CoreError::ConfigParse { .. } => {
                Some("Config is TOML: brand = \"...\", nav_labels = [\"...\"]".to_string())
            }
            CoreError::InvalidConfig { .. } => {
                Some("Run 'subspace check' after editing the config".to_string())
            }
            CoreError::InvalidEmail { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_email_message_quotes_input() {
        let err = CoreError::InvalidEmail {
            email: "nobody".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid email address: \"nobody\"");
        assert!(err.suggestion().is_none());
    }

    #[test]
    fn test_config_errors_carry_suggestions() {
        let err = CoreError::InvalidConfig {
            message: "brand must not be empty".to_string(),
        };
        assert!(err.to_string().contains("brand must not be empty"));
        assert!(err.suggestion().is_some());
    }
}

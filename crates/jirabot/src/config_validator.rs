//! Validation utilities.

use std::fmt::Write;

use jirabot_config::Config;
use thiserror::Error;

const MIN_DESCRIPTION_MAX_LENGTH: usize = 4;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, reason: &str) {
        error.push('\n');
        let _ = write!(error, "  - Invalid env. var.: {} ({})", name, reason);
    }

    let mut error = String::new();

    // Room for at least one char and the ellipsis
    if config.render.description_max_length < MIN_DESCRIPTION_MAX_LENGTH {
        _invalid(
            &mut error,
            "JIRABOT_DESCRIPTION_MAX_LENGTH",
            "expected an integer of at least 4",
        );
    }

    if config.render.fallback_icon_url.trim().is_empty() {
        _missing(&mut error, "JIRABOT_FALLBACK_ICON_URL");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}

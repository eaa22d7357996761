// Common error types for ERTH

use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ErthError {
    IoError(std::io::Error),
    ConfigError(String),
    NetworkError(String),
    ScrapeError(String),
    ValidationError(String),
    ServerError(String),
    SerializationError(String),
}

impl fmt::Display for ErthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErthError::IoError(err) => write!(f, "IO error: {}", err),
            ErthError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ErthError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ErthError::ScrapeError(msg) => write!(f, "Scrape error: {}", msg),
            ErthError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ErthError::ServerError(msg) => write!(f, "Server error: {}", msg),
            ErthError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl Error for ErthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ErthError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ErthError {
    fn from(err: std::io::Error) -> Self {
        ErthError::IoError(err)
    }
}

pub type Result<T> = std::result::Result<T, ErthError>;

/// User-facing presentation of an [`ErthError`] at the CLI boundary
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    /// Translate an internal error into a printable message, a hint and
    /// a process exit code.
    pub fn from_erth_error(err: &ErthError) -> Self {
        let message = err.to_string();
        let (hint, exit_code) = match err {
            ErthError::ConfigError(_) => (
                Some("Check the configuration file syntax (erth.toml).".to_string()),
                2,
            ),
            ErthError::ValidationError(_) => (
                Some("Run 'erth --help' for the accepted flag values.".to_string()),
                2,
            ),
            ErthError::NetworkError(_) => (
                Some("Is the town-hall page reachable from this machine?".to_string()),
                1,
            ),
            ErthError::ScrapeError(_) => (
                Some("The waiting-time page layout may have changed.".to_string()),
                1,
            ),
            _ => (None, 1),
        };

        UserError {
            message,
            hint,
            exit_code,
        }
    }

    /// Print the error to stderr
    pub fn print(&self) {
        eprintln!("error: {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!("hint: {}", hint);
        }
    }
}

use thiserror::Error;

/// Failures at the storage and presentation boundaries of the theme store.
///
/// None of these reach consumers of `ThemeStore`: read failures and invalid
/// values fall back to the default theme, write failures are logged and
/// ignored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("persisted storage unavailable: {0}")]
    PersistenceUnavailable(String),
    #[error("invalid persisted theme value: {0:?}")]
    InvalidPersistedValue(String),
    #[error("presentation attribute error: {0}")]
    Presentation(String),
}

impl From<std::io::Error> for ThemeError {
    fn from(error: std::io::Error) -> Self {
        ThemeError::PersistenceUnavailable(error.to_string())
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(error: serde_json::Error) -> Self {
        ThemeError::PersistenceUnavailable(format!("malformed preferences: {}", error))
    }
}

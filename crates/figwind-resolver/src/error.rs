//! Theme loading errors.

use thiserror::Error;

/// Errors while loading a theme or building its keyword tables.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Theme value {scale}.{keyword} must be a string or a number")]
    NonScalar { scale: &'static str, keyword: String },

    #[error("Font size {keyword} has no size value")]
    EmptyFontSize { keyword: String },
}

pub type Result<T> = std::result::Result<T, ThemeError>;

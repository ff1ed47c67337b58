//! Error types for markup generation.

use figwind_core::HostError;
use figwind_resolver::ThemeError;
use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during markup generation.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Exported vector graphic could not be parsed.
    #[error("Invalid SVG at byte {offset}: {message}")]
    Svg { offset: usize, message: String },

    /// Exported vector graphic is not UTF-8 text.
    #[error("SVG export is not valid UTF-8: {0}")]
    SvgEncoding(#[from] std::str::Utf8Error),

    /// Options JSON could not be read.
    #[error("Invalid options: {0}")]
    Options(#[source] serde_json::Error),

    /// Snapshot JSON could not be read.
    #[error("Invalid snapshot: {0}")]
    Snapshot(#[source] serde_json::Error),

    /// Snapshot image bytes are not valid base64.
    #[error("Invalid base64 data for image {image_ref}: {source}")]
    ImageData {
        image_ref: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Host(#[from] HostError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

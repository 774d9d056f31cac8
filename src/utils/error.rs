//! Error handling for Snapgrab

use thiserror::Error;

/// Main error type for Snapgrab
///
/// Every variant is terminal for the current input: the user edits the
/// URL or resets to try again, and the process keeps running.
#[derive(Debug, Error)]
pub enum SnapgrabError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("unsupported platform for URL: {0}")]
    UnsupportedPlatform(String),

    #[error("extraction failed")]
    ExtractionFailed,
}

//! Download handoff
//!
//! The core never downloads anything itself: it prepares a target URL and
//! a suggested filename, and the GUI hands both to the host environment
//! (the system browser). With the simulated backend the target is simply
//! the original post URL.

use crate::extractor::MediaDescriptor;
use crate::platform::Platform;
use chrono::{DateTime, Utc};

/// Arguments for the host environment's download/navigation facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub target_url: String,
    pub filename: String,
}

/// Build the handoff arguments for a fetched piece of media.
///
/// The filename is `<PlatformName>_<timestampMillis>.<ext>`, with
/// filesystem-hostile characters replaced.
pub fn download_request(
    media: &MediaDescriptor,
    platform: Platform,
    at: DateTime<Utc>,
) -> DownloadRequest {
    let filename = format!(
        "{}_{}.{}",
        sanitize_filename(platform.name()),
        at.timestamp_millis(),
        media.kind.extension()
    );

    DownloadRequest {
        target_url: media.source_url.clone(),
        filename,
    }
}

/// Sanitize filename for filesystem
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}

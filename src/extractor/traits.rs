use crate::extractor::models::MediaDescriptor;
use crate::platform::Platform;
use anyhow::Result;
use async_trait::async_trait;

/// Core trait for all media extractors
///
/// This trait isolates the session orchestrator from the specific
/// extraction strategy. The bundled [`MockExtractor`] simulates a
/// backend; a real extraction service implements the same contract and
/// drops in without touching the orchestrator.
///
/// [`MockExtractor`]: crate::extractor::MockExtractor
#[async_trait]
pub trait MediaExtractor: Send + Sync {
    /// Returns a unique identifier for this extractor (e.g., "simulated")
    fn id(&self) -> &'static str;

    /// Checks if this extractor can handle the given platform
    fn supports(&self, platform: Platform) -> bool;

    /// Resolves a URL into a media descriptor, or fails.
    ///
    /// Must be non-blocking: callers stay responsive while the extraction
    /// (or its simulated delay) is in flight.
    async fn extract(&self, url: &str, platform: Platform) -> Result<MediaDescriptor>;
}

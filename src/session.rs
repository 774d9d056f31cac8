//! Session orchestration
//!
//! One [`Session`] owns the whole mutable record for a user's
//! interaction: the raw input, its validity, the detected platform, and
//! the fetch outcome. All writes go through three entry points
//! ([`Session::set_input`], [`Session::resolve_fetch`] and
//! [`Session::reset`]), so nothing else can race the record.
//!
//! Every input change re-runs the derived pipeline (validate, classify,
//! maybe fetch) from scratch. Fetches are tagged with a monotonically
//! increasing token; a result is applied only if its token still matches
//! the in-flight one, so a fetch that was superseded mid-flight can never
//! clobber state belonging to a newer request.

use crate::extractor::MediaDescriptor;
use crate::platform::Platform;
use crate::validator::validate;

/// Fixed message shown when the simulated extraction fails.
pub const EXTRACTION_FAILED_MESSAGE: &str =
    "Failed to process the URL. Please check the link and try again.";

/// Advisory shown for valid URLs outside the supported platform set.
pub fn unsupported_message() -> String {
    format!(
        "This link isn't supported. Supported platforms: {}.",
        Platform::supported_names().join(", ")
    )
}

/// Where the session currently stands, derived from [`SessionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No input
    Idle,
    /// Input present but not a well-formed URL
    Invalid,
    /// Valid URL on a platform we don't extract from
    Unsupported,
    /// Fetch in flight
    Pending,
    /// Fetch succeeded; a result is available
    Ready,
    /// Fetch failed
    Failed,
}

/// The single mutable record describing one user session.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub raw_input: String,
    pub is_valid: bool,
    pub platform: Option<Platform>,
    pub pending: bool,
    pub result: Option<MediaDescriptor>,
    pub error: Option<String>,
}

impl SessionState {
    fn idle() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.raw_input.is_empty() {
            SessionPhase::Idle
        } else if !self.is_valid {
            SessionPhase::Invalid
        } else if self.platform.map_or(true, |p| !p.is_supported()) {
            SessionPhase::Unsupported
        } else if self.pending {
            SessionPhase::Pending
        } else if self.result.is_some() {
            SessionPhase::Ready
        } else {
            SessionPhase::Failed
        }
    }
}

/// A fetch the orchestrator should start, tagged with its token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: u64,
    pub url: String,
    pub platform: Platform,
}

/// Owner and single writer of [`SessionState`].
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    generation: u64,
    inflight: Option<u64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    /// Re-run the derived pipeline for a new raw input.
    ///
    /// Returns the fetch the caller must start, if the input is a valid
    /// URL on a supported platform. Any previously in-flight fetch is
    /// superseded either way.
    pub fn set_input(&mut self, raw: impl Into<String>) -> Option<FetchRequest> {
        let raw = raw.into();
        self.generation += 1;
        self.inflight = None;

        if raw.is_empty() {
            self.state = SessionState::idle();
            return None;
        }

        if !validate(&raw) {
            self.state = SessionState {
                raw_input: raw,
                ..SessionState::idle()
            };
            return None;
        }

        let platform = Platform::classify(&raw);
        if !platform.is_supported() {
            self.state = SessionState {
                raw_input: raw,
                is_valid: true,
                platform: Some(platform),
                error: Some(unsupported_message()),
                ..SessionState::idle()
            };
            return None;
        }

        self.state = SessionState {
            raw_input: raw.clone(),
            is_valid: true,
            platform: Some(platform),
            pending: true,
            ..SessionState::idle()
        };
        self.inflight = Some(self.generation);

        Some(FetchRequest {
            token: self.generation,
            url: raw,
            platform,
        })
    }

    /// Apply a fetch outcome. Returns `false`, leaving the state
    /// untouched, when `token` no longer identifies the in-flight fetch.
    pub fn resolve_fetch(
        &mut self,
        token: u64,
        outcome: Result<MediaDescriptor, String>,
    ) -> bool {
        if self.inflight != Some(token) {
            return false;
        }
        self.inflight = None;
        self.state.pending = false;

        match outcome {
            Ok(media) => {
                self.state.result = Some(media);
                self.state.error = None;
            }
            Err(_) => {
                self.state.result = None;
                self.state.error = Some(EXTRACTION_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    /// Unconditionally return to the idle defaults.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.inflight = None;
        self.state = SessionState::idle();
    }
}

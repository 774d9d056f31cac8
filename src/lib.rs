//! Snapgrab library

pub mod download;
pub mod extractor;
pub mod gui;
pub mod platform;
pub mod session;
pub mod utils;
pub mod validator;

// Re-export main types for easier use
pub use download::{download_request, DownloadRequest};
pub use extractor::{MediaDescriptor, MediaExtractor, MediaKind, MockExtractor};
pub use gui::{Message, SnapgrabApp};
pub use platform::{Platform, PlatformDescriptor};
pub use session::{FetchRequest, Session, SessionPhase, SessionState};
pub use utils::{AppSettings, SnapgrabError};

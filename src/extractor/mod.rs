pub mod mock;
pub mod models;
pub mod traits;

pub use mock::MockExtractor;
pub use models::{format_duration, MediaDescriptor, MediaKind};
pub use traits::MediaExtractor;

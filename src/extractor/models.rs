//! Data structures for extracted media

use serde::{Deserialize, Serialize};

/// What kind of media a descriptor points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Image,
    /// Reserved for multi-item posts; no extractor produces it yet
    Carousel,
}

impl MediaKind {
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Video => "Video",
            MediaKind::Image => "Image",
            MediaKind::Carousel => "Carousel",
        }
    }

    /// File extension used when synthesizing a download filename
    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Video => "mp4",
            MediaKind::Image | MediaKind::Carousel => "jpg",
        }
    }
}

/// One piece of downloadable media, as reported by an extractor
///
/// Invariant: `duration` is `Some` iff `kind` is [`MediaKind::Video`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaDescriptor {
    pub id: String,
    pub kind: MediaKind,
    pub title: String,
    /// Opaque preview-image reference
    pub thumbnail: String,
    /// The original input URL, reused as the download target
    pub source_url: String,
    /// Playback length as "m:ss"; videos only
    pub duration: Option<String>,
    /// Quality label, e.g. "1080p"
    pub resolution: String,
}

/// Format a playback length in seconds as "m:ss".
pub fn format_duration(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_duration_with_padded_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(5), "0:05");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(600), "10:00");
        assert_eq!(format_duration(3725), "62:05");
    }

    #[test]
    fn extension_follows_kind() {
        assert_eq!(MediaKind::Video.extension(), "mp4");
        assert_eq!(MediaKind::Image.extension(), "jpg");
        assert_eq!(MediaKind::Carousel.extension(), "jpg");
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MediaKind::Video).expect("serialize"),
            "\"video\""
        );
    }
}

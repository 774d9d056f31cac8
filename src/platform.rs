//! Platform detection for social-media URLs
//!
//! The platform set is fixed at startup: four supported platforms plus an
//! `Unknown` sentinel for everything else. Classification is a plain
//! case-insensitive substring scan, checked in a fixed precedence order.

use serde::{Deserialize, Serialize};

/// A recognized social-media origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    Twitter,
    Facebook,
    Threads,
    Unknown,
}

/// Static description of a platform: display name and whether extraction
/// is attempted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformDescriptor {
    pub name: &'static str,
    pub supported: bool,
}

const INSTAGRAM: PlatformDescriptor = PlatformDescriptor {
    name: "Instagram",
    supported: true,
};
const TWITTER: PlatformDescriptor = PlatformDescriptor {
    name: "X (Twitter)",
    supported: true,
};
const FACEBOOK: PlatformDescriptor = PlatformDescriptor {
    name: "Facebook",
    supported: true,
};
const THREADS: PlatformDescriptor = PlatformDescriptor {
    name: "Threads",
    supported: true,
};
const UNKNOWN: PlatformDescriptor = PlatformDescriptor {
    name: "Unknown",
    supported: false,
};

impl Platform {
    /// Map a URL's textual form to a platform.
    ///
    /// Rules are checked in order; the first match wins, so a URL that
    /// happens to contain several host substrings classifies as the
    /// earliest rule it hits.
    pub fn classify(url: &str) -> Platform {
        let haystack = url.to_ascii_lowercase();

        if haystack.contains("instagram.com") {
            Platform::Instagram
        } else if haystack.contains("twitter.com") || haystack.contains("x.com") {
            Platform::Twitter
        } else if haystack.contains("facebook.com") || haystack.contains("fb.com") {
            Platform::Facebook
        } else if haystack.contains("threads.net") {
            Platform::Threads
        } else {
            Platform::Unknown
        }
    }

    pub fn descriptor(&self) -> &'static PlatformDescriptor {
        match self {
            Platform::Instagram => &INSTAGRAM,
            Platform::Twitter => &TWITTER,
            Platform::Facebook => &FACEBOOK,
            Platform::Threads => &THREADS,
            Platform::Unknown => &UNKNOWN,
        }
    }

    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }

    pub fn is_supported(&self) -> bool {
        self.descriptor().supported
    }

    /// Display names of every supported platform, in precedence order.
    pub fn supported_names() -> Vec<&'static str> {
        [
            Platform::Instagram,
            Platform::Twitter,
            Platform::Facebook,
            Platform::Threads,
        ]
        .iter()
        .map(|p| p.name())
        .collect()
    }
}

//! Simulated extraction backend
//!
//! Stands in for a real media-extraction service: resolves after a
//! randomized delay and rolls a die between a synthesized descriptor and
//! a failure. Behavior is governed by [`SimulatorConfig`], and a fixed
//! seed makes every draw reproducible.

use crate::extractor::models::{format_duration, MediaDescriptor, MediaKind};
use crate::extractor::traits::MediaExtractor;
use crate::platform::Platform;
use crate::utils::config::SimulatorConfig;
use crate::utils::error::SnapgrabError;
use anyhow::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

const RESOLUTIONS: [&str; 3] = ["720p", "1080p", "4K"];

/// Shortest and longest playback length the simulator will invent (seconds)
const DURATION_RANGE: std::ops::RangeInclusive<u64> = 15..=600;

pub struct MockExtractor {
    config: SimulatorConfig,
    rng: Mutex<StdRng>,
}

impl MockExtractor {
    pub fn new(config: SimulatorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng: Mutex::new(rng),
        }
    }

    /// Roll everything up front; the RNG lock must not be held across the
    /// sleep below.
    fn draw(&self, url: &str, platform: Platform) -> (u64, Option<MediaDescriptor>) {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());

        let delay_ms = if self.config.max_delay_ms > self.config.min_delay_ms {
            rng.gen_range(self.config.min_delay_ms..self.config.max_delay_ms)
        } else {
            self.config.min_delay_ms
        };

        if rng.gen_bool(self.config.failure_rate.clamp(0.0, 1.0)) {
            return (delay_ms, None);
        }

        let kind = if rng.gen_bool(self.config.video_rate.clamp(0.0, 1.0)) {
            MediaKind::Video
        } else {
            MediaKind::Image
        };
        let duration = match kind {
            MediaKind::Video => Some(format_duration(rng.gen_range(DURATION_RANGE))),
            _ => None,
        };
        let resolution = RESOLUTIONS[rng.gen_range(0..RESOLUTIONS.len())];
        let id = Uuid::new_v4();

        let descriptor = MediaDescriptor {
            id: id.to_string(),
            kind,
            title: format!("{} {}", platform.name(), kind.label()),
            thumbnail: format!("https://picsum.photos/seed/{}/640/360", id.simple()),
            source_url: url.to_string(),
            duration,
            resolution: resolution.to_string(),
        };

        (delay_ms, Some(descriptor))
    }
}

#[async_trait]
impl MediaExtractor for MockExtractor {
    fn id(&self) -> &'static str {
        "simulated"
    }

    fn supports(&self, platform: Platform) -> bool {
        platform.is_supported()
    }

    async fn extract(&self, url: &str, platform: Platform) -> Result<MediaDescriptor> {
        let (delay_ms, outcome) = self.draw(url, platform);

        debug!(delay_ms, platform = platform.name(), "simulating extraction");
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        match outcome {
            Some(descriptor) => Ok(descriptor),
            None => Err(SnapgrabError::ExtractionFailed.into()),
        }
    }
}

//! Application configuration

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Tunables for the simulated extraction backend
    pub simulator: SimulatorConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            simulator: SimulatorConfig::default(),
        }
    }
}

/// Tunables for the mock extraction backend.
///
/// The probabilities and the delay window are demo defaults, not
/// load-bearing constants; a deployment can adjust them freely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Lower bound of the simulated network delay, inclusive (ms)
    pub min_delay_ms: u64,

    /// Upper bound of the simulated network delay, exclusive (ms)
    pub max_delay_ms: u64,

    /// Probability that a fetch resolves to a failure
    pub failure_rate: f64,

    /// Probability that a successful fetch yields a video (vs an image)
    pub video_rate: f64,

    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 1_500,
            max_delay_ms: 2_500,
            failure_rate: 0.1,
            video_rate: 0.6,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let config = SimulatorConfig::default();
        assert!(config.min_delay_ms < config.max_delay_ms);
        assert!((0.0..=1.0).contains(&config.failure_rate));
        assert!((0.0..=1.0).contains(&config.video_rate));
        assert!(config.seed.is_none());
    }

    #[test]
    fn settings_round_trip_through_json() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).expect("serialize");
        let back: AppSettings = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.simulator.min_delay_ms, settings.simulator.min_delay_ms);
        assert_eq!(back.simulator.failure_rate, settings.simulator.failure_rate);
    }
}

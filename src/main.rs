//! Snapgrab - Social Media Downloader
//!
//! Accepts a social-media URL, detects which platform it belongs to, and
//! presents a downloadable media preview backed by a simulated extraction
//! backend.

use anyhow::Result;
use clap::Parser;
use iced::Application;
use snapgrab::extractor::{MediaExtractor, MockExtractor};
use snapgrab::gui;
use snapgrab::platform::Platform;
use snapgrab::utils::{AppSettings, SnapgrabError};
use snapgrab::validator;

#[derive(Parser)]
struct Args {
    /// Run one simulated extraction for the URL and exit
    #[arg(long)]
    simulate: Option<String>,

    /// Fixed RNG seed for --simulate
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    if let Some(url) = args.simulate {
        // Run headless inside a temporary Tokio runtime
        let rt = tokio::runtime::Runtime::new()?;
        return rt.block_on(simulate_cli(url, args.seed));
    }

    // Start the GUI application (synchronous entrypoint)
    gui::SnapgrabApp::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(720.0, 560.0),
            min_size: Some(iced::Size::new(600.0, 480.0)),
            ..Default::default()
        },
        antialiasing: true,
        ..Default::default()
    })?;

    Ok(())
}

/// Single-shot run of the validate -> classify -> fetch pipeline.
async fn simulate_cli(url: String, seed: Option<u64>) -> Result<()> {
    if !validator::validate(&url) {
        return Err(SnapgrabError::InvalidUrl(url).into());
    }

    let platform = Platform::classify(&url);

    let mut settings = AppSettings::default();
    settings.simulator.seed = seed;
    let extractor = MockExtractor::new(settings.simulator);

    if !extractor.supports(platform) {
        return Err(SnapgrabError::UnsupportedPlatform(url).into());
    }

    println!("Platform: {}", platform.name());
    println!("Extracting via '{}'...", extractor.id());

    let media = extractor.extract(&url, platform).await?;
    println!("{}", serde_json::to_string_pretty(&media)?);

    Ok(())
}

//! Integration-style tests driving the session machine through the
//! extractor seam the same way the GUI does, without any real network.

use anyhow::Result;
use async_trait::async_trait;
use snapgrab::extractor::{MediaDescriptor, MediaExtractor, MediaKind, MockExtractor};
use snapgrab::platform::Platform;
use snapgrab::session::{Session, SessionPhase, EXTRACTION_FAILED_MESSAGE};
use snapgrab::utils::config::SimulatorConfig;
use std::sync::atomic::{AtomicUsize, Ordering};

const INSTAGRAM_URL: &str = "https://instagram.com/p/xyz";

fn mock(seed: u64, failure_rate: f64) -> MockExtractor {
    MockExtractor::new(SimulatorConfig {
        failure_rate,
        seed: Some(seed),
        ..SimulatorConfig::default()
    })
}

/// Counts how often the orchestration actually reaches the extractor.
struct CountingExtractor {
    inner: MockExtractor,
    calls: AtomicUsize,
}

impl CountingExtractor {
    fn new() -> Self {
        Self {
            inner: mock(0, 0.0),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaExtractor for CountingExtractor {
    fn id(&self) -> &'static str {
        "counting"
    }

    fn supports(&self, platform: Platform) -> bool {
        self.inner.supports(platform)
    }

    async fn extract(&self, url: &str, platform: Platform) -> Result<MediaDescriptor> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.extract(url, platform).await
    }
}

/// One input change followed by its fetch, the way the GUI drives it.
async fn drive(session: &mut Session, extractor: &dyn MediaExtractor, url: &str) {
    if let Some(request) = session.set_input(url) {
        let outcome = extractor
            .extract(&request.url, request.platform)
            .await
            .map_err(|e| e.to_string());
        session.resolve_fetch(request.token, outcome);
    }
}

#[tokio::test(start_paused = true)]
async fn instagram_link_reaches_ready() {
    let mut session = Session::new();
    let extractor = mock(42, 0.0);

    drive(&mut session, &extractor, INSTAGRAM_URL).await;

    assert_eq!(session.phase(), SessionPhase::Ready);
    let media = session.state().result.as_ref().expect("result");
    assert_eq!(media.source_url, INSTAGRAM_URL);
    assert!(media.title.starts_with("Instagram"));
    match media.kind {
        MediaKind::Video => assert!(media.duration.is_some()),
        _ => assert!(media.duration.is_none()),
    }
}

#[tokio::test(start_paused = true)]
async fn extraction_failure_reaches_failed_with_retry_message() {
    let mut session = Session::new();
    let extractor = mock(42, 1.0);

    drive(&mut session, &extractor, INSTAGRAM_URL).await;

    assert_eq!(session.phase(), SessionPhase::Failed);
    assert_eq!(
        session.state().error.as_deref(),
        Some(EXTRACTION_FAILED_MESSAGE)
    );
}

#[tokio::test(start_paused = true)]
async fn invalid_input_never_reaches_the_extractor() {
    let mut session = Session::new();
    let extractor = CountingExtractor::new();

    drive(&mut session, &extractor, "not a url").await;

    assert_eq!(session.phase(), SessionPhase::Invalid);
    assert!(session.state().platform.is_none());
    assert_eq!(extractor.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn unsupported_platform_never_reaches_the_extractor() {
    let mut session = Session::new();
    let extractor = CountingExtractor::new();

    drive(&mut session, &extractor, "https://tiktok.com/@user/video/1").await;

    assert_eq!(session.phase(), SessionPhase::Unsupported);
    let advisory = session.state().error.as_deref().expect("advisory");
    assert!(advisory.contains("Instagram"));
    assert_eq!(extractor.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn late_result_from_a_superseded_fetch_is_dropped() {
    let mut session = Session::new();
    let extractor = mock(7, 0.0);

    // Fetch A starts, then the input changes before A lands.
    let first = session
        .set_input("https://instagram.com/p/first")
        .expect("fetch request");
    let second = session
        .set_input("https://instagram.com/p/second")
        .expect("fetch request");

    // B lands first and wins.
    let second_outcome = extractor
        .extract(&second.url, second.platform)
        .await
        .map_err(|e| e.to_string());
    assert!(session.resolve_fetch(second.token, second_outcome));
    assert_eq!(session.phase(), SessionPhase::Ready);

    // A finally lands; it must not alter state derived from B.
    let first_outcome = extractor
        .extract(&first.url, first.platform)
        .await
        .map_err(|e| e.to_string());
    assert!(!session.resolve_fetch(first.token, first_outcome));

    let media = session.state().result.as_ref().expect("result");
    assert_eq!(media.source_url, "https://instagram.com/p/second");
}

#[tokio::test(start_paused = true)]
async fn clearing_the_input_discards_everything() {
    let mut session = Session::new();
    let extractor = mock(3, 0.0);

    drive(&mut session, &extractor, INSTAGRAM_URL).await;
    assert_eq!(session.phase(), SessionPhase::Ready);

    let _ = session.set_input("");
    let state = session.state();
    assert_eq!(state.phase(), SessionPhase::Idle);
    assert!(state.platform.is_none());
    assert!(state.result.is_none());
    assert!(state.error.is_none());
    assert!(!state.pending);
}

#[tokio::test(start_paused = true)]
async fn reset_mid_flight_leaves_idle_after_the_fetch_lands() {
    let mut session = Session::new();
    let extractor = mock(9, 0.0);

    let request = session.set_input(INSTAGRAM_URL).expect("fetch request");
    session.reset();

    let outcome = extractor
        .extract(&request.url, request.platform)
        .await
        .map_err(|e| e.to_string());
    assert!(!session.resolve_fetch(request.token, outcome));
    assert_eq!(session.phase(), SessionPhase::Idle);
}

// SPDX-License-Identifier: MPL-2.0

//! Integration tests for overlay feedback timing
//!
//! Timers run on tokio's paused clock, so the tests advance time explicitly.

use futures::FutureExt;
use scanshell::{Appearance, FeedbackError, FeedbackTone, ReaderView, ShellError, ViewConfiguration};
use std::time::Duration;

fn reader() -> ReaderView {
    ReaderView::new(ViewConfiguration::default(), Appearance::default())
        .expect("default configuration should compose")
}

#[tokio::test(start_paused = true)]
async fn test_failure_resets_after_one_second() {
    let mut view = reader();
    let timer = view.signal_failure().unwrap();
    let mut elapsed = Box::pin(timer.elapsed());

    assert_eq!(view.tone(), FeedbackTone::Failure);

    tokio::time::advance(Duration::from_millis(999)).await;
    assert!(futures::poll!(elapsed.as_mut()).is_pending());
    assert_eq!(view.tone(), FeedbackTone::Failure);

    tokio::time::advance(Duration::from_millis(1)).await;
    let fired = elapsed.await;
    assert!(view.reset(fired));
    assert_eq!(view.tone(), FeedbackTone::Neutral);
}

#[tokio::test(start_paused = true)]
async fn test_failure_then_success_ends_neutral_after_success_delay() {
    let mut view = reader();

    let failure = view.signal_failure().unwrap();
    tokio::time::advance(Duration::from_millis(500)).await;
    let success = view.signal_success().unwrap();

    // The failure timer fires first but has been superseded
    let fired = failure.elapsed().await;
    assert!(!view.reset(fired));
    assert_eq!(view.tone(), FeedbackTone::Success);

    tokio::time::advance(Duration::from_millis(499)).await;
    assert_eq!(view.tone(), FeedbackTone::Success);

    let fired = success.elapsed().await;
    assert!(view.reset(fired));
    assert_eq!(view.tone(), FeedbackTone::Neutral);
}

#[tokio::test(start_paused = true)]
async fn test_second_success_restarts_the_delay() {
    let mut view = reader();

    let first = view.signal_success().unwrap();
    tokio::time::advance(Duration::from_millis(500)).await;
    let second = view.signal_success().unwrap();
    let mut second_elapsed = Box::pin(second.elapsed());

    // At 1000 ms the first timer fires but no longer owns the indicator
    tokio::time::advance(Duration::from_millis(500)).await;
    let fired = first.elapsed().now_or_never().unwrap();
    assert!(!view.reset(fired));
    assert_eq!(view.tone(), FeedbackTone::Success);

    tokio::time::advance(Duration::from_millis(499)).await;
    assert!(futures::poll!(second_elapsed.as_mut()).is_pending());
    assert_eq!(view.tone(), FeedbackTone::Success);

    tokio::time::advance(Duration::from_millis(1)).await;
    let fired = second_elapsed.await;
    assert!(view.reset(fired));
    assert_eq!(view.tone(), FeedbackTone::Neutral);
}

#[tokio::test(start_paused = true)]
async fn test_custom_reset_delay() {
    let mut view = reader().with_reset_delay(Duration::from_millis(250));
    let timer = view.signal_success().unwrap();

    tokio::time::advance(Duration::from_millis(250)).await;
    let fired = timer.elapsed().now_or_never().unwrap();
    assert!(view.reset(fired));
}

#[test]
fn test_signal_without_overlay_leaves_tone_untouched() {
    let mut view = ReaderView::new(
        ViewConfiguration {
            show_overlay: false,
            ..ViewConfiguration::default()
        },
        Appearance::default(),
    )
    .unwrap();

    assert_eq!(
        view.signal_failure().err(),
        Some(ShellError::Feedback(FeedbackError::OverlayMissing))
    );
    assert_eq!(view.tone(), FeedbackTone::Neutral);
}

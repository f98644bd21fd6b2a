//! Intake controller tests
//!
//! Run on tokio's paused clock, so the 800 ms steps elapse instantly while
//! keeping their ordering.

use apklens::application::dto::{IntakeEvent, IntakeOptions, IntakePhase};
use apklens::application::{IntakeController, IntakeEvents, Notification, NotificationKind};
use apklens::domain::entities::FileCandidate;
use apklens::domain::services::{ProgressSimulator, SimulationOutcome, cancel_pair};
use apklens::error::IntakeError;
use apklens::infrastructure::FixedClock;
use chrono::{Local, TimeZone};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(
        Local.with_ymd_and_hms(2025, 6, 15, 9, 5, 7).unwrap(),
    ))
}

fn spawn() -> (apklens::IntakeHandle, IntakeEvents) {
    IntakeController::spawn(IntakeOptions::default(), clock())
}

/// Collects events until `stop` matches, returning everything seen
async fn collect_until(
    events: &mut IntakeEvents,
    stop: impl Fn(&IntakeEvent) -> bool,
) -> Vec<IntakeEvent> {
    let mut seen = Vec::new();
    while let Some(event) = events.recv().await {
        let done = stop(&event);
        seen.push(event);
        if done {
            break;
        }
    }
    seen
}

/// Paused-clock timers fire on millisecond ticks
fn assert_close(actual: Duration, expected: Duration) {
    let diff = actual.abs_diff(expected);
    assert!(
        diff < Duration::from_millis(5),
        "expected ~{expected:?}, got {actual:?}"
    );
}

fn is_results(event: &IntakeEvent) -> bool {
    matches!(event, IntakeEvent::Results { .. })
}

// ============================================================================
// ProgressSimulator Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn simulator_emits_six_steps_with_fixed_delay() {
    let simulator = ProgressSimulator::default();
    let start = Instant::now();
    let mut seen = Vec::new();

    let (_handle, signal) = cancel_pair();
    let outcome = simulator
        .run(&signal, |step| seen.push((step.percentage, start.elapsed())))
        .await;

    assert_eq!(outcome, SimulationOutcome::Completed);
    let percentages: Vec<u8> = seen.iter().map(|(p, _)| *p).collect();
    assert_eq!(percentages, vec![10, 25, 40, 60, 80, 100]);

    assert_eq!(seen[0].1, Duration::ZERO);
    assert_close(seen[1].1, Duration::from_millis(800));
    assert_close(seen[5].1, Duration::from_millis(4000));
    assert_close(start.elapsed(), simulator.total_duration());
}

#[tokio::test(start_paused = true)]
async fn simulator_stops_when_cancelled() {
    let simulator = ProgressSimulator::default();
    let (handle, signal) = cancel_pair();

    let task = tokio::spawn(async move {
        let mut count = 0;
        let outcome = simulator.run(&signal, |_| count += 1).await;
        (outcome, count)
    });

    tokio::time::sleep(Duration::from_millis(1000)).await;
    handle.cancel();

    let (outcome, count) = task.await.unwrap();
    assert_eq!(count, 2);
    match outcome {
        SimulationOutcome::Cancelled { last: Some(step) } => assert_eq!(step.percentage, 25),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[tokio::test(start_paused = true)]
async fn accepted_apk_reaches_presenting() {
    let (handle, mut events) = spawn();

    let session = handle
        .submit(FileCandidate::new("app.apk", 2097152))
        .await
        .unwrap();

    let seen = collect_until(&mut events, is_results).await;

    let phases: Vec<IntakePhase> = seen
        .iter()
        .filter_map(|e| match e {
            IntakeEvent::PhaseChanged { phase } => Some(*phase),
            _ => None,
        })
        .collect();
    assert_eq!(
        phases,
        vec![
            IntakePhase::Validating,
            IntakePhase::Analyzing,
            IntakePhase::Presenting
        ]
    );

    let steps: Vec<u8> = seen
        .iter()
        .filter_map(|e| match e {
            IntakeEvent::Progress { step, .. } => Some(step.percentage),
            _ => None,
        })
        .collect();
    assert_eq!(steps, vec![10, 25, 40, 60, 80, 100]);

    let Some(IntakeEvent::Results { session: shown, screen }) = seen.last() else {
        panic!("expected results");
    };
    assert_eq!(*shown, session);
    assert_eq!(screen.detail("App Size"), Some("2 MB"));
    assert_eq!(screen.score.value, 75);
    assert_eq!(screen.score.tier.as_str(), "medium");

    let document = handle.export().await.unwrap().unwrap();
    assert_eq!(document.file_name, "apk_analysis_report.txt");
    assert_eq!(document.mime_type, "text/plain");
    assert!(
        document
            .contents
            .starts_with("APK Decompiler Pro - Analysis Report")
    );

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.phase, IntakePhase::Presenting);
    assert_eq!(snapshot.session, Some(session));
    assert_eq!(snapshot.progress.map(|s| s.percentage), Some(100));
    assert_eq!(snapshot.file.unwrap().name(), "app.apk");
    assert_eq!(
        snapshot.notifications,
        vec![Notification::success("app.apk analyzed successfully.")]
    );
}

#[tokio::test(start_paused = true)]
async fn file_info_precedes_first_step() {
    let (handle, mut events) = spawn();
    handle
        .submit(FileCandidate::new("app.apk", 1536))
        .await
        .unwrap();

    let seen = collect_until(&mut events, |e| matches!(e, IntakeEvent::Progress { .. })).await;
    let info = seen
        .iter()
        .find_map(|e| match e {
            IntakeEvent::FileAccepted { info, .. } => Some(info.clone()),
            _ => None,
        })
        .unwrap();

    assert_eq!(info[0].value, "app.apk");
    assert_eq!(info[1].value, "1.5 KB");
    assert_eq!(info[2].value, "6/15/2025, 9:05:07 AM");
}

#[tokio::test(start_paused = true)]
async fn results_wait_for_final_delay() {
    let (handle, mut events) = spawn();
    let start = Instant::now();

    handle.submit(FileCandidate::new("app.apk", 1)).await.unwrap();
    collect_until(&mut events, is_results).await;

    assert!(start.elapsed() >= Duration::from_millis(4800));
}

#[tokio::test(start_paused = true)]
async fn non_apk_is_rejected_without_session() {
    let (handle, mut events) = spawn();

    let err = handle
        .submit(FileCandidate::new("virus.exe", 1024))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        IntakeError::InvalidFileType {
            name: "virus.exe".to_string()
        }
    );

    let seen = collect_until(&mut events, |e| matches!(e, IntakeEvent::Notified { .. })).await;
    assert!(!seen.iter().any(|e| matches!(e, IntakeEvent::Progress { .. })));
    assert!(seen.contains(&IntakeEvent::Notified {
        notification: Notification::error("Please select a valid APK file."),
    }));

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.phase, IntakePhase::Idle);
    assert!(snapshot.session.is_none());
    assert!(handle.export().await.unwrap().is_none());
    assert!(handle.report().await.unwrap().is_none());
}

#[tokio::test(start_paused = true)]
async fn empty_selection_is_rejected() {
    let (handle, _events) = spawn();
    let err = handle.submit_batch(Vec::new()).await.unwrap_err();
    assert_eq!(err, IntakeError::NoFileSelected);
}

#[tokio::test(start_paused = true)]
async fn new_file_supersedes_running_session() {
    let (handle, mut events) = spawn();

    let first = handle
        .submit(FileCandidate::new("a.apk", 1024))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(1700)).await;

    let second = handle
        .submit(FileCandidate::new("b.apk", 3 * 1024 * 1024))
        .await
        .unwrap();
    assert_ne!(first, second);

    let seen = collect_until(&mut events, is_results).await;

    let results: Vec<_> = seen
        .iter()
        .filter_map(|e| match e {
            IntakeEvent::Results { session, screen } => Some((*session, screen.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].0, second);
    assert_eq!(results[0].1.detail("App Size"), Some("3 MB"));

    // The first session never progressed past the point it was replaced.
    let first_steps = seen
        .iter()
        .filter(|e| matches!(e, IntakeEvent::Progress { session, .. } if *session == first))
        .count();
    assert_eq!(first_steps, 3);

    // Nothing from the old session arrives afterwards either.
    tokio::time::sleep(Duration::from_secs(10)).await;
    while let Ok(event) = events.try_recv() {
        assert!(!matches!(event, IntakeEvent::Results { .. }));
        assert!(!matches!(event, IntakeEvent::Progress { session, .. } if session == first));
    }

    let report = handle.report().await.unwrap().unwrap();
    assert_eq!(report.file().name(), "b.apk");
}

#[tokio::test(start_paused = true)]
async fn rejected_file_keeps_running_session() {
    let (handle, mut events) = spawn();

    let session = handle
        .submit(FileCandidate::new("a.apk", 1024))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(900)).await;

    assert!(handle.submit(FileCandidate::new("b.txt", 1)).await.is_err());
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.phase, IntakePhase::Analyzing);
    assert_eq!(snapshot.session, Some(session));

    let seen = collect_until(&mut events, is_results).await;
    assert!(seen.contains(&IntakeEvent::PhaseChanged {
        phase: IntakePhase::Presenting
    }));
    assert_eq!(handle.report().await.unwrap().unwrap().file().name(), "a.apk");
}

#[tokio::test(start_paused = true)]
async fn reset_discards_session() {
    let (handle, mut events) = spawn();

    handle
        .submit(FileCandidate::new("app.apk", 1024))
        .await
        .unwrap();
    collect_until(&mut events, is_results).await;

    handle.reset().await.unwrap();
    collect_until(&mut events, |e| matches!(e, IntakeEvent::Reset)).await;

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.phase, IntakePhase::Idle);
    assert!(snapshot.session.is_none());
    assert!(snapshot.screen.is_none());
    assert!(handle.export().await.unwrap().is_none());
}

#[tokio::test(start_paused = true)]
async fn reset_during_analysis_stops_progress() {
    let (handle, mut events) = spawn();

    handle
        .submit(FileCandidate::new("app.apk", 1024))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(500)).await;
    handle.reset().await.unwrap();

    tokio::time::sleep(Duration::from_secs(10)).await;
    let mut progress = 0;
    while let Ok(event) = events.try_recv() {
        assert!(!is_results(&event));
        if matches!(event, IntakeEvent::Progress { .. }) {
            progress += 1;
        }
    }
    assert_eq!(progress, 1);
}

// ============================================================================
// Notification Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn notifications_expire_and_replace() {
    let options = IntakeOptions::default().with_notification_ttl(Duration::from_secs(5));
    let (handle, mut events) = IntakeController::spawn(options, clock());

    let _ = handle.submit(FileCandidate::new("one.exe", 1)).await;
    tokio::time::sleep(Duration::from_secs(2)).await;
    let _ = handle.submit(FileCandidate::new("two.exe", 1)).await;

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.notifications.len(), 1);

    // The replacement restarts the TTL: still visible 4s after the second error.
    tokio::time::sleep(Duration::from_secs(4)).await;
    assert_eq!(handle.snapshot().await.unwrap().notifications.len(), 1);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(handle.snapshot().await.unwrap().notifications.is_empty());

    let cleared = collect_until(&mut events, |e| {
        matches!(e, IntakeEvent::NotificationCleared { .. })
    })
    .await;
    assert_eq!(
        cleared.last(),
        Some(&IntakeEvent::NotificationCleared {
            kind: NotificationKind::Error
        })
    );
}

#[tokio::test(start_paused = true)]
async fn notifications_can_be_dismissed() {
    let (handle, _events) = spawn();

    handle
        .notify(Notification::success("Report saved"))
        .await
        .unwrap();
    assert_eq!(handle.snapshot().await.unwrap().notifications.len(), 1);

    handle.dismiss(NotificationKind::Success).await.unwrap();
    assert!(handle.snapshot().await.unwrap().notifications.is_empty());
}

#[tokio::test(start_paused = true)]
async fn instant_options_skip_delays() {
    let options = IntakeOptions::default().instant();
    let (handle, mut events) = IntakeController::spawn(options, clock());
    let start = Instant::now();

    handle.submit(FileCandidate::new("app.apk", 1)).await.unwrap();
    collect_until(&mut events, is_results).await;

    assert!(start.elapsed() < Duration::from_millis(100));
}

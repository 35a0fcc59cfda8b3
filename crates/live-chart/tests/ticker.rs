// File: crates/live-chart/tests/ticker.rs
// Purpose: Tick cadence and numbering, plus the live redraw loop end to end.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use common::{append_csv, config_for, write_csv};
use live_chart::ticker::{run_redraw_loop, run_slotted_ticks, run_ticks};
use live_chart::ChartState;
use tokio::sync::mpsc;
use tokio::time::{timeout, Instant};

#[tokio::test(start_paused = true)]
async fn ticks_are_consecutive_at_fixed_cadence() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let start = Instant::now();
    let handle = tokio::spawn(run_ticks(Duration::from_millis(500), move |tick| {
        let _ = tx.send((tick, Instant::now()));
    }));

    let mut got = Vec::new();
    for _ in 0..5 {
        got.push(rx.recv().await.expect("tick"));
    }
    handle.abort();

    let ticks: Vec<u64> = got.iter().map(|(t, _)| *t).collect();
    assert_eq!(ticks, vec![0, 1, 2, 3, 4]);
    for (i, (_, at)) in got.iter().enumerate() {
        assert_eq!(at.duration_since(start), Duration::from_millis(500 * i as u64));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn redraw_loop_tracks_a_growing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pid.csv");
    write_csv(&path, "Mibps\n1.0\n");
    let cfg = Arc::new(config_for(&path));
    let state = ChartState::new();
    let mut rx = state.subscribe();

    let handle = tokio::spawn(run_redraw_loop(Arc::clone(&cfg), state.clone()));

    // first chart
    timeout(Duration::from_secs(10), rx.wait_for(|s| s.frame.is_some()))
        .await
        .expect("first frame in time")
        .expect("state alive");

    append_csv(&path, "2.0");
    let snap = timeout(
        Duration::from_secs(10),
        rx.wait_for(|s| s.frame.as_ref().is_some_and(|f| f.figure.y == vec![1.0, 2.0])),
    )
    .await
    .expect("appended row picked up")
    .expect("state alive")
    .clone();
    handle.abort();

    assert!(snap.tick.unwrap() >= 1);
    assert!(snap.error.is_none());
}

#[tokio::test(start_paused = true)]
async fn slow_jobs_skip_ticks_instead_of_queueing() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let running = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));
    let start = Instant::now();

    let handle = {
        let running = Arc::clone(&running);
        let peak = Arc::clone(&peak);
        tokio::spawn(run_slotted_ticks(Duration::from_millis(500), 1, move |tick, slot| {
            let now = running.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            let _ = tx.send((tick, Instant::now()));
            let running = Arc::clone(&running);
            // each job takes longer than two ticks
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(1200)).await;
                running.fetch_sub(1, Ordering::SeqCst);
                drop(slot);
            });
        }))
    };

    let mut got = Vec::new();
    for _ in 0..3 {
        got.push(rx.recv().await.expect("job started"));
    }
    handle.abort();

    let ticks: Vec<u64> = got.iter().map(|(t, _)| *t).collect();
    assert_eq!(ticks, vec![0, 3, 6]);
    let offsets: Vec<Duration> = got.iter().map(|(_, at)| at.duration_since(start)).collect();
    assert_eq!(
        offsets,
        vec![Duration::ZERO, Duration::from_millis(1500), Duration::from_millis(3000)]
    );
    assert_eq!(peak.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn redraw_loop_survives_a_bad_file_and_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pid.csv");
    write_csv(&path, "Mibps\n1.0\n2.0\n");
    let cfg = Arc::new(config_for(&path));
    let state = ChartState::new();
    let mut rx = state.subscribe();

    let handle = tokio::spawn(run_redraw_loop(Arc::clone(&cfg), state.clone()));

    timeout(Duration::from_secs(10), rx.wait_for(|s| s.frame.is_some()))
        .await
        .expect("first frame in time")
        .expect("state alive");

    // producer renames the column
    write_csv(&path, "Gbps\n1.0\n");
    let failed = timeout(
        Duration::from_secs(10),
        rx.wait_for(|s| s.error.as_ref().is_some_and(|e| e.kind == "missing_column")),
    )
    .await
    .expect("failure recorded")
    .expect("state alive")
    .clone();
    let kept = failed.frame.as_ref().expect("last chart kept");
    assert_eq!(kept.figure.y, vec![1.0, 2.0]);
    assert!(failed.tick > Some(kept.tick));

    // file removed, then written back
    std::fs::remove_file(&path).unwrap();
    timeout(
        Duration::from_secs(10),
        rx.wait_for(|s| s.error.as_ref().is_some_and(|e| e.kind == "file_unavailable")),
    )
    .await
    .expect("missing file recorded")
    .expect("state alive");

    write_csv(&path, "Mibps\n4.0\n5.0\n");
    let recovered = timeout(
        Duration::from_secs(10),
        rx.wait_for(|s| s.frame.as_ref().is_some_and(|f| f.figure.y == vec![4.0, 5.0])),
    )
    .await
    .expect("recovered in time")
    .expect("state alive")
    .clone();
    handle.abort();

    assert!(recovered.error.is_none());
}

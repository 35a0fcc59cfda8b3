// File: crates/live-chart/src/bin/pid_feed.rs
// Summary: Synthetic bandwidth producer for local demos; truncates the data file and appends one `Mibps` row per period.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use live_chart::config::{DEFAULT_COLUMN, DEFAULT_DATA_PATH};
use live_chart::logger::init_tracing;
use tokio::time::{interval, MissedTickBehavior};

/// Throughput the fake controller settles around.
const TARGET_MIBPS: f64 = 40.0;

fn sample(i: u64) -> f64 {
    let t = i as f64;
    // ramp-up, then a slow oscillation around the target
    let ramp = 1.0 - (-t / 20.0).exp();
    TARGET_MIBPS * ramp + (t / 15.0).sin() * 4.0 + (i % 5) as f64 * 0.25
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(false);

    let path = PathBuf::from(std::env::var("PID_FEED_FILE").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string()));
    let every_ms: u64 = match std::env::var("PID_FEED_INTERVAL_MS") {
        Ok(v) => v.trim().parse().context("PID_FEED_INTERVAL_MS must be an integer")?,
        Err(_) => 200,
    };

    std::fs::write(&path, format!("{DEFAULT_COLUMN}\n"))
        .with_context(|| format!("failed to create {}", path.display()))?;
    tracing::info!(path = %path.display(), every_ms, "feeding synthetic samples");

    let mut ticker = interval(Duration::from_millis(every_ms.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    for i in 0u64.. {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut ctrl_c => break,
        }
        let mut f = OpenOptions::new()
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        writeln!(f, "{}", sample(i))?;
        if i % 50 == 0 {
            tracing::debug!(rows = i + 1, "appended");
        }
    }

    tracing::info!("feed stopped");
    Ok(())
}

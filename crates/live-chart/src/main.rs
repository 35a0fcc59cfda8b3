// File: crates/live-chart/src/main.rs
// Summary: Starts the redraw loop and serves the dashboard until Ctrl-C.

use std::sync::Arc;

use anyhow::Context;
use live_chart::logger::{init_tracing, is_production};
use live_chart::{server, ticker, ChartState, LiveChartConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(is_production());

    let cfg = Arc::new(LiveChartConfig::from_env().context("invalid configuration")?);
    tracing::info!(
        path = %cfg.data_path.display(),
        column = %cfg.column,
        interval_ms = cfg.interval.as_millis() as u64,
        "starting live chart"
    );

    let state = ChartState::new();
    let listener = TcpListener::bind(cfg.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.bind_addr))?;
    let app = server::router(state.clone(), &cfg);

    let redraws = tokio::spawn(ticker::run_redraw_loop(Arc::clone(&cfg), state));

    tokio::select! {
        res = server::serve(listener, app) => res?,
        _ = tokio::signal::ctrl_c() => tracing::info!("shutdown signal received"),
    }

    redraws.abort();
    Ok(())
}

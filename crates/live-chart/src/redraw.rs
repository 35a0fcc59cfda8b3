// File: crates/live-chart/src/redraw.rs
// Summary: One load -> transform -> render cycle; the unit of work run on every tick.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::body::Bytes;
use chart_core::{Chart, Figure, Series};
use tracing::debug;

use crate::config::LiveChartConfig;
use crate::error::RedrawError;
use crate::loader::load_column;

/// Output of one successful redraw. Never mutated after construction; the next
/// tick builds a new one.
#[derive(Clone, Debug)]
pub struct Frame {
    pub tick: u64,
    pub figure: Figure,
    /// Encoded image. Cloning shares the buffer.
    pub png: Bytes,
    pub rendered_at_ms: u64,
}

/// Line chart of `values` against their row index.
pub fn build_chart(values: &[f64], column: &str) -> Chart {
    Chart::line(Series::from_values(column, values))
}

/// Load the whole data file, build the chart and render it.
///
/// Blocking: does file I/O and CPU rendering.
pub fn redraw(cfg: &LiveChartConfig, tick: u64) -> Result<Frame, RedrawError> {
    let values = load_column(&cfg.data_path, &cfg.column)?;
    let chart = build_chart(&values, &cfg.column);
    let png = chart.render_to_png_bytes(&cfg.render).map_err(RedrawError::Render)?;

    debug!(tick, rows = values.len(), png_bytes = png.len(), "redraw complete");

    Ok(Frame {
        tick,
        figure: chart.to_figure(),
        png: Bytes::from(png),
        rendered_at_ms: now_ms(),
    })
}

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

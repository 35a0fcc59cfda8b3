// File: crates/chart-core/src/figure.rs
// Summary: Serializable, renderer-agnostic description of a single-line chart.

use serde::{Deserialize, Serialize};

/// What the chart shows, independent of pixels. Carries every data point,
/// even when the rendered image is downsampled.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Figure {
    pub fn len(&self) -> usize { self.y.len() }

    pub fn is_empty(&self) -> bool { self.y.is_empty() }
}

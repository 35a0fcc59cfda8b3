// File: crates/chart-core/src/axis.rs
// Summary: Axis model with label, visible range and tick placement.

use crate::grid::nice_ticks;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// X axis of a row-indexed series.
    pub fn index() -> Self {
        Self::new("index", 0.0, 1.0)
    }

    pub fn value(label: impl Into<String>) -> Self {
        Self::new(label, 0.0, 1.0)
    }

    /// Span of the axis, never smaller than a tiny epsilon so it can be divided by.
    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }

    /// Set the range from data bounds. Degenerate ranges are widened by one unit,
    /// `margin` is a fraction of the span added on both sides.
    pub fn fit(&mut self, lo: f64, hi: f64, margin: f64) {
        if !lo.is_finite() || !hi.is_finite() {
            self.min = 0.0;
            self.max = 1.0;
            return;
        }
        let (mut lo, mut hi) = (lo.min(hi), lo.max(hi));
        if (hi - lo).abs() < 1e-9 {
            lo -= 0.5;
            hi += 0.5;
        }
        let pad = (hi - lo) * margin.max(0.0);
        self.min = lo - pad;
        self.max = hi + pad;
    }

    /// Tick positions inside the range, at a "nice" step (1, 2 or 5 times a power of ten).
    pub fn ticks(&self, target: usize) -> Vec<f64> {
        nice_ticks(self.min, self.max, target)
    }
}

// File: crates/chart-core/src/chart.rs
// Summary: Chart struct: series, axes, autoscaling and conversion to a `Figure`.

use crate::figure::Figure;
use crate::series::Series;
use crate::Axis;

/// Fraction of the value span added above and below the data.
pub const Y_MARGIN: f64 = 0.05;

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::index(),
            y_axis: Axis::value("value"),
        }
    }

    /// Line chart of one series against its row index, labelled after the series
    /// and with axes fitted to the data.
    pub fn line(series: Series) -> Self {
        let mut chart = Self::new();
        chart.title = series.name.clone();
        chart.y_axis = Axis::value(series.name.clone());
        chart.add_series(series);
        chart.autoscale_axes(Y_MARGIN);
        chart
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the union of all series bounds. X is fitted tight,
    /// Y gets `y_margin` of headroom. Empty charts get a unit range.
    pub fn autoscale_axes(&mut self, y_margin: f64) {
        let bounds = self.series.iter().filter_map(Series::bounds).reduce(|a, b| {
            (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3))
        });
        match bounds {
            Some((xl, xh, yl, yh)) => {
                self.x_axis.fit(xl, xh, 0.0);
                self.y_axis.fit(yl, yh, y_margin);
            }
            None => {
                self.x_axis.fit(f64::NAN, f64::NAN, 0.0);
                self.y_axis.fit(f64::NAN, f64::NAN, 0.0);
            }
        }
    }

    /// Describe the first series as a `Figure`.
    pub fn to_figure(&self) -> Figure {
        let (x, y) = self
            .series
            .first()
            .map(|s| (s.xs(), s.ys()))
            .unwrap_or_default();
        Figure {
            title: self.title.clone(),
            x_label: self.x_axis.label.clone(),
            y_label: self.y_axis.label.clone(),
            x,
            y,
        }
    }
}

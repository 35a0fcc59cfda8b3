// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate axis fitting for line charts.

use chart_core::{Chart, Series};

#[test]
fn autoscale_fits_index_and_values() {
    let chart = Chart::line(Series::from_values("Mibps", &[1.0, 2.5, 3.0]));

    // X spans the row indices exactly.
    assert_eq!(chart.x_axis.min, 0.0);
    assert_eq!(chart.x_axis.max, 2.0);

    // Y covers the data with some headroom.
    assert!(chart.y_axis.min < 1.0);
    assert!(chart.y_axis.max > 3.0);
    assert_eq!(chart.y_axis.label, "Mibps");
    assert_eq!(chart.x_axis.label, "index");
}

#[test]
fn autoscale_unions_multiple_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("a", vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(Series::with_data("b", vec![(2.0, 6.0), (3.0, -1.5)]));
    chart.autoscale_axes(0.0);

    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 5.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (-1.5, 6.0));
}

#[test]
fn autoscale_empty_chart_uses_unit_range() {
    let chart = Chart::line(Series::from_values("Mibps", &[]));
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 1.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 1.0));
}

// File: crates/chart-core/src/series.rs
// Summary: Line series model; points are (x, y) pairs kept in insertion order.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), points: Vec::new() }
    }

    pub fn with_data(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), points }
    }

    /// Build a series from bare values, using the position of each value as x.
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        let points = values.iter().enumerate().map(|(i, &y)| (i as f64, y)).collect();
        Self { name: name.into(), points }
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn xs(&self) -> Vec<f64> { self.points.iter().map(|p| p.0).collect() }

    pub fn ys(&self) -> Vec<f64> { self.points.iter().map(|p| p.1).collect() }

    /// `(x_min, x_max, y_min, y_max)` over finite points, `None` when there are none.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.points.iter().filter(|(x, y)| x.is_finite() && y.is_finite());
        let &(x0, y0) = it.next()?;
        Some(it.fold((x0, x0, y0, y0), |(xl, xh, yl, yh), &(x, y)| {
            (xl.min(x), xh.max(x), yl.min(y), yh.max(y))
        }))
    }

    /// Downsample with LTTB to at most `max_points`; a no-op below the threshold.
    pub fn downsample_lttb(&self, max_points: usize) -> Self {
        use crate::downsample::lttb;
        let points = if self.points.len() > max_points && max_points >= 2 {
            lttb(&self.points, max_points)
        } else {
            self.points.clone()
        };
        Self { name: self.name.clone(), points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_values_uses_row_order_as_x() {
        let s = Series::from_values("Mibps", &[1.0, 2.5, 3.0]);
        assert_eq!(s.points, vec![(0.0, 1.0), (1.0, 2.5), (2.0, 3.0)]);
        assert_eq!(s.ys(), vec![1.0, 2.5, 3.0]);
    }

    #[test]
    fn bounds_skip_non_finite() {
        let s = Series::with_data("y", vec![(0.0, f64::NAN), (1.0, 4.0), (2.0, -1.0)]);
        assert_eq!(s.bounds(), Some((1.0, 2.0, -1.0, 4.0)));
        assert_eq!(Series::new("empty").bounds(), None);
    }

    #[test]
    fn downsample_keeps_small_series() {
        let s = Series::from_values("y", &[1.0, 2.0, 3.0]);
        assert_eq!(s.downsample_lttb(10), s);
    }
}

// File: crates/chart-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets downsampling for XY series.

/// Returns up to `threshold` points preserving the overall shape.
/// First and last points are always kept.
pub fn lttb(points: &[(f64, f64)], threshold: usize) -> Vec<(f64, f64)> {
    let n = points.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return points.to_vec(); }
    if threshold == 1 { return vec![points[0]]; }
    if threshold == 2 { return vec![points[0], points[n - 1]]; }

    let every = (n - 2) as f64 / (threshold - 2) as f64;
    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(points[0]);

    // index of the point picked from the previous bucket
    let mut prev = 0usize;

    for bucket in 0..(threshold - 2) {
        let start = (1.0 + bucket as f64 * every).floor() as usize;
        let end = ((1.0 + (bucket + 1) as f64 * every).floor() as usize).min(n - 1);

        // Average of the following bucket; the last bucket looks at the final point.
        let next_end = ((1.0 + (bucket + 2) as f64 * every).floor() as usize).min(n);
        let next = if end < next_end { &points[end..next_end] } else { &points[n - 1..] };
        let (sx, sy) = next.iter().fold((0.0, 0.0), |(ax, ay), &(x, y)| (ax + x, ay + y));
        let (avg_x, avg_y) = (sx / next.len() as f64, sy / next.len() as f64);

        let (px, py) = points[prev];
        let mut best = start;
        let mut best_area = -1.0f64;
        for k in start..end.max(start + 1) {
            let (x, y) = points[k];
            let area = ((px - avg_x) * (y - py) - (px - x) * (avg_y - py)).abs();
            if area > best_area {
                best_area = area;
                best = k;
            }
        }
        sampled.push(points[best]);
        prev = best;
    }

    sampled.push(points[n - 1]);
    sampled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave(n: usize) -> Vec<(f64, f64)> {
        (0..n).map(|i| (i as f64, (i as f64 * 0.1).sin())).collect()
    }

    #[test]
    fn respects_threshold_and_endpoints() {
        let data = wave(1_000);
        let out = lttb(&data, 100);
        assert_eq!(out.len(), 100);
        assert_eq!(out.first(), data.first());
        assert_eq!(out.last(), data.last());
    }

    #[test]
    fn keeps_x_order() {
        let out = lttb(&wave(500), 50);
        assert!(out.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn small_inputs_pass_through() {
        let data = wave(5);
        assert_eq!(lttb(&data, 10), data);
        assert!(lttb(&data, 0).is_empty());
        assert_eq!(lttb(&data, 2), vec![data[0], data[4]]);
    }

    #[test]
    fn keeps_spike() {
        let mut data: Vec<(f64, f64)> = (0..200).map(|i| (i as f64, 0.0)).collect();
        data[117].1 = 50.0;
        let out = lttb(&data, 20);
        assert!(out.iter().any(|&(_, y)| y == 50.0));
    }
}

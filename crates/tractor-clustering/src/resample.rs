//! Arclength-equidistant resampling.

use tractor_core::geometry::{distance, Point3};

/// Resample `points` to `count` points spread evenly along its arclength.
/// The first and last points are kept. Degenerate curves (one point, or
/// zero length) resample to `count` copies of their first point.
pub fn resample(points: &[Point3], count: usize) -> Vec<Point3> {
    if points.is_empty() || count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![points[0]];
    }

    let mut cumulative = Vec::with_capacity(points.len());
    let mut total = 0.0f64;
    cumulative.push(0.0);
    for w in points.windows(2) {
        total += f64::from(distance(&w[0], &w[1]));
        cumulative.push(total);
    }

    if total == 0.0 {
        return vec![points[0]; count];
    }

    let mut out = Vec::with_capacity(count);
    let mut segment = 0usize;
    for k in 0..count {
        let target = total * k as f64 / (count - 1) as f64;
        while segment + 2 < cumulative.len() && cumulative[segment + 1] < target {
            segment += 1;
        }
        let start = cumulative[segment];
        let span = cumulative[segment + 1] - start;
        let t = if span > 0.0 {
            ((target - start) / span).clamp(0.0, 1.0) as f32
        } else {
            0.0
        };
        let a = points[segment];
        let b = points[segment + 1];
        out.push([
            a[0] + (b[0] - a[0]) * t,
            a[1] + (b[1] - a[1]) * t,
            a[2] + (b[2] - a[2]) * t,
        ]);
    }
    out
}

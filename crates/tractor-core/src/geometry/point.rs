/// A 3-D point in voxel space.
pub type Point3 = [f32; 3];

#[inline]
pub fn distance_sq(a: &Point3, b: &Point3) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}

#[inline]
pub fn distance(a: &Point3, b: &Point3) -> f32 {
    distance_sq(a, b).sqrt()
}

/// Arclength of a polyline: the sum of its segment lengths.
/// Accumulated in `f64` so long curves do not drift.
pub fn arclength(points: &[Point3]) -> f32 {
    points
        .windows(2)
        .map(|w| f64::from(distance(&w[0], &w[1])))
        .sum::<f64>() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arclength_of_straight_line() {
        let pts = vec![[0.0, 0.0, 0.0], [3.0, 4.0, 0.0], [3.0, 4.0, 10.0]];
        assert!((arclength(&pts) - 15.0).abs() < 1e-5);
    }

    #[test]
    fn arclength_of_single_point_is_zero() {
        assert_eq!(arclength(&[[1.0, 2.0, 3.0]]), 0.0);
        assert_eq!(arclength(&[]), 0.0);
    }
}

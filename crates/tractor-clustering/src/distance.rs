//! Minimum average direct-flip (MDF) distance between resampled curves.

use tractor_core::geometry::{distance, Point3};

/// Mean point-wise distance in the direct and in the flipped orientation.
/// Both inputs must hold the same number of points.
pub fn direct_flip_distances(a: &[Point3], b: &[Point3]) -> (f32, f32) {
    debug_assert_eq!(a.len(), b.len());
    if a.is_empty() {
        return (0.0, 0.0);
    }
    let n = a.len();
    let mut direct = 0.0f32;
    let mut flipped = 0.0f32;
    for i in 0..n {
        direct += distance(&a[i], &b[i]);
        flipped += distance(&a[i], &b[n - 1 - i]);
    }
    (direct / n as f32, flipped / n as f32)
}

/// MDF distance: the smaller of the direct and flipped mean distances.
pub fn mdf(a: &[Point3], b: &[Point3]) -> f32 {
    let (direct, flipped) = direct_flip_distances(a, b);
    direct.min(flipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_curve_has_zero_mdf() {
        let a = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]];
        let mut b = a.clone();
        b.reverse();
        let (direct, flipped) = direct_flip_distances(&a, &b);
        assert!(direct > 0.0);
        assert_eq!(flipped, 0.0);
        assert_eq!(mdf(&a, &b), 0.0);
    }

    #[test]
    fn parallel_offset_is_offset() {
        let a = vec![[0.0, 0.0, 0.0], [5.0, 0.0, 0.0]];
        let b = vec![[0.0, 3.0, 0.0], [5.0, 3.0, 0.0]];
        assert!((mdf(&a, &b) - 3.0).abs() < 1e-6);
    }
}

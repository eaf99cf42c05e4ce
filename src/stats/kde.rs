//! Kernel Density Estimation Module
//! 1-D Gaussian KDE evaluated on a fixed grid for the density plots.

use statrs::distribution::{Continuous, Normal};

/// Number of grid points per curve.
pub const GRID_SIZE: usize = 200;

/// The grid extends this many bandwidths past the data on each side.
const CUT: f64 = 3.0;

/// An evaluated density curve. Empty when the input had no spread.
#[derive(Debug, Clone, Default)]
pub struct KdeCurve {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl KdeCurve {
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Curve as plot points.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| [x, y])
            .collect()
    }
}

/// Scott's rule bandwidth: sample standard deviation scaled by n^(-1/5).
pub fn scott_bandwidth(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    variance.sqrt() * (n as f64).powf(-0.2)
}

/// Gaussian KDE over a uniform grid spanning the data plus three
/// bandwidths on each side. Non-finite inputs are dropped first.
pub fn gaussian_kde(values: &[f64]) -> KdeCurve {
    let clean: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

    let bandwidth = scott_bandwidth(&clean);
    if bandwidth <= 0.0 || !bandwidth.is_finite() {
        return KdeCurve::default();
    }

    let Ok(kernel) = Normal::new(0.0, 1.0) else {
        return KdeCurve::default();
    };

    let min = clean.iter().copied().fold(f64::INFINITY, f64::min);
    let max = clean.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lo = min - CUT * bandwidth;
    let hi = max + CUT * bandwidth;
    let step = (hi - lo) / (GRID_SIZE - 1) as f64;

    let n = clean.len() as f64;
    let mut xs = Vec::with_capacity(GRID_SIZE);
    let mut ys = Vec::with_capacity(GRID_SIZE);
    for i in 0..GRID_SIZE {
        let x = lo + step * i as f64;
        let density = clean
            .iter()
            .map(|xi| kernel.pdf((x - xi) / bandwidth))
            .sum::<f64>()
            / (n * bandwidth);
        xs.push(x);
        ys.push(density);
    }

    KdeCurve { xs, ys }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spread_sample() -> Vec<f64> {
        (0..200).map(|i| (i % 50) as f64 * 0.1).collect()
    }

    #[test]
    fn density_is_nonnegative() {
        let curve = gaussian_kde(&spread_sample());
        assert_eq!(curve.xs.len(), GRID_SIZE);
        assert!(curve.ys.iter().all(|&y| y >= 0.0));
    }

    #[test]
    fn density_integrates_to_one() {
        let curve = gaussian_kde(&spread_sample());

        // Trapezoid rule over the uniform grid
        let mut integral = 0.0;
        for i in 1..curve.xs.len() {
            let dx = curve.xs[i] - curve.xs[i - 1];
            integral += 0.5 * (curve.ys[i] + curve.ys[i - 1]) * dx;
        }
        assert!((integral - 1.0).abs() < 0.02, "integral was {integral}");
    }

    #[test]
    fn peak_sits_near_the_mode() {
        let values: Vec<f64> = (0..100).map(|i| 5.0 + 0.01 * (i % 10) as f64).collect();
        let curve = gaussian_kde(&values);

        let (peak_idx, _) = curve
            .ys
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .unwrap();
        assert!((curve.xs[peak_idx] - 5.05).abs() < 0.5);
    }

    #[test]
    fn degenerate_inputs_yield_empty_curves() {
        assert!(gaussian_kde(&[]).is_empty());
        assert!(gaussian_kde(&[3.0]).is_empty());
        assert!(gaussian_kde(&[2.0, 2.0, 2.0]).is_empty());
        assert!(gaussian_kde(&[f64::NAN, f64::INFINITY]).is_empty());
    }

    #[test]
    fn bandwidth_shrinks_with_sample_size() {
        let small: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let large: Vec<f64> = (0..1000).map(|i| (i % 10) as f64).collect();
        assert!(scott_bandwidth(&large) < scott_bandwidth(&small));
    }
}

use serde::Serialize;

/// A straight line `y = slope * lambda + intercept` with independent standard
/// errors on both coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearModel {
    pub slope: f64,
    pub slope_err: f64,
    pub intercept: f64,
    pub intercept_err: f64,
}

impl LinearModel {
    pub fn new(slope: f64, slope_err: f64, intercept: f64, intercept_err: f64) -> Self {
        Self {
            slope,
            slope_err,
            intercept,
            intercept_err,
        }
    }

    #[inline]
    pub fn evaluate(&self, lambda: f64) -> f64 {
        self.slope * lambda + self.intercept
    }

    /// Exact integral of the line over `[a, b]`.
    #[inline]
    pub fn integrate(&self, a: f64, b: f64) -> f64 {
        self.slope * (b * b - a * a) / 2.0 + self.intercept * (b - a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn evaluate_returns_intercept_at_zero() {
        let line = LinearModel::new(-2.0, 0.0, 3.0, 0.0);
        assert!(f64_approx_equal(line.evaluate(0.0), 3.0));
        assert!(f64_approx_equal(line.evaluate(1.0), 1.0));
    }

    #[test]
    fn integrate_over_unit_interval_is_midpoint_value() {
        let line = LinearModel::new(-2.0, 0.0, 3.0, 0.0);
        assert!(f64_approx_equal(line.integrate(0.0, 1.0), line.evaluate(0.5)));
    }

    #[test]
    fn integrate_is_additive_over_adjacent_intervals() {
        let line = LinearModel::new(1.7, 0.0, -0.4, 0.0);
        let whole = line.integrate(0.0, 1.0);
        let split = line.integrate(0.0, 0.3) + line.integrate(0.3, 1.0);
        assert!(f64_approx_equal(whole, split));
    }
}

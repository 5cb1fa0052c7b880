//! First-order propagation of the input uncertainties.
//!
//! Every source variable contributes one named partial derivative; the propagated
//! standard error is the quadrature sum of `partial * err` over all sources, with
//! the sources treated as uncorrelated.

use super::config::UncertaintyModel;
use crate::core::models::intersection::Intersection;
use crate::core::models::linear::LinearModel;
use crate::core::models::sample::EndStateSample;

/// Partial derivatives of `x = (intercept0 - intercept1) / (slope1 - slope0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionPartials {
    pub d_intercept0: f64,
    pub d_intercept1: f64,
    pub d_slope0: f64,
    pub d_slope1: f64,
}

impl IntersectionPartials {
    /// Requires `slope1 != slope0`; the solver never asks for parallel lines.
    pub fn new(line0: &LinearModel, line1: &LinearModel) -> Self {
        let numerator = line0.intercept - line1.intercept;
        let denominator = line1.slope - line0.slope;
        let denominator_sq = denominator * denominator;

        Self {
            d_intercept0: 1.0 / denominator,
            d_intercept1: -1.0 / denominator,
            d_slope0: numerator / denominator_sq,
            d_slope1: -numerator / denominator_sq,
        }
    }

    pub fn terms(&self, line0: &LinearModel, line1: &LinearModel) -> [f64; 4] {
        [
            self.d_intercept0 * line0.intercept_err,
            self.d_intercept1 * line1.intercept_err,
            self.d_slope0 * line0.slope_err,
            self.d_slope1 * line1.slope_err,
        ]
    }
}

/// Partial derivatives of
/// `I = slope0*x^2/2 + intercept0*x + slope1*(1 - x^2)/2 + intercept1*(1 - x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegralPartials {
    pub d_x: f64,
    pub d_slope0: f64,
    pub d_slope1: f64,
    pub d_intercept0: f64,
    pub d_intercept1: f64,
}

impl IntegralPartials {
    pub fn new(line0: &LinearModel, line1: &LinearModel, x: f64) -> Self {
        Self {
            // Difference of the two lines at x; vanishes analytically at the crossing.
            d_x: (line0.slope - line1.slope) * x + (line0.intercept - line1.intercept),
            d_slope0: x * x / 2.0,
            d_slope1: (1.0 - x * x) / 2.0,
            d_intercept0: x,
            d_intercept1: 1.0 - x,
        }
    }

    pub fn terms(&self, line0: &LinearModel, line1: &LinearModel, x_err: f64) -> [f64; 5] {
        [
            self.d_x * x_err,
            self.d_slope0 * line0.slope_err,
            self.d_slope1 * line1.slope_err,
            self.d_intercept0 * line0.intercept_err,
            self.d_intercept1 * line1.intercept_err,
        ]
    }
}

#[inline]
pub fn quadrature(terms: &[f64]) -> f64 {
    terms.iter().map(|t| t * t).sum::<f64>().sqrt()
}

pub fn intersection_error(
    line0: &LinearModel,
    line1: &LinearModel,
    model: UncertaintyModel,
) -> f64 {
    match model {
        UncertaintyModel::DeltaMethod => {
            quadrature(&IntersectionPartials::new(line0, line1).terms(line0, line1))
        }
        UncertaintyModel::Legacy => legacy_intersection_error(line0, line1),
    }
}

/// Uncertainty of the simple endpoint average used when the lines do not cross in `[0, 1]`.
#[inline]
pub fn endpoint_average_error(lambda0: &EndStateSample, lambda1: &EndStateSample) -> f64 {
    (lambda0.mean_energy_err.powi(2) + lambda1.mean_energy_err.powi(2)).sqrt() / 2.0
}

pub fn integral_error(
    lambda0: &EndStateSample,
    lambda1: &EndStateSample,
    line0: &LinearModel,
    line1: &LinearModel,
    intersection: &Intersection,
    model: UncertaintyModel,
) -> f64 {
    match *intersection {
        Intersection::Found { x, x_err } => match model {
            UncertaintyModel::DeltaMethod => {
                quadrature(&IntegralPartials::new(line0, line1, x).terms(line0, line1, x_err))
            }
            UncertaintyModel::Legacy => legacy_integral_error(lambda1, line0, line1, x, x_err),
        },
        Intersection::OutOfDomain { .. } | Intersection::Parallel => {
            endpoint_average_error(lambda0, lambda1)
        }
        Intersection::Undefined => f64::NAN,
    }
}

// The legacy forms below reproduce the earlier closed-form expressions. The
// slope term of the intersection error is divided by D^2 rather than D^4, and
// the integral error squares the x-terms separately.

fn legacy_intersection_error(line0: &LinearModel, line1: &LinearModel) -> f64 {
    let numerator = line0.intercept - line1.intercept;
    let denominator = line1.slope - line0.slope;
    let denominator_sq = denominator * denominator;

    ((line0.intercept_err.powi(2) + line1.intercept_err.powi(2)) / denominator_sq
        + numerator.powi(2) / denominator_sq * (line1.slope_err.powi(2) + line0.slope_err.powi(2)))
    .sqrt()
}

fn legacy_integral_error(
    lambda1: &EndStateSample,
    line0: &LinearModel,
    line1: &LinearModel,
    x: f64,
    x_err: f64,
) -> f64 {
    let e1 = lambda1.mean_energy;
    let e1_err = lambda1.mean_energy_err;
    let x_sq = x * x;

    (e1_err.powi(2)
        + line1.slope_err.powi(2) / 4.0
        + x_err.powi(2) * (line0.intercept - e1 + line1.slope).powi(2)
        + x_sq * (line0.intercept_err.powi(2) + e1_err.powi(2) + line1.slope_err.powi(2))
        + x_sq * x_err.powi(2) * (line0.slope - line1.slope).powi(2)
        + x_sq * x_sq / 4.0 * (line0.slope_err.powi(2) + line1.slope_err.powi(2)))
    .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::model_builder::{EndState, build};

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    // Lines -2x and x - 2 cross at x = 2/3.
    fn crossing_lines() -> (EndStateSample, EndStateSample, LinearModel, LinearModel) {
        let s0 = EndStateSample::new(0.0, 0.01, -1.0, 0.01);
        let s1 = EndStateSample::new(-1.0, 0.01, 0.5, 0.01);
        let l0 = build(&s0, EndState::Lambda0);
        let l1 = build(&s1, EndState::Lambda1);
        (s0, s1, l0, l1)
    }

    #[test]
    fn quadrature_combines_terms_as_root_sum_of_squares() {
        assert!(f64_approx_equal(quadrature(&[3.0, 4.0]), 5.0));
        assert!(f64_approx_equal(quadrature(&[-3.0, 4.0]), 5.0));
        assert!(f64_approx_equal(quadrature(&[]), 0.0));
    }

    #[test]
    fn intersection_partials_match_analytic_derivatives() {
        let (_, _, l0, l1) = crossing_lines();
        let p = IntersectionPartials::new(&l0, &l1);
        // N = 2, D = 3.
        assert!(f64_approx_equal(p.d_intercept0, 1.0 / 3.0));
        assert!(f64_approx_equal(p.d_intercept1, -1.0 / 3.0));
        assert!(f64_approx_equal(p.d_slope0, 2.0 / 9.0));
        assert!(f64_approx_equal(p.d_slope1, -2.0 / 9.0));
    }

    #[test]
    fn intersection_partials_agree_with_finite_differences() {
        let (_, _, l0, l1) = crossing_lines();
        let x_of = |a: &LinearModel, b: &LinearModel| (a.intercept - b.intercept) / (b.slope - a.slope);
        let h = 1e-6;
        let p = IntersectionPartials::new(&l0, &l1);

        let mut bumped = l0;
        bumped.slope += h;
        let numeric = (x_of(&bumped, &l1) - x_of(&l0, &l1)) / h;
        assert!((numeric - p.d_slope0).abs() < 1e-5);

        let mut bumped = l1;
        bumped.intercept += h;
        let numeric = (x_of(&l0, &bumped) - x_of(&l0, &l1)) / h;
        assert!((numeric - p.d_intercept1).abs() < 1e-5);
    }

    #[test]
    fn integral_partial_in_x_vanishes_at_the_crossing() {
        let (_, _, l0, l1) = crossing_lines();
        let p = IntegralPartials::new(&l0, &l1, 2.0 / 3.0);
        assert!(p.d_x.abs() < 1e-12);
        assert!(f64_approx_equal(p.d_slope0, 2.0 / 9.0));
        assert!(f64_approx_equal(p.d_slope1, 5.0 / 18.0));
        assert!(f64_approx_equal(p.d_intercept0, 2.0 / 3.0));
        assert!(f64_approx_equal(p.d_intercept1, 1.0 / 3.0));
    }

    #[test]
    fn delta_method_errors_match_reference_values() {
        let (s0, s1, l0, l1) = crossing_lines();
        let x_err = intersection_error(&l0, &l1, UncertaintyModel::DeltaMethod);
        assert!((x_err - 0.010304020550550783).abs() < 1e-12);

        let found = Intersection::Found { x: 2.0 / 3.0, x_err };
        let err = integral_error(&s0, &s1, &l0, &l1, &found, UncertaintyModel::DeltaMethod);
        assert!((err - 0.01227262335243029).abs() < 1e-12);
    }

    #[test]
    fn legacy_errors_match_reference_values() {
        let (s0, s1, l0, l1) = crossing_lines();
        let x_err = intersection_error(&l0, &l1, UncertaintyModel::Legacy);
        assert!((x_err - 0.020548046676563257).abs() < 1e-12);

        let found = Intersection::Found { x: 2.0 / 3.0, x_err };
        let err = integral_error(&s0, &s1, &l0, &l1, &found, UncertaintyModel::Legacy);
        assert!((err - 0.06232134961057849).abs() < 1e-12);
    }

    #[test]
    fn out_of_domain_error_is_half_the_quadrature_of_mean_errors() {
        let (s0, s1, l0, l1) = crossing_lines();
        let s0 = EndStateSample { mean_energy_err: 0.3, ..s0 };
        let s1 = EndStateSample { mean_energy_err: 0.4, ..s1 };
        for intersection in [Intersection::OutOfDomain { x: 3.0 }, Intersection::Parallel] {
            for model in [UncertaintyModel::DeltaMethod, UncertaintyModel::Legacy] {
                let err = integral_error(&s0, &s1, &l0, &l1, &intersection, model);
                assert!(f64_approx_equal(err, 0.25));
            }
        }
    }

    #[test]
    fn undefined_intersection_yields_nan_error() {
        let (s0, s1, l0, l1) = crossing_lines();
        let err = integral_error(
            &s0,
            &s1,
            &l0,
            &l1,
            &Intersection::Undefined,
            UncertaintyModel::DeltaMethod,
        );
        assert!(err.is_nan());
    }
}

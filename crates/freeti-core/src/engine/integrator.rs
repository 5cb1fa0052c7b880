use crate::core::models::intersection::Intersection;
use crate::core::models::linear::LinearModel;
use crate::core::models::sample::EndStateSample;

/// Area under line 0 on `[0, x]` plus line 1 on `[x, 1]`.
#[inline]
pub fn piecewise_integral(line0: &LinearModel, line1: &LinearModel, x: f64) -> f64 {
    line0.integrate(0.0, x) + line1.integrate(x, 1.0)
}

/// Trapezoidal estimate from the two endpoint means alone.
#[inline]
pub fn endpoint_average(lambda0: &EndStateSample, lambda1: &EndStateSample) -> f64 {
    (lambda0.mean_energy + lambda1.mean_energy) / 2.0
}

pub fn integrate(
    lambda0: &EndStateSample,
    lambda1: &EndStateSample,
    line0: &LinearModel,
    line1: &LinearModel,
    intersection: &Intersection,
) -> f64 {
    match *intersection {
        Intersection::Found { x, .. } => piecewise_integral(line0, line1, x),
        Intersection::OutOfDomain { .. } | Intersection::Parallel => {
            endpoint_average(lambda0, lambda1)
        }
        Intersection::Undefined => f64::NAN,
    }
}

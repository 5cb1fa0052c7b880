use super::config::UncertaintyModel;
use super::uncertainty;
use crate::core::models::intersection::Intersection;
use crate::core::models::linear::LinearModel;

/// Locates the crossing of the two lines and classifies it against `[0, 1]`.
///
/// Equal slopes are reported as [`Intersection::Parallel`] without dividing. A NaN
/// crossing (non-finite inputs) is [`Intersection::Undefined`]. Only crossings inside
/// the domain get a propagated uncertainty.
pub fn solve(line0: &LinearModel, line1: &LinearModel, model: UncertaintyModel) -> Intersection {
    let denominator = line1.slope - line0.slope;
    if denominator == 0.0 {
        return Intersection::Parallel;
    }

    let x = (line0.intercept - line1.intercept) / denominator;
    if x.is_nan() {
        Intersection::Undefined
    } else if (0.0..=1.0).contains(&x) {
        Intersection::Found {
            x,
            x_err: uncertainty::intersection_error(line0, line1, model),
        }
    } else {
        Intersection::OutOfDomain { x }
    }
}

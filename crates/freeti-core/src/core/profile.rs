use super::models::intersection::Intersection;
use super::models::linear::LinearModel;
use super::models::sample::EndStateSample;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ProfileError {
    #[error("A profile needs at least 2 points to span [0, 1], got {0}")]
    TooFewPoints(usize),
}

/// One sample of the diagnostic curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfilePoint {
    pub lambda: f64,
    pub lambda0_line: f64,
    pub lambda1_line: f64,
    /// The curve whose area over `[0, 1]` is the reported integral.
    pub integrand: f64,
}

/// Both linear models and the integrated curve sampled on an even grid over `[0, 1]`.
///
/// With an in-domain crossing the integrand follows line 0 up to the crossing and
/// line 1 after it. Otherwise it is the chord between the two endpoint means, whose
/// area is the endpoint-average estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    points: Vec<ProfilePoint>,
    crossing: Option<(f64, f64)>,
}

impl Profile {
    pub fn sample(
        lambda0: &EndStateSample,
        lambda1: &EndStateSample,
        line0: &LinearModel,
        line1: &LinearModel,
        intersection: &Intersection,
        num_points: usize,
    ) -> Result<Self, ProfileError> {
        if num_points < 2 {
            return Err(ProfileError::TooFewPoints(num_points));
        }

        let step = 1.0 / (num_points - 1) as f64;
        let integrand = |lambda: f64| match *intersection {
            Intersection::Found { x, .. } => {
                if lambda <= x {
                    line0.evaluate(lambda)
                } else {
                    line1.evaluate(lambda)
                }
            }
            Intersection::OutOfDomain { .. } | Intersection::Parallel => {
                lambda0.mean_energy + (lambda1.mean_energy - lambda0.mean_energy) * lambda
            }
            Intersection::Undefined => f64::NAN,
        };

        let points = (0..num_points)
            .map(|i| {
                let lambda = if i == num_points - 1 { 1.0 } else { i as f64 * step };
                ProfilePoint {
                    lambda,
                    lambda0_line: line0.evaluate(lambda),
                    lambda1_line: line1.evaluate(lambda),
                    integrand: integrand(lambda),
                }
            })
            .collect();

        let crossing = match *intersection {
            Intersection::Found { x, .. } => Some((x, line0.evaluate(x))),
            _ => None,
        };

        Ok(Self { points, crossing })
    }

    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    /// The marked crossing `(lambda, energy)`, present only inside the domain.
    pub fn crossing(&self) -> Option<(f64, f64)> {
        self.crossing
    }

    /// Trapezoidal area under the integrand.
    pub fn trapezoid_area(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].lambda - w[0].lambda) * (w[0].integrand + w[1].integrand) / 2.0)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn samples() -> (EndStateSample, EndStateSample) {
        (
            EndStateSample::new(0.0, 0.01, -1.0, 0.01),
            EndStateSample::new(-1.0, 0.01, 0.5, 0.01),
        )
    }

    #[test]
    fn sample_rejects_fewer_than_two_points() {
        let (s0, s1) = samples();
        let line = LinearModel::new(0.0, 0.0, 0.0, 0.0);
        let result = Profile::sample(&s0, &s1, &line, &line, &Intersection::Parallel, 1);
        assert_eq!(result, Err(ProfileError::TooFewPoints(1)));
    }

    #[test]
    fn grid_spans_the_closed_unit_interval() {
        let (s0, s1) = samples();
        let line = LinearModel::new(1.0, 0.0, 0.0, 0.0);
        let profile =
            Profile::sample(&s0, &s1, &line, &line, &Intersection::Parallel, 11).unwrap();
        let points = profile.points();
        assert_eq!(points.len(), 11);
        assert_eq!(points[0].lambda, 0.0);
        assert_eq!(points[10].lambda, 1.0);
        assert!(f64_approx_equal(points[5].lambda, 0.5));
    }

    #[test]
    fn in_domain_integrand_switches_lines_at_the_crossing() {
        let (s0, s1) = samples();
        let line0 = LinearModel::new(-2.0, 0.0, 0.0, 0.0);
        let line1 = LinearModel::new(1.0, 0.0, -2.0, 0.0);
        let found = Intersection::Found {
            x: 2.0 / 3.0,
            x_err: 0.0,
        };
        let profile = Profile::sample(&s0, &s1, &line0, &line1, &found, 7).unwrap();

        for point in profile.points() {
            let expected = point.lambda0_line.max(point.lambda1_line);
            assert!(f64_approx_equal(point.integrand, expected));
        }
        let (x, y) = profile.crossing().unwrap();
        assert!(f64_approx_equal(x, 2.0 / 3.0));
        assert!(f64_approx_equal(y, -4.0 / 3.0));
    }

    #[test]
    fn out_of_domain_integrand_is_the_endpoint_chord() {
        let (s0, s1) = samples();
        let line = LinearModel::new(0.0, 0.0, 0.0, 0.0);
        let profile = Profile::sample(
            &s0,
            &s1,
            &line,
            &line,
            &Intersection::OutOfDomain { x: 4.0 },
            3,
        )
        .unwrap();
        let integrands: Vec<f64> = profile.points().iter().map(|p| p.integrand).collect();
        assert!(f64_approx_equal(integrands[0], 0.0));
        assert!(f64_approx_equal(integrands[1], -0.5));
        assert!(f64_approx_equal(integrands[2], -1.0));
        assert!(f64_approx_equal(profile.trapezoid_area(), -0.5));
        assert_eq!(profile.crossing(), None);
    }
}

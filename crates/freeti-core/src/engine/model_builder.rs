use crate::core::models::linear::LinearModel;
use crate::core::models::sample::EndStateSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndState {
    Lambda0,
    Lambda1,
}

/// Linearizes one end-state's statistics into `E(lambda) = slope * lambda + intercept`.
///
/// Both lines have slope `2 * fluctuation_term`. The Lambda=0 line is anchored at
/// `lambda = 0` so its intercept is the mean energy. The Lambda=1 line is anchored at
/// `lambda = 1`, so its intercept is back-projected along its own slope:
/// `mean_energy - 2 * fluctuation_term`.
///
/// Swapping the two samples is therefore not a symmetry of the model: the same
/// statistics produce a different line depending on which end they describe.
pub fn build(sample: &EndStateSample, end_state: EndState) -> LinearModel {
    let slope = 2.0 * sample.fluctuation_term;
    let slope_err = 2.0 * sample.fluctuation_term_err;

    match end_state {
        EndState::Lambda0 => {
            LinearModel::new(slope, slope_err, sample.mean_energy, sample.mean_energy_err)
        }
        EndState::Lambda1 => LinearModel::new(
            slope,
            slope_err,
            sample.mean_energy - slope,
            (sample.mean_energy_err.powi(2) + 4.0 * sample.fluctuation_term_err.powi(2)).sqrt(),
        ),
    }
}

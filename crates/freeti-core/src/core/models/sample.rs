use crate::core::statistics::mean_and_sem;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const SAMPLE_FIELD_COUNT: usize = 4;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SampleError {
    #[error("Expected {expected} values [mean, mean-err, fluctuation, fluctuation-err], got {found}")]
    WrongLength { expected: usize, found: usize },
}

/// Summary statistics measured at one end-state of the coupling parameter.
///
/// The field order matches the external `[f64; 4]` representation:
/// `[mean_energy, mean_energy_err, fluctuation_term, fluctuation_term_err]`.
/// The fluctuation term is `-beta/2 * <dE^2>` of the sampled energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EndStateSample {
    pub mean_energy: f64,
    pub mean_energy_err: f64,
    pub fluctuation_term: f64,
    pub fluctuation_term_err: f64,
}

impl EndStateSample {
    pub fn new(
        mean_energy: f64,
        mean_energy_err: f64,
        fluctuation_term: f64,
        fluctuation_term_err: f64,
    ) -> Self {
        Self {
            mean_energy,
            mean_energy_err,
            fluctuation_term,
            fluctuation_term_err,
        }
    }

    pub fn from_slice(values: &[f64]) -> Result<Self, SampleError> {
        let array: [f64; SAMPLE_FIELD_COUNT] =
            values.try_into().map_err(|_| SampleError::WrongLength {
                expected: SAMPLE_FIELD_COUNT,
                found: values.len(),
            })?;
        Ok(Self::from(array))
    }

    /// Summarizes a raw energy series taken at one end-state.
    ///
    /// The mean energy and its standard error come straight from the series. The
    /// fluctuation term is the mean of `-beta/2 * (E_i - <E>)^2`, with the standard
    /// error of that per-frame quantity as its uncertainty. Fewer than two energies
    /// leave the uncertainties (and, for an empty series, everything) as NaN.
    pub fn from_energies(energies: &[f64], beta: f64) -> Self {
        let (mean_energy, mean_energy_err) = mean_and_sem(energies);
        let fluctuations: Vec<f64> = energies
            .iter()
            .map(|e| -0.5 * beta * (e - mean_energy).powi(2))
            .collect();
        let (fluctuation_term, fluctuation_term_err) = mean_and_sem(&fluctuations);

        Self {
            mean_energy,
            mean_energy_err,
            fluctuation_term,
            fluctuation_term_err,
        }
    }

    pub fn to_array(&self) -> [f64; SAMPLE_FIELD_COUNT] {
        [
            self.mean_energy,
            self.mean_energy_err,
            self.fluctuation_term,
            self.fluctuation_term_err,
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

impl From<[f64; SAMPLE_FIELD_COUNT]> for EndStateSample {
    fn from(values: [f64; SAMPLE_FIELD_COUNT]) -> Self {
        let [mean_energy, mean_energy_err, fluctuation_term, fluctuation_term_err] = values;
        Self::new(
            mean_energy,
            mean_energy_err,
            fluctuation_term,
            fluctuation_term_err,
        )
    }
}

impl From<EndStateSample> for [f64; SAMPLE_FIELD_COUNT] {
    fn from(sample: EndStateSample) -> Self {
        sample.to_array()
    }
}

impl fmt::Display for EndStateSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  Average Energy: {:.6} ± {:.6}",
            self.mean_energy, self.mean_energy_err
        )?;
        write!(
            f,
            "  Fluctuation Term: {:.6} ± {:.6}",
            self.fluctuation_term, self.fluctuation_term_err
        )
    }
}

/// A labelled pair of end-state samples, the unit of work for batch integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndStatePair {
    pub label: String,
    pub lambda0: EndStateSample,
    pub lambda1: EndStateSample,
}

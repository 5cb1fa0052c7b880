use freeti::core::models::sample::{EndStateSample, SampleError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid sample '{input}': {source}")]
    Sample {
        input: String,
        #[source]
        source: SampleError,
    },

    #[error("Field {position} of '{input}' is not a number: '{field}'.")]
    InvalidNumber {
        input: String,
        position: usize,
        field: String,
    },
}

/// Parses `"mean,mean-err,fluctuation,fluctuation-err"` into the fixed-order array.
pub fn parse_sample(input: &str) -> Result<[f64; 4], ParseError> {
    let values = input
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(i, field)| {
            field.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                input: input.to_string(),
                position: i + 1,
                field: field.to_string(),
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    EndStateSample::from_slice(&values)
        .map(|sample| sample.to_array())
        .map_err(|source| ParseError::Sample {
            input: input.to_string(),
            source,
        })
}

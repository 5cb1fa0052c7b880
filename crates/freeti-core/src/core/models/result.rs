use serde::Serialize;
use std::fmt;

/// The estimated free-energy difference and its propagated uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntegrationResult {
    pub value: f64,
    pub uncertainty: f64,
}

impl IntegrationResult {
    pub fn new(value: f64, uncertainty: f64) -> Self {
        Self { value, uncertainty }
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite() && self.uncertainty.is_finite()
    }
}

impl From<IntegrationResult> for (f64, f64) {
    fn from(result: IntegrationResult) -> Self {
        (result.value, result.uncertainty)
    }
}

impl fmt::Display for IntegrationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        write!(
            f,
            "{:.*} ± {:.*}",
            precision, self.value, precision, self.uncertainty
        )
    }
}

/// Boltzmann constant in eV/K, the energy unit of the sampled simulations.
pub const BOLTZMANN_EV_PER_K: f64 = 8.617333262e-5;

/// Inverse thermal energy `1 / (k_B * T)` in 1/eV.
#[inline]
pub fn beta_from_temperature(temperature_kelvin: f64) -> f64 {
    1.0 / (BOLTZMANN_EV_PER_K * temperature_kelvin)
}

/// Arithmetic mean and standard error of the mean of a series.
///
/// Uses the sample (n - 1) standard deviation. An empty series gives `(NaN, NaN)`
/// and a single value gives `(value, NaN)`, so missing upstream data stays visible
/// as NaN all the way through the integration.
pub fn mean_and_sem(values: &[f64]) -> (f64, f64) {
    let n = values.len();
    if n == 0 {
        return (f64::NAN, f64::NAN);
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    if n == 1 {
        return (mean, f64::NAN);
    }

    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    (mean, (variance / n as f64).sqrt())
}

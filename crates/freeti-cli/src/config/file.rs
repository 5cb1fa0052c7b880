use crate::error::{CliError, Result};
use freeti::core::models::sample::EndStateSample;
use freeti::core::statistics::beta_from_temperature;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileSummarySample {
    pub mean_energy: f64,
    pub mean_energy_err: f64,
    pub fluctuation_term: f64,
    pub fluctuation_term_err: f64,
}

impl From<FileSummarySample> for EndStateSample {
    fn from(p: FileSummarySample) -> Self {
        Self::new(
            p.mean_energy,
            p.mean_energy_err,
            p.fluctuation_term,
            p.fluctuation_term_err,
        )
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileEnergySeries {
    pub energies: Vec<f64>,
}

/// An end-state given either as precomputed statistics or as a raw energy series.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FileSample {
    Summary(FileSummarySample),
    Series(FileEnergySeries),
}

impl FileSample {
    pub fn into_sample(self, temperature_kelvin: Option<f64>, name: &str) -> Result<EndStateSample> {
        match self {
            FileSample::Summary(summary) => Ok(summary.into()),
            FileSample::Series(series) => {
                let temperature = temperature_kelvin.ok_or_else(|| {
                    CliError::Config(format!(
                        "`{}` is given as an energy series, which requires `temperature-kelvin`.",
                        name
                    ))
                })?;
                if temperature <= 0.0 {
                    return Err(CliError::Config(format!(
                        "`temperature-kelvin` must be positive, got {}.",
                        temperature
                    )));
                }
                debug!(
                    "Summarizing {} energies for {} at {} K.",
                    series.energies.len(),
                    name,
                    temperature
                );
                Ok(EndStateSample::from_energies(
                    &series.energies,
                    beta_from_temperature(temperature),
                ))
            }
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FilePair {
    pub label: Option<String>,
    pub lambda0: FileSample,
    pub lambda1: FileSample,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileProfileConfig {
    pub points: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileReportConfig {
    pub precision: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub uncertainty_model: Option<String>,
    pub temperature_kelvin: Option<f64>,
    pub lambda0: Option<FileSample>,
    pub lambda1: Option<FileSample>,
    pub profile: Option<FileProfileConfig>,
    pub report: Option<FileReportConfig>,
    #[serde(default)]
    pub pair: Vec<FilePair>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_summary_and_series_samples() {
        let config = FileConfig::from_toml(
            r#"
            uncertainty-model = "legacy"
            temperature-kelvin = 300.0

            [lambda0]
            mean-energy = 2.93809314
            mean-energy-err = 0.00598791
            fluctuation-term = -0.08426016
            fluctuation-term-err = 0.00364061

            [lambda1]
            energies = [1.0, 2.0, 3.0]

            [profile]
            points = 50

            [report]
            precision = 6
            "#,
        )
        .unwrap();

        assert_eq!(config.uncertainty_model.as_deref(), Some("legacy"));
        assert_eq!(config.temperature_kelvin, Some(300.0));
        assert!(matches!(config.lambda0, Some(FileSample::Summary(_))));
        assert_eq!(
            config.lambda1,
            Some(FileSample::Series(FileEnergySeries {
                energies: vec![1.0, 2.0, 3.0]
            }))
        );
        assert_eq!(config.profile.unwrap().points, Some(50));
        assert_eq!(config.report.unwrap().precision, Some(6));
        assert!(config.pair.is_empty());
    }

    #[test]
    fn parses_batch_pairs_with_inline_tables() {
        let config = FileConfig::from_toml(
            r#"
            [[pair]]
            label = "666sym"
            lambda0 = { mean-energy = 1.0, mean-energy-err = 0.1, fluctuation-term = -0.2, fluctuation-term-err = 0.01 }
            lambda1 = { mean-energy = 0.5, mean-energy-err = 0.1, fluctuation-term = -0.3, fluctuation-term-err = 0.01 }

            [[pair]]
            lambda0 = { energies = [0.1, 0.2] }
            lambda1 = { energies = [0.3, 0.4] }
            "#,
        )
        .unwrap();

        assert_eq!(config.pair.len(), 2);
        assert_eq!(config.pair[0].label.as_deref(), Some("666sym"));
        assert_eq!(config.pair[1].label, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::from_toml("beta = 40.0").is_err());
        assert!(
            FileConfig::from_toml("[lambda0]\nmean-energy = 1.0\nmean-energy-err = 0.1\nfluctuation-term = 0.0\nfluctuation-term-err = 0.0\nextra = 1")
                .is_err()
        );
    }

    #[test]
    fn series_sample_requires_temperature() {
        let sample = FileSample::Series(FileEnergySeries {
            energies: vec![1.0, 2.0],
        });
        let result = sample.into_sample(None, "lambda1");
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn series_sample_is_summarized_with_beta() {
        let sample = FileSample::Series(FileEnergySeries {
            energies: vec![1.0, 2.0, 3.0],
        })
        .into_sample(Some(300.0), "lambda1")
        .unwrap();
        let beta = beta_from_temperature(300.0);
        assert!((sample.mean_energy - 2.0).abs() < 1e-12);
        assert!((sample.fluctuation_term + beta / 3.0).abs() < 1e-9);
    }

    #[test]
    fn from_file_reports_parse_errors_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "uncertainty-model = ").unwrap();

        let result = FileConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn from_file_reports_missing_file_as_io_error() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}

use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileSample};
use super::models::{AppConfig, BatchAppConfig};
use crate::cli::{BatchArgs, InputArgs};
use crate::error::{CliError, Result};
use freeti::core::models::sample::{EndStatePair, EndStateSample};
use freeti::engine::config as core_config;
use freeti::engine::error::EngineError;
use tracing::debug;

/// Merges CLI arguments over the optional input file over the built-in defaults.
pub fn build_config(
    args: &InputArgs,
    points_override: Option<usize>,
    precision_override: Option<usize>,
) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    if !file_config.pair.is_empty() {
        return Err(CliError::Config(
            "[[pair]] entries are only read by the `batch` command.".to_string(),
        ));
    }

    let temperature = args.temperature_kelvin.or(file_config.temperature_kelvin);
    let lambda0 = resolve_sample(args.lambda0, file_config.lambda0.take(), temperature, "lambda0")?;
    let lambda1 = resolve_sample(args.lambda1, file_config.lambda1.take(), temperature, "lambda1")?;

    let core_config = build_core_config(
        args.uncertainty_model.as_deref(),
        &file_config,
        points_override,
        &defaults,
    )?;
    let precision = precision_override
        .or(file_config.report.as_ref().and_then(|r| r.precision))
        .unwrap_or(defaults.precision);

    debug!(?lambda0, ?lambda1, ?core_config, precision, "Configuration resolved.");
    Ok(AppConfig {
        lambda0,
        lambda1,
        precision,
        core_config,
    })
}

pub fn build_batch_config(args: &BatchArgs) -> Result<BatchAppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = FileConfig::from_file(&args.config)?;
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    if file_config.pair.is_empty() {
        return Err(CliError::Config(format!(
            "No [[pair]] entries found in {:?}.",
            args.config
        )));
    }
    if file_config.lambda0.is_some() || file_config.lambda1.is_some() {
        return Err(CliError::Config(
            "Top-level [lambda0]/[lambda1] tables are not used by `batch`; list them under [[pair]]."
                .to_string(),
        ));
    }

    let temperature = args.temperature_kelvin.or(file_config.temperature_kelvin);
    let pairs = std::mem::take(&mut file_config.pair)
        .into_iter()
        .enumerate()
        .map(|(i, pair)| {
            let label = pair.label.unwrap_or_else(|| format!("pair-{}", i + 1));
            Ok(EndStatePair {
                lambda0: pair
                    .lambda0
                    .into_sample(temperature, &format!("{}.lambda0", label))?,
                lambda1: pair
                    .lambda1
                    .into_sample(temperature, &format!("{}.lambda1", label))?,
                label,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let core_config =
        build_core_config(args.uncertainty_model.as_deref(), &file_config, None, &defaults)?;
    let precision = args
        .precision
        .or(file_config.report.as_ref().and_then(|r| r.precision))
        .unwrap_or(defaults.precision);

    Ok(BatchAppConfig {
        pairs,
        precision,
        core_config,
    })
}

fn build_core_config(
    cli_model: Option<&str>,
    file_config: &FileConfig,
    points_override: Option<usize>,
    defaults: &DefaultsConfig,
) -> Result<core_config::IntegrationConfig> {
    let uncertainty_model = cli_model
        .or(file_config.uncertainty_model.as_deref())
        .unwrap_or(defaults.uncertainty_model.as_str())
        .parse::<core_config::UncertaintyModel>()
        .map_err(EngineError::from)?;
    let profile_points = points_override
        .or(file_config.profile.as_ref().and_then(|p| p.points))
        .unwrap_or(defaults.profile_points);

    let config = core_config::IntegrationConfigBuilder::new()
        .uncertainty_model(uncertainty_model)
        .profile_points(profile_points)
        .build()
        .map_err(EngineError::from)?;
    Ok(config)
}

fn resolve_sample(
    cli_arg: Option<[f64; 4]>,
    file_arg: Option<FileSample>,
    temperature_kelvin: Option<f64>,
    name: &str,
) -> Result<EndStateSample> {
    if let Some(values) = cli_arg {
        return Ok(EndStateSample::from(values));
    }
    file_arg
        .ok_or_else(|| {
            CliError::Config(format!(
                "A value for '{}' is required either in the config file or via --{}.",
                name, name
            ))
        })?
        .into_sample(temperature_kelvin, name)
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let parts: Vec<_> = kv_pair.splitn(2, '=').collect();
        if parts.len() != 2 {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        }
        let key = parts[0].trim();
        let value_str = parts[1].trim();

        match key {
            "uncertainty-model" => {
                config.uncertainty_model = Some(value_str.to_string());
            }
            "temperature-kelvin" => {
                config.temperature_kelvin = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })?);
            }
            "profile.points" => {
                config.profile.get_or_insert_with(Default::default).points =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
            }
            "report.precision" => {
                config.report.get_or_insert_with(Default::default).precision =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

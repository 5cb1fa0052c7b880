use crate::cli::BatchArgs;
use crate::config::build_batch_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use freeti::engine::progress::ProgressReporter;
use freeti::workflows::{self, integrate::BatchEntry};
use tracing::{info, warn};

pub fn run(args: BatchArgs) -> Result<()> {
    let config = build_batch_config(&args)?;
    info!("Loaded {} end-state pair(s) from {:?}.", config.pairs.len(), &args.config);

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let entries = workflows::integrate::run_batch(&config.pairs, &config.core_config, &reporter);

    let non_finite = entries.iter().filter(|e| !e.report.result.is_finite()).count();
    if non_finite > 0 {
        warn!("{} pair(s) produced a non-finite estimate.", non_finite);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{}", summary_line(entry, config.precision));
        }
    }

    Ok(())
}

fn summary_line(entry: &BatchEntry, precision: usize) -> String {
    let marker = if entry.report.intersection.in_domain() {
        ""
    } else {
        "  (endpoint average)"
    };
    format!(
        "{}: {:.*}{}",
        entry.label, precision, entry.report.result, marker
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use freeti::core::models::sample::EndStateSample;
    use freeti::engine::config::IntegrationConfig;

    fn entry(label: &str, lambda0: [f64; 4], lambda1: [f64; 4]) -> BatchEntry {
        BatchEntry {
            label: label.to_string(),
            report: workflows::integrate::run(
                &EndStateSample::from(lambda0),
                &EndStateSample::from(lambda1),
                &IntegrationConfig::default(),
            ),
        }
    }

    #[test]
    fn summary_line_for_crossing_pair_has_no_marker() {
        let e = entry("wt", [0.0, 0.01, -1.0, 0.01], [-1.0, 0.01, 0.5, 0.01]);
        assert_eq!(summary_line(&e, 4), "wt: -0.8333 ± 0.0123");
    }

    #[test]
    fn summary_line_marks_the_endpoint_average() {
        let e = entry("flat", [2.0, 0.1, -0.1, 0.01], [1.0, 0.1, -0.1, 0.01]);
        assert_eq!(summary_line(&e, 2), "flat: 1.50 ± 0.07  (endpoint average)");
    }
}

use crate::cli::IntegrateArgs;
use crate::config::build_config;
use crate::error::Result;
use freeti::workflows::{self, integrate::IntegrationReport};
use std::io::Write;
use tracing::{info, warn};

pub fn run(args: IntegrateArgs) -> Result<()> {
    let stdout = std::io::stdout();
    execute(&args, &mut stdout.lock())
}

fn execute<W: Write>(args: &IntegrateArgs, out: &mut W) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_config(&args.input, None, args.precision)?;

    info!(
        "Invoking the integration workflow ({} uncertainty model)...",
        config.core_config.uncertainty_model
    );
    let report = workflows::integrate::run(&config.lambda0, &config.lambda1, &config.core_config);

    if !report.result.is_finite() {
        warn!("The estimate is not finite; check the inputs for NaN or infinite values.");
    }

    write_report(&report, config.precision, args.json, out)
}

fn write_report<W: Write>(
    report: &IntegrationReport,
    precision: usize,
    json: bool,
    out: &mut W,
) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{:.*}", precision, report)?;
    }
    Ok(())
}

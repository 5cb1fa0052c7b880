use crate::utils::parser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "FreeTI Contributors",
    version,
    about = "FreeTI CLI - Free-energy differences between two end-states by thermodynamic integration over a piecewise-linear energy model.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Turn off all log output. Failures are still printed when the command exits
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for batch integration.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Integrate between the Lambda=0 and Lambda=1 end-states and print the estimate.
    Integrate(IntegrateArgs),
    /// Write the diagnostic curve (both lines and the integrand over Lambda) as CSV.
    Profile(ProfileArgs),
    /// Integrate every [[pair]] listed in a TOML file.
    Batch(BatchArgs),
}

/// End-state inputs shared by `integrate` and `profile`.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Path to an input file in TOML format with [lambda0] and [lambda1] tables.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Lambda=0 statistics as "mean,mean-err,fluctuation,fluctuation-err".
    #[arg(long, value_name = "E,dE,F,dF", value_parser = parser::parse_sample, allow_hyphen_values = true)]
    pub lambda0: Option<[f64; 4]>,

    /// Lambda=1 statistics as "mean,mean-err,fluctuation,fluctuation-err".
    #[arg(long, value_name = "E,dE,F,dF", value_parser = parser::parse_sample, allow_hyphen_values = true)]
    pub lambda1: Option<[f64; 4]>,

    /// Uncertainty propagation model: 'delta-method' or 'legacy'.
    #[arg(short = 'u', long, value_name = "MODEL")]
    pub uncertainty_model: Option<String>,

    /// Temperature used to summarize raw `energies` series in the input file.
    #[arg(short = 't', long = "temperature", value_name = "KELVIN")]
    pub temperature_kelvin: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S profile.points=200
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `integrate` subcommand.
#[derive(Args, Debug)]
pub struct IntegrateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of decimals for the intersection and the integral.
    #[arg(short, long, value_name = "INT")]
    pub precision: Option<usize>,

    /// Print the full report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `profile` subcommand.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of evenly spaced Lambda values in [0, 1].
    #[arg(short = 'n', long, value_name = "INT")]
    pub points: Option<usize>,

    /// Path for the CSV output. Writes to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Path to a TOML file with one [[pair]] entry per end-state pair.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    /// Uncertainty propagation model: 'delta-method' or 'legacy'.
    #[arg(short = 'u', long, value_name = "MODEL")]
    pub uncertainty_model: Option<String>,

    /// Temperature used to summarize raw `energies` series.
    #[arg(short = 't', long = "temperature", value_name = "KELVIN")]
    pub temperature_kelvin: Option<f64>,

    /// Number of decimals for the printed estimates.
    #[arg(short, long, value_name = "INT")]
    pub precision: Option<usize>,

    /// Print all reports as JSON instead of one line per pair.
    #[arg(long)]
    pub json: bool,

    /// Set a specific configuration value, overriding the config file.
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

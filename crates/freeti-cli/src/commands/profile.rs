use crate::cli::ProfileArgs;
use crate::config::build_config;
use crate::error::Result;
use freeti::core::io::profile_csv;
use freeti::core::profile::Profile;
use freeti::engine::error::EngineError;
use freeti::workflows;
use std::io::Write;
use tracing::info;

pub fn run(args: ProfileArgs) -> Result<()> {
    let profile = sample_profile(&args)?;

    match &args.output {
        Some(path) => {
            profile_csv::write_profile_to_path(&profile, path).map_err(EngineError::from)?;
            match profile.crossing() {
                Some((x, energy)) => println!(
                    "✓ Profile written to: {} (crossing at Lambda = {:.4}, E = {:.4})",
                    path.display(),
                    x,
                    energy
                ),
                None => println!(
                    "✓ Profile written to: {} (no crossing in [0, 1])",
                    path.display()
                ),
            }
        }
        None => {
            let stdout = std::io::stdout();
            write_csv(&profile, stdout.lock())?;
        }
    }

    Ok(())
}

fn sample_profile(args: &ProfileArgs) -> Result<Profile> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_config(&args.input, args.points, None)?;

    let report = workflows::integrate::run(&config.lambda0, &config.lambda1, &config.core_config);
    let points = config.core_config.profile.points;
    info!("Sampling the diagnostic profile at {} points.", points);
    Ok(report.profile(points).map_err(EngineError::from)?)
}

fn write_csv<W: Write>(profile: &Profile, out: W) -> Result<()> {
    profile_csv::write_profile(profile, out).map_err(EngineError::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::InputArgs;
    use crate::error::CliError;

    fn args(points: Option<usize>) -> ProfileArgs {
        ProfileArgs {
            input: InputArgs {
                lambda0: Some([0.0, 0.01, -1.0, 0.01]),
                lambda1: Some([-1.0, 0.01, 0.5, 0.01]),
                ..Default::default()
            },
            points,
            output: None,
        }
    }

    #[test]
    fn stdout_csv_has_a_header_and_one_row_per_point() {
        let profile = sample_profile(&args(Some(4))).unwrap();
        let mut out = Vec::new();
        write_csv(&profile, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "lambda,lambda0_line,lambda1_line,integrand");
        // Lines -2x and x - 2; the integrand switches at x = 2/3.
        assert_eq!(lines[1], "0.0,0.0,-2.0,0.0");
        assert_eq!(lines[4], "1.0,-2.0,-1.0,-1.0");
    }

    #[test]
    fn default_profile_uses_five_hundred_points() {
        let profile = sample_profile(&args(None)).unwrap();
        assert_eq!(profile.points().len(), 500);
        assert!(profile.crossing().is_some());
    }

    #[test]
    fn single_point_profile_is_rejected() {
        assert!(matches!(
            sample_profile(&args(Some(1))),
            Err(CliError::FreeTiCore(EngineError::Config { .. }))
        ));
    }

    #[test]
    fn output_path_receives_the_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.csv");
        let mut args = args(Some(3));
        args.output = Some(path.clone());

        run(args).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("lambda,lambda0_line,lambda1_line,integrand\n"));
        assert_eq!(content.lines().count(), 4);
    }
}

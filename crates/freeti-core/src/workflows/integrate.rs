use crate::core::models::intersection::Intersection;
use crate::core::models::linear::LinearModel;
use crate::core::models::result::IntegrationResult;
use crate::core::models::sample::{EndStatePair, EndStateSample};
use crate::core::profile::{Profile, ProfileError};
use crate::engine::config::{IntegrationConfig, UncertaintyModel};
use crate::engine::model_builder::{self, EndState};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::{integrator, solver, uncertainty};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Everything produced by one integration: the inputs, the intermediate models,
/// and the final estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegrationReport {
    pub lambda0: EndStateSample,
    pub lambda1: EndStateSample,
    pub model0: LinearModel,
    pub model1: LinearModel,
    pub intersection: Intersection,
    pub result: IntegrationResult,
    pub uncertainty_model: UncertaintyModel,
}

impl IntegrationReport {
    pub fn profile(&self, num_points: usize) -> Result<Profile, ProfileError> {
        Profile::sample(
            &self.lambda0,
            &self.lambda1,
            &self.model0,
            &self.model1,
            &self.intersection,
            num_points,
        )
    }
}

impl fmt::Display for IntegrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(4);
        writeln!(f, "Input Data Summary:")?;
        writeln!(f, "Lambda=0:")?;
        writeln!(f, "{}", self.lambda0)?;
        writeln!(f, "Lambda=1:")?;
        writeln!(f, "{}", self.lambda1)?;
        writeln!(f, "{}", "-".repeat(50))?;
        writeln!(f, "{:.*}", p, self.intersection)?;
        write!(f, "Integral = {:.*}", p, self.result)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub label: String,
    pub report: IntegrationReport,
}

/// Integrates the piecewise-linear model between the two end-states.
///
/// Never fails: parallel or out-of-domain lines take the endpoint-average branch, and
/// non-finite inputs come back as a non-finite result for the caller to reject.
#[instrument(skip_all, name = "integration_workflow")]
pub fn run(
    lambda0: &EndStateSample,
    lambda1: &EndStateSample,
    config: &IntegrationConfig,
) -> IntegrationReport {
    let model0 = model_builder::build(lambda0, EndState::Lambda0);
    let model1 = model_builder::build(lambda1, EndState::Lambda1);
    debug!(?model0, ?model1, "Built linear models.");

    let intersection = solver::solve(&model0, &model1, config.uncertainty_model);
    match intersection {
        Intersection::Found { x, x_err } => {
            debug!("Lines cross at x = {:.6} ± {:.6}.", x, x_err);
        }
        Intersection::OutOfDomain { x } => {
            warn!(
                "Lines cross at x = {:.4}, outside [0, 1]; using the endpoint average.",
                x
            );
        }
        Intersection::Parallel => {
            warn!("Lines are parallel; using the endpoint average.");
        }
        Intersection::Undefined => {
            warn!("Crossing is undefined due to non-finite input; result will be NaN.");
        }
    }

    let value = integrator::integrate(lambda0, lambda1, &model0, &model1, &intersection);
    let error = uncertainty::integral_error(
        lambda0,
        lambda1,
        &model0,
        &model1,
        &intersection,
        config.uncertainty_model,
    );
    let result = IntegrationResult::new(value, error);
    if !result.is_finite() {
        warn!("Integration produced a non-finite result: {}", result);
    }

    IntegrationReport {
        lambda0: *lambda0,
        lambda1: *lambda1,
        model0,
        model1,
        intersection,
        result,
        uncertainty_model: config.uncertainty_model,
    }
}

/// Convenience entry point over the raw `[mean, mean_err, fluctuation, fluctuation_err]`
/// arrays with the default configuration.
pub fn free_energy(lambda0: [f64; 4], lambda1: [f64; 4]) -> IntegrationResult {
    run(
        &EndStateSample::from(lambda0),
        &EndStateSample::from(lambda1),
        &IntegrationConfig::default(),
    )
    .result
}

/// Integrates many independent pairs in parallel; the output keeps the input order.
#[instrument(skip_all, name = "batch_integration_workflow")]
pub fn run_batch(
    pairs: &[EndStatePair],
    config: &IntegrationConfig,
    reporter: &ProgressReporter,
) -> Vec<BatchEntry> {
    reporter.report(Progress::BatchStart {
        total_pairs: pairs.len() as u64,
    });
    info!("Integrating {} end-state pair(s).", pairs.len());

    let entries: Vec<BatchEntry> = pairs
        .par_iter()
        .map(|pair| {
            let report = run(&pair.lambda0, &pair.lambda1, config);
            reporter.report(Progress::PairDone {
                in_domain: report.intersection.in_domain(),
            });
            BatchEntry {
                label: pair.label.clone(),
                report,
            }
        })
        .collect();

    reporter.report(Progress::BatchFinish);

    let fallbacks = entries
        .iter()
        .filter(|e| !e.report.intersection.in_domain())
        .count();
    info!(
        "Batch complete: {} in-domain, {} endpoint-average.",
        entries.len() - fallbacks,
        fallbacks
    );
    entries
}

use freeti::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressState, ProgressStyle};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Bar plus the running tally of which branch each finished pair took.
struct BatchBar {
    pb: ProgressBar,
    crossings: u64,
    fallbacks: u64,
}

impl BatchBar {
    fn tally(&self) -> String {
        format!(
            "{} crossing, {} endpoint average",
            self.crossings, self.fallbacks
        )
    }
}

#[derive(Clone)]
pub struct CliProgressHandler {
    state: Arc<Mutex<BatchBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0)
            .with_style(Self::bar_style())
            .with_message("Waiting for pairs...");
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        pb.finish_and_clear();

        Self {
            state: Arc::new(Mutex::new(BatchBar {
                pb,
                crossings: 0,
                fallbacks: 0,
            })),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let state = self.state.clone();

        Box::new(move |progress: Progress| {
            let Ok(mut bar) = state.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::BatchStart { total_pairs } => {
                    bar.crossings = 0;
                    bar.fallbacks = 0;
                    bar.pb.reset();
                    bar.pb.set_length(total_pairs);
                    bar.pb.set_position(0);
                    let message = bar.tally();
                    bar.pb.set_message(message);
                }
                Progress::PairDone { in_domain } => {
                    if in_domain {
                        bar.crossings += 1;
                    } else {
                        bar.fallbacks += 1;
                    }
                    bar.pb.inc(1);
                    let message = bar.tally();
                    bar.pb.set_message(message);
                }
                Progress::BatchFinish => {
                    let message = format!("✓ {}", bar.tally());
                    bar.pb.finish_with_message(message);
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} pairs ({eta}) {msg}")
            .expect("Failed to create bar style template")
            .with_key(
                "eta",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
                },
            )
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

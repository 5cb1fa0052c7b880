/// Events emitted while a batch of end-state pairs is integrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    BatchStart { total_pairs: u64 },
    /// One pair finished; `in_domain` is false when it took the endpoint-average branch.
    PairDone { in_domain: bool },
    BatchFinish,
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Optional sink for [`Progress`] events. Shared by reference across rayon workers.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::PairDone { in_domain: true });
    }

    #[test]
    fn reporter_forwards_events_to_callback() {
        let fallbacks = AtomicUsize::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::PairDone { in_domain: false } = event {
                fallbacks.fetch_add(1, Ordering::SeqCst);
            }
        }));
        reporter.report(Progress::BatchStart { total_pairs: 3 });
        reporter.report(Progress::PairDone { in_domain: false });
        reporter.report(Progress::PairDone { in_domain: true });
        reporter.report(Progress::PairDone { in_domain: false });
        reporter.report(Progress::BatchFinish);
        assert_eq!(fallbacks.load(Ordering::SeqCst), 2);
    }
}

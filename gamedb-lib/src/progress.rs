//! Nearest-neighbor scan progress reporting.

/// Default number of subjects between progress updates.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 1000;

/// Trait for receiving scan progress updates.
///
/// Implementations must be `Sync`: the parallel scan reports from worker
/// threads.
pub trait ScanProgress: Sync {
    /// Called once before the scan with the number of subjects to search
    /// from and the total number of names.
    fn on_start(&self, subjects: usize, total: usize);

    /// Called after each subject's closest match is found. `done` counts the
    /// subjects finished before this one, so it starts at 0.
    fn on_subject(&self, done: usize, total: usize);

    /// Called once the report is assembled, with the number of pairs kept.
    fn on_complete(&self, kept: usize);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ScanProgress for SilentProgress {
    fn on_start(&self, _subjects: usize, _total: usize) {}
    fn on_subject(&self, _done: usize, _total: usize) {}
    fn on_complete(&self, _kept: usize) {}
}

/// A progress reporter that logs to the `log` crate every `interval` subjects.
pub struct LogProgress {
    interval: usize,
}

impl LogProgress {
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
        }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRESS_INTERVAL)
    }
}

impl ScanProgress for LogProgress {
    fn on_start(&self, subjects: usize, total: usize) {
        log::debug!("Scanning {} of {} names for near duplicates", subjects, total);
    }

    fn on_subject(&self, done: usize, total: usize) {
        if done.is_multiple_of(self.interval) {
            log::info!("Progress: {}/{}", done, total);
        }
    }

    fn on_complete(&self, kept: usize) {
        log::debug!("Scan complete: {} pair(s) under threshold", kept);
    }
}

//! Terminal progress display for the Levenshtein scan.

use std::io::IsTerminal;

use gamedb_lib::{LogProgress, ScanProgress, SilentProgress};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress bar over scan subjects, drawn on stderr.
pub(crate) struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub(crate) fn new() -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
        bar.set_style(
            ProgressStyle::with_template(
                "  {spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )
            .expect("static pattern")
            .progress_chars("=> ")
            .tick_chars("/-\\|"),
        );
        Self { bar }
    }
}

impl ScanProgress for BarProgress {
    fn on_start(&self, subjects: usize, _total: usize) {
        self.bar.set_length(subjects as u64);
        self.bar.set_position(0);
    }

    fn on_subject(&self, _done: usize, _total: usize) {
        self.bar.inc(1);
    }

    fn on_complete(&self, _kept: usize) {
        self.bar.finish_and_clear();
    }
}

/// Pick a reporter: nothing under `--quiet`, a bar on a terminal, and
/// periodic log lines otherwise.
pub(crate) fn scan_progress(quiet: bool, interval: usize) -> Box<dyn ScanProgress> {
    if quiet {
        Box::new(SilentProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(BarProgress::new())
    } else {
        Box::new(LogProgress::new(interval))
    }
}

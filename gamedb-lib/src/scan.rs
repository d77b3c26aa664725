//! Nearest-neighbor edit-distance scan for spotting near-duplicate names.
//!
//! The scan is advisory: it reads the deduplicated name list and reports
//! likely duplicates that the alias table missed (typos, punctuation
//! differences). It never modifies the catalog.
//!
//! The search window is deliberately one-sided. Subject `i` is compared only
//! against the names after it, and the last two names are never subjects.
//! This window decides which pairs can ever be reported, so it must not be
//! widened to a full all-pairs search.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rayon::prelude::*;

use crate::error::ScanError;
use crate::progress::ScanProgress;

/// Pairs at or above this edit distance are left out of the report.
pub const DISTANCE_THRESHOLD: usize = 5;

/// One line of the near-duplicate report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceEntry {
    pub subject: String,
    pub neighbor: String,
    pub distance: usize,
}

impl DistanceEntry {
    pub fn new(subject: impl Into<String>, neighbor: impl Into<String>, distance: usize) -> Self {
        Self {
            subject: subject.into(),
            neighbor: neighbor.into(),
            distance,
        }
    }
}

impl fmt::Display for DistanceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} = {}", self.subject, self.neighbor, self.distance)
    }
}

/// Options controlling how the scan is executed.
///
/// None of these change the report; they only affect speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Search subjects on the rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Size of a dedicated rayon pool. `None` uses the global pool.
    pub threads: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }
}

/// Levenshtein distance counted in Unicode scalar values.
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Find the candidate closest to `target` by edit distance.
///
/// Ties go to the earliest candidate. Returns `None` if `candidates` is empty.
pub fn closest<'a, S: AsRef<str>>(target: &str, candidates: &'a [S]) -> Option<(&'a str, usize)> {
    let mut best: Option<(&'a str, usize)> = None;
    for candidate in candidates {
        let candidate = candidate.as_ref();
        let distance = edit_distance(target, candidate);
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((candidate, distance));
            if distance == 0 {
                break;
            }
        }
    }
    best
}

/// Closest match for one subject: `(subject, neighbor, distance)`.
type Nearest<'a> = (&'a str, &'a str, usize);

/// Report near-duplicate names in a deduplicated, order-preserved name list.
///
/// For each subject `names[i]` with `i < len - 2`, finds the closest name in
/// `names[i + 1..]`, keeps pairs with distance below [`DISTANCE_THRESHOLD`],
/// and returns them sorted by ascending distance. Equal distances keep
/// subject order. Fewer than three names yield an empty report.
pub fn nearest_neighbors<S>(
    names: &[S],
    options: &ScanOptions,
    progress: &dyn ScanProgress,
) -> Result<Vec<DistanceEntry>, ScanError>
where
    S: AsRef<str> + Sync,
{
    let total = names.len();
    let subjects = total.saturating_sub(2);
    progress.on_start(subjects, total);
    let started = Instant::now();

    let found = if options.parallel {
        match options.threads {
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
                pool.install(|| search_parallel(names, subjects, progress))
            }
            None => search_parallel(names, subjects, progress),
        }
    } else {
        search_sequential(names, subjects, progress)
    };

    // Subject -> neighbor, overwriting on repeat subjects. Insertion order is
    // kept so equal distances sort in subject order.
    let mut slots: HashMap<&str, usize> = HashMap::with_capacity(found.len());
    let mut pairs: Vec<Nearest> = Vec::with_capacity(found.len());
    for nearest in found {
        match slots.get(nearest.0) {
            Some(&slot) => pairs[slot] = nearest,
            None => {
                slots.insert(nearest.0, pairs.len());
                pairs.push(nearest);
            }
        }
    }

    let mut report: Vec<DistanceEntry> = pairs
        .into_iter()
        .filter(|&(_, _, distance)| distance < DISTANCE_THRESHOLD)
        .map(|(subject, neighbor, distance)| DistanceEntry::new(subject, neighbor, distance))
        .collect();
    report.sort_by_key(|entry| entry.distance);

    log::debug!(
        "Nearest-neighbor scan of {} names took {:.2?}",
        total,
        started.elapsed()
    );
    progress.on_complete(report.len());
    Ok(report)
}

fn search_one<S: AsRef<str>>(names: &[S], i: usize) -> Option<Nearest<'_>> {
    let subject = names[i].as_ref();
    let (neighbor, distance) = closest(subject, &names[i + 1..])?;
    Some((subject, neighbor, distance))
}

fn search_sequential<'a, S: AsRef<str>>(
    names: &'a [S],
    subjects: usize,
    progress: &dyn ScanProgress,
) -> Vec<Nearest<'a>> {
    let total = names.len();
    (0..subjects)
        .filter_map(|i| {
            let nearest = search_one(names, i);
            progress.on_subject(i, total);
            nearest
        })
        .collect()
}

fn search_parallel<'a, S: AsRef<str> + Sync>(
    names: &'a [S],
    subjects: usize,
    progress: &dyn ScanProgress,
) -> Vec<Nearest<'a>> {
    let total = names.len();
    let done = AtomicUsize::new(0);
    (0..subjects)
        .into_par_iter()
        .filter_map(|i| {
            let nearest = search_one(names, i);
            progress.on_subject(done.fetch_add(1, Ordering::Relaxed), total);
            nearest
        })
        .collect()
}

//! Random partition of crates across content types.
//!
//! A partition is drawn one content type at a time, each draw leaving at
//! least one crate for every content type still to come; the last type takes
//! whatever is left. Whether a partition can support the requested goals is
//! a property of the whole partition, so a partition that cannot is thrown
//! away and a new one is drawn from scratch.

use std::ops::Range;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::config::GenerationConfig;
use crate::content::ContentType;

/// Number of crates holding each content type.
///
/// Every count is at least one and the counts sum to the configured crate
/// total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CrateBucket {
    counts: [usize; ContentType::COUNT],
}

impl CrateBucket {
    pub(crate) const fn from_counts(counts: [usize; ContentType::COUNT]) -> Self {
        Self { counts }
    }

    /// Returns the number of crates holding `content`.
    #[must_use]
    pub fn count(&self, content: ContentType) -> usize {
        self.counts.get(content.ordinal()).copied().unwrap_or(0)
    }

    /// Returns the total number of crates.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Iterates over `(content type, count)` pairs in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (ContentType, usize)> + '_ {
        ContentType::ALL
            .into_iter()
            .zip(self.counts.iter().copied())
    }

    /// Returns how many goals this partition can support for `persons`.
    ///
    /// Each content type contributes at most one goal per crate and at most
    /// one goal per person.
    #[must_use]
    pub fn max_goals(&self, persons: usize) -> usize {
        self.counts.iter().map(|&count| count.min(persons)).sum()
    }

    /// Iterates over the 1-based crate numbers assigned to each content type.
    ///
    /// Crates are numbered consecutively in content type order, so the first
    /// range starts at crate 1 and the last one ends at the crate total.
    ///
    /// # Example
    ///
    /// ```
    /// use drone_problem::{ContentType, GenerationConfig, ProblemSize, RandomSource, distribute_crates};
    ///
    /// let size = ProblemSize { drones: 1, carriers: 0, locations: 1, persons: 1, crates: 2, goals: 2 };
    /// let config = GenerationConfig::try_from(size).expect("feasible");
    /// let bucket = distribute_crates(&mut RandomSource::seeded(1), &config);
    ///
    /// let ranges: Vec<_> = bucket.crate_ranges().collect();
    /// assert_eq!(ranges, vec![(ContentType::Food, 1..2), (ContentType::Medicine, 2..3)]);
    /// ```
    pub fn crate_ranges(&self) -> impl Iterator<Item = (ContentType, Range<usize>)> + '_ {
        let mut next = 1;
        self.iter().map(move |(content, count)| {
            let start = next;
            next += count;
            (content, start..next)
        })
    }
}

/// Randomly partitions the configured crates across content types.
///
/// The returned bucket gives every content type at least one crate, uses
/// exactly `config.crates()` crates, and satisfies
/// `bucket.max_goals(config.persons()) >= config.goals()`.
///
/// Partitions failing the last condition are redrawn. A validated
/// configuration guarantees that a satisfying partition exists, so the loop
/// terminates.
pub fn distribute_crates<R>(rng: &mut R, config: &GenerationConfig) -> CrateBucket
where
    R: Rng + ?Sized,
{
    let mut attempt: usize = 1;
    loop {
        let bucket = sample_partition(rng, config.crates());
        let max_goals = bucket.max_goals(config.persons());
        if max_goals >= config.goals() {
            debug!(attempt, ?bucket, max_goals, "accepted crate partition");
            return bucket;
        }
        debug!(
            attempt,
            max_goals,
            goals = config.goals(),
            "crate partition cannot support goals; redrawing"
        );
        attempt += 1;
    }
}

/// Draws one partition of `crates` with every count at least one.
fn sample_partition<R>(rng: &mut R, crates: usize) -> CrateBucket
where
    R: Rng + ?Sized,
{
    let mut counts = [0; ContentType::COUNT];
    let mut remaining = crates;

    if let Some((last, leading)) = counts.split_last_mut() {
        let leading_len = leading.len();
        for (index, slot) in leading.iter_mut().enumerate() {
            // One crate stays reserved for each content type after this one.
            let reserved = leading_len - index;
            let drawn = rng.random_range(1..=remaining - reserved);
            *slot = drawn;
            remaining -= drawn;
        }
        *last = remaining;
    }

    CrateBucket::from_counts(counts)
}

//! Random assignment of content needs to persons.
//!
//! Goals are committed one at a time. A drawn (person, content type) pair is
//! rejected when the person already needs that content or when every crate of
//! that content is already spoken for; otherwise it is committed for good.
//! Committing a goal never invalidates an earlier one, so a rejection only
//! redraws the current slot.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::buckets::CrateBucket;
use crate::config::GenerationConfig;
use crate::content::ContentType;

/// A requirement that a person ends up holding one crate of a content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Goal {
    /// Zero-based person index.
    pub person: usize,
    /// Content type the person needs.
    pub content: ContentType,
}

/// Which persons need which content types.
///
/// One row per person, one column per content type. A cell is either set or
/// not, so no person can need the same content type twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NeedMatrix {
    rows: Vec<[bool; ContentType::COUNT]>,
}

impl NeedMatrix {
    pub(crate) fn empty(persons: usize) -> Self {
        Self {
            rows: vec![[false; ContentType::COUNT]; persons],
        }
    }

    /// Marks `content` as needed by `person`.
    ///
    /// Returns `false` when the cell was already set or the person does not
    /// exist.
    pub(crate) fn claim(&mut self, person: usize, content: ContentType) -> bool {
        let Some(cell) = self
            .rows
            .get_mut(person)
            .and_then(|row| row.get_mut(content.ordinal()))
        else {
            return false;
        };
        if *cell {
            return false;
        }
        *cell = true;
        true
    }

    /// Returns the number of persons (rows).
    #[must_use]
    pub const fn persons(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether `person` needs `content`.
    #[must_use]
    pub fn needs(&self, person: usize, content: ContentType) -> bool {
        self.rows
            .get(person)
            .and_then(|row| row.get(content.ordinal()))
            .copied()
            .unwrap_or(false)
    }

    /// Returns the total number of goals.
    #[must_use]
    pub fn goal_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell).count())
            .sum()
    }

    /// Returns how many persons need `content`.
    #[must_use]
    pub fn column_count(&self, content: ContentType) -> usize {
        self.rows
            .iter()
            .filter(|row| row.get(content.ordinal()).copied().unwrap_or(false))
            .count()
    }

    /// Iterates over all goals, ordered by person and then content type.
    pub fn goals(&self) -> impl Iterator<Item = Goal> + '_ {
        self.rows.iter().enumerate().flat_map(|(person, row)| {
            ContentType::ALL
                .into_iter()
                .zip(row.iter().copied())
                .filter_map(move |(content, needed)| needed.then_some(Goal { person, content }))
        })
    }
}

/// Randomly chooses exactly `config.goals()` (person, content type) needs.
///
/// No content type is needed by more persons than `bucket` has crates of
/// that type, and no person needs the same content type twice.
///
/// The bucket must come from [`crate::distribute_crates`] for the same
/// configuration; that guarantees enough capacity for every goal, so each
/// slot is eventually filled.
pub fn assign_needs<R>(rng: &mut R, config: &GenerationConfig, bucket: &CrateBucket) -> NeedMatrix
where
    R: Rng + ?Sized,
{
    let persons = config.persons();
    let mut need = NeedMatrix::empty(persons);
    let mut rejected: usize = 0;

    for _ in 0..config.goals() {
        loop {
            let person = rng.random_range(0..persons);
            let content: ContentType = rng.random();
            if need.column_count(content) < bucket.count(content) && need.claim(person, content) {
                break;
            }
            rejected += 1;
        }
    }

    debug!(goals = config.goals(), rejected, "assigned person needs");
    need
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;
    use crate::buckets::distribute_crates;
    use crate::config::ProblemSize;

    fn config(persons: usize, crates: usize, goals: usize) -> GenerationConfig {
        GenerationConfig::try_from(ProblemSize {
            drones: 1,
            carriers: 0,
            locations: 2,
            persons,
            crates,
            goals,
        })
        .expect("feasible size")
    }

    fn assert_respects_bucket(need: &NeedMatrix, bucket: &CrateBucket) {
        for content in ContentType::ALL {
            assert!(
                need.column_count(content) <= bucket.count(content),
                "{content} over capacity: {need:?} vs {bucket:?}"
            );
        }
    }

    #[rstest]
    #[case(3, 3, 3)]
    #[case(1, 2, 2)]
    #[case(6, 12, 9)]
    #[case(4, 4, 2)]
    #[case(5, 3, 0)]
    fn assigns_exact_goal_count_within_capacity(
        #[case] persons: usize,
        #[case] crates: usize,
        #[case] goals: usize,
    ) {
        let config = config(persons, crates, goals);
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let bucket = distribute_crates(&mut rng, &config);
            let need = assign_needs(&mut rng, &config, &bucket);

            assert_eq!(need.persons(), persons);
            assert_eq!(need.goal_count(), goals);
            assert_eq!(need.goals().count(), goals);
            assert_respects_bucket(&need, &bucket);
        }
    }

    #[test]
    fn single_person_needs_everything_when_goals_match_types() {
        let config = config(1, 2, 2);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let bucket = distribute_crates(&mut rng, &config);

        let need = assign_needs(&mut rng, &config, &bucket);

        assert!(need.needs(0, ContentType::Food));
        assert!(need.needs(0, ContentType::Medicine));
    }

    #[test]
    fn maximum_goals_fill_every_cell() {
        let config = config(4, 8, 8);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let bucket = distribute_crates(&mut rng, &config);

        let need = assign_needs(&mut rng, &config, &bucket);

        for person in 0..4 {
            for content in ContentType::ALL {
                assert!(
                    need.needs(person, content),
                    "person {person} lacks {content}"
                );
            }
        }
    }

    #[test]
    fn small_bucket_limits_its_column() {
        let config = config(3, 3, 3);
        let bucket = CrateBucket::from_counts([1, 2]);
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let need = assign_needs(&mut rng, &config, &bucket);

            assert_eq!(need.column_count(ContentType::Food), 1);
            assert_eq!(need.column_count(ContentType::Medicine), 2);
        }
    }

    #[test]
    fn single_crate_type_is_needed_exactly_once() {
        let config = config(5, 6, 6);
        let bucket = CrateBucket::from_counts([1, 5]);
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let need = assign_needs(&mut rng, &config, &bucket);

            assert_eq!(need.column_count(ContentType::Food), 1);
            assert_eq!(need.column_count(ContentType::Medicine), 5);
            assert_eq!(need.goal_count(), 6);
        }
    }

    #[test]
    fn claim_rejects_repeated_and_unknown_cells() {
        let mut need = NeedMatrix::empty(2);

        assert!(need.claim(1, ContentType::Food));
        assert!(!need.claim(1, ContentType::Food));
        assert!(!need.claim(2, ContentType::Food));
        assert!(!need.needs(2, ContentType::Food));
    }

    #[test]
    fn goals_are_ordered_by_person_then_content() {
        let mut need = NeedMatrix::empty(3);
        need.claim(2, ContentType::Food);
        need.claim(0, ContentType::Medicine);
        need.claim(0, ContentType::Food);

        let goals: Vec<_> = need.goals().collect();

        assert_eq!(
            goals,
            vec![
                Goal {
                    person: 0,
                    content: ContentType::Food
                },
                Goal {
                    person: 0,
                    content: ContentType::Medicine
                },
                Goal {
                    person: 2,
                    content: ContentType::Food
                },
            ]
        );
    }
}

//! Problem size configuration and feasibility validation.
//!
//! A [`ProblemSize`] is whatever the caller asked for. A
//! [`GenerationConfig`] is a problem size that has been checked against the
//! feasibility preconditions the generators rely on to terminate:
//!
//! - `goals <= crates`
//! - `crates >= ContentType::COUNT`
//! - `goals <= ContentType::COUNT * persons`
//! - at least one non-depot location whenever there are persons
//!
//! The generators only accept a [`GenerationConfig`], so an infeasible
//! request is rejected with a [`ConfigError`] instead of looping forever.

use serde::{Deserialize, Serialize};

use crate::content::ContentType;
use crate::error::ConfigError;

/// Raw object counts for a problem, before validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProblemSize {
    /// Number of drones.
    pub drones: usize,
    /// Number of carriers.
    pub carriers: usize,
    /// Number of locations, not counting the depot.
    pub locations: usize,
    /// Number of persons.
    pub persons: usize,
    /// Number of crates.
    pub crates: usize,
    /// Number of (person, content type) goals.
    pub goals: usize,
}

/// A validated problem size.
///
/// # Example
///
/// ```
/// use drone_problem::{ConfigError, GenerationConfig, ProblemSize};
///
/// let size = ProblemSize {
///     drones: 1,
///     carriers: 0,
///     locations: 3,
///     persons: 3,
///     crates: 3,
///     goals: 3,
/// };
/// let config = GenerationConfig::try_from(size).expect("feasible");
/// assert_eq!(config.problem_name(), "drone_problem_d1_r0_l3_p3_c3_g3_ct2");
///
/// let too_many = ProblemSize { goals: 4, ..size };
/// assert!(matches!(
///     GenerationConfig::try_from(too_many),
///     Err(ConfigError::MoreGoalsThanCrates { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GenerationConfig {
    size: ProblemSize,
}

impl TryFrom<ProblemSize> for GenerationConfig {
    type Error = ConfigError;

    fn try_from(size: ProblemSize) -> Result<Self, Self::Error> {
        if size.goals > size.crates {
            return Err(ConfigError::MoreGoalsThanCrates {
                goals: size.goals,
                crates: size.crates,
            });
        }

        if size.crates < ContentType::COUNT {
            return Err(ConfigError::TooFewCrates {
                crates: size.crates,
                content_types: ContentType::COUNT,
            });
        }

        let max_goals = ContentType::COUNT.saturating_mul(size.persons);
        if size.goals > max_goals {
            return Err(ConfigError::TooManyGoals {
                persons: size.persons,
                max_goals,
                goals: size.goals,
            });
        }

        if size.persons > 0 && size.locations == 0 {
            return Err(ConfigError::NoLocationsForPersons {
                persons: size.persons,
            });
        }

        Ok(Self { size })
    }
}

impl GenerationConfig {
    /// Returns the underlying object counts.
    #[must_use]
    pub const fn size(&self) -> ProblemSize {
        self.size
    }

    /// Returns the number of drones.
    #[must_use]
    pub const fn drones(&self) -> usize {
        self.size.drones
    }

    /// Returns the number of carriers.
    #[must_use]
    pub const fn carriers(&self) -> usize {
        self.size.carriers
    }

    /// Returns the number of locations, not counting the depot.
    #[must_use]
    pub const fn locations(&self) -> usize {
        self.size.locations
    }

    /// Returns the number of persons.
    #[must_use]
    pub const fn persons(&self) -> usize {
        self.size.persons
    }

    /// Returns the number of crates.
    #[must_use]
    pub const fn crates(&self) -> usize {
        self.size.crates
    }

    /// Returns the number of goals.
    #[must_use]
    pub const fn goals(&self) -> usize {
        self.size.goals
    }

    /// Returns the problem name encoding every count and the content type
    /// count, so a generated file can be traced back to its parameters.
    #[must_use]
    pub fn problem_name(&self) -> String {
        let ProblemSize {
            drones,
            carriers,
            locations,
            persons,
            crates,
            goals,
        } = self.size;
        format!(
            "drone_problem_d{drones}_r{carriers}_l{locations}_p{persons}_c{crates}_g{goals}_ct{}",
            ContentType::COUNT
        )
    }
}

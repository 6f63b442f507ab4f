//! Random, feasible problem generation for the emergency drone delivery
//! planning domain.
//!
//! Drones start at a depot together with crates of supplies and must deliver
//! the right content types to persons spread over a set of locations. This
//! crate generates such problems for an automated planner, guaranteeing that
//! every generated problem is solvable with respect to the requested counts.
//!
//! # Overview
//!
//! - [`GenerationConfig`] validates a [`ProblemSize`] against the feasibility
//!   preconditions before any randomness is used
//! - [`distribute_crates`] partitions crates across [`ContentType`]s so that
//!   every requested goal can be met
//! - [`assign_needs`] decides which persons need which content types
//! - [`generate_location_coords`] and [`place_persons`] lay out the map
//! - [`generate_problem`] runs all of the above against one [`RandomSource`]
//! - [`PddlProblem`] renders the result and [`write_problem`] stores it
//!
//! # Example
//!
//! ```
//! use drone_problem::{GenerationConfig, PddlProblem, ProblemSize, RandomSource, generate_problem};
//!
//! let size = ProblemSize {
//!     drones: 1,
//!     carriers: 0,
//!     locations: 3,
//!     persons: 3,
//!     crates: 3,
//!     goals: 3,
//! };
//! let config = GenerationConfig::try_from(size).expect("feasible size");
//! let problem = generate_problem(&config, &mut RandomSource::seeded(42));
//!
//! assert_eq!(problem.needs.goal_count(), 3);
//! assert!(PddlProblem::new(&problem).to_string().contains("(:domain drone-domain)"));
//! ```

mod atomic_io;
mod buckets;
pub mod cli;
mod config;
mod content;
mod error;
mod generator;
mod needs;
mod output;
mod pddl;
mod placement;
mod random;

pub use buckets::{CrateBucket, distribute_crates};
pub use config::{GenerationConfig, ProblemSize};
pub use content::ContentType;
pub use error::{ConfigError, OutputError};
pub use generator::{ProblemInstance, generate_problem};
pub use needs::{Goal, NeedMatrix, assign_needs};
pub use output::{OutputFormat, problem_file_name, write_problem};
pub use pddl::{DOMAIN_NAME, PddlProblem};
pub use placement::{
    COORDINATE_RANGE, LocationCoordinate, LocationId, generate_location_coords, place_persons,
};
pub use random::RandomSource;

//! PDDL rendering of a generated problem.
//!
//! Objects are named with sequential 1-based identifiers per kind
//! (`drone1`, `loc1`, `crate1`, `person1`, `carrier1`); the depot keeps the
//! reserved name `depot`.

use std::fmt;

use crate::generator::ProblemInstance;
use crate::placement::LocationId;

/// Name of the planning domain the problems are written for.
pub const DOMAIN_NAME: &str = "drone-domain";

/// Displays a [`ProblemInstance`] as a PDDL problem definition.
///
/// # Example
///
/// ```
/// use drone_problem::{GenerationConfig, PddlProblem, ProblemSize, RandomSource, generate_problem};
///
/// let size = ProblemSize { drones: 1, carriers: 0, locations: 2, persons: 1, crates: 2, goals: 2 };
/// let config = GenerationConfig::try_from(size).expect("feasible");
/// let problem = generate_problem(&config, &mut RandomSource::seeded(7));
///
/// let text = PddlProblem::new(&problem).to_string();
/// assert!(text.starts_with("(define (problem drone_problem_d1_r0_l2_p1_c2_g2_ct2)"));
/// assert!(text.contains("\t(has-content person1 food)\n"));
/// assert!(text.contains("\t(has-content person1 medicine)\n"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PddlProblem<'a> {
    problem: &'a ProblemInstance,
}

impl<'a> PddlProblem<'a> {
    /// Wraps `problem` for rendering.
    #[must_use]
    pub const fn new(problem: &'a ProblemInstance) -> Self {
        Self { problem }
    }

    fn write_objects(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = &self.problem.config;
        writeln!(f, "(:objects")?;
        for drone in 1..=config.drones() {
            writeln!(f, "\tdrone{drone} - drone")?;
        }
        for index in 0..=config.locations() {
            writeln!(f, "\t{} - location", LocationId::from_index(index))?;
        }
        for crate_number in 1..=config.crates() {
            writeln!(f, "\tcrate{crate_number} - crate")?;
        }
        for (content, _) in self.problem.bucket.iter() {
            writeln!(f, "\t{content} - contents")?;
        }
        for person in 1..=config.persons() {
            writeln!(f, "\tperson{person} - person")?;
        }
        for carrier in 1..=config.carriers() {
            writeln!(f, "\tcarrier{carrier} - carrier")?;
        }
        writeln!(f, ")")
    }

    fn write_init(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = &self.problem.config;
        writeln!(f, "(:init")?;
        for drone in 1..=config.drones() {
            writeln!(f, "\t(at-drone drone{drone} {})", LocationId::DEPOT)?;
            writeln!(f, "\t(arm1-free drone{drone})")?;
            writeln!(f, "\t(arm2-free drone{drone})")?;
        }
        for crate_number in 1..=config.crates() {
            writeln!(f, "\t(at-crate crate{crate_number} {})", LocationId::DEPOT)?;
        }
        for (content, crates) in self.problem.bucket.crate_ranges() {
            for crate_number in crates {
                writeln!(f, "\t(crate-contents crate{crate_number} {content})")?;
            }
        }
        for (index, location) in self.problem.person_locations.iter().enumerate() {
            writeln!(f, "\t(at-person person{} {location})", index + 1)?;
        }
        writeln!(f, ")")
    }

    fn write_goal(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "(:goal (and")?;
        for drone in 1..=self.problem.config.drones() {
            writeln!(f)?;
            writeln!(f, "\t(at-drone drone{drone} {})", LocationId::DEPOT)?;
        }
        for goal in self.problem.needs.goals() {
            writeln!(
                f,
                "\t(has-content person{} {})",
                goal.person + 1,
                goal.content
            )?;
        }
        writeln!(f, "\t))")
    }
}

impl fmt::Display for PddlProblem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "(define (problem {})",
            self.problem.config.problem_name()
        )?;
        writeln!(f, "(:domain {DOMAIN_NAME})")?;
        self.write_objects(f)?;
        self.write_init(f)?;
        self.write_goal(f)?;
        writeln!(f, ")")
    }
}

//! Writing generated problems to an output directory.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::atomic_io::write_atomic;
use crate::error::OutputError;
use crate::generator::ProblemInstance;
use crate::pddl::PddlProblem;

/// File format for a written problem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// PDDL problem definition for the planner.
    #[default]
    Pddl,
    /// JSON dump of the generated instance.
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Pddl => "pddl",
            Self::Json => "json",
        }
    }

    fn render(self, problem: &ProblemInstance) -> Result<String, OutputError> {
        match self {
            Self::Pddl => Ok(PddlProblem::new(problem).to_string()),
            Self::Json => {
                serde_json::to_string_pretty(problem).map_err(|err| OutputError::SerializeError {
                    message: err.to_string(),
                })
            }
        }
    }
}

/// Returns the file name a problem is written under, e.g.
/// `drone_problem_d1_r0_l3_p3_c3_g3_ct2.pddl`.
#[must_use]
pub fn problem_file_name(problem: &ProblemInstance, format: OutputFormat) -> String {
    format!("{}.{}", problem.config.problem_name(), format.extension())
}

/// Writes `problem` into `output_dir`, creating the directory if needed.
///
/// The file is named after the problem's counts (see
/// [`problem_file_name`]) and replaced atomically if it already exists.
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns [`OutputError`] if the directory cannot be opened, the problem
/// cannot be serialized, or the file cannot be written.
pub fn write_problem(
    output_dir: &Utf8Path,
    problem: &ProblemInstance,
    format: OutputFormat,
) -> Result<Utf8PathBuf, OutputError> {
    let open_error = |err: std::io::Error| OutputError::OpenDirError {
        path: output_dir.to_path_buf(),
        message: err.to_string(),
    };
    Dir::create_ambient_dir_all(output_dir, ambient_authority()).map_err(open_error)?;
    let dir = Dir::open_ambient_dir(output_dir, ambient_authority()).map_err(open_error)?;

    let file_name = problem_file_name(problem, format);
    let path = output_dir.join(&file_name);
    let contents = format.render(problem)?;
    write_atomic(&dir, Utf8Path::new(&file_name), &path, &contents)?;

    info!(%path, ?format, "problem written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use cap_std::ambient_authority;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::config::{GenerationConfig, ProblemSize};
    use crate::generator::generate_problem;
    use crate::random::RandomSource;

    struct OutputFixture {
        dir: Utf8PathBuf,
    }

    impl Drop for OutputFixture {
        fn drop(&mut self) {
            if let Ok(root) = Dir::open_ambient_dir(".", ambient_authority()) {
                drop(root.remove_dir_all(&self.dir));
            }
        }
    }

    #[fixture]
    fn output() -> OutputFixture {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
        OutputFixture {
            dir: Utf8PathBuf::from("target")
                .join("drone-problem-tests")
                .join(format!("output-{}-{counter}", std::process::id())),
        }
    }

    #[fixture]
    fn problem() -> ProblemInstance {
        let config = GenerationConfig::try_from(ProblemSize {
            drones: 1,
            carriers: 0,
            locations: 3,
            persons: 3,
            crates: 3,
            goals: 3,
        })
        .expect("feasible size");
        generate_problem(&config, &mut RandomSource::seeded(2026))
    }

    #[rstest]
    #[case(OutputFormat::Pddl, "drone_problem_d1_r0_l3_p3_c3_g3_ct2.pddl")]
    #[case(OutputFormat::Json, "drone_problem_d1_r0_l3_p3_c3_g3_ct2.json")]
    fn file_name_encodes_counts(
        problem: ProblemInstance,
        #[case] format: OutputFormat,
        #[case] expected: &str,
    ) {
        assert_eq!(problem_file_name(&problem, format), expected);
    }

    #[rstest]
    fn writes_pddl_into_new_directory(output: OutputFixture, problem: ProblemInstance) {
        let path = write_problem(&output.dir, &problem, OutputFormat::Pddl).expect("write");

        let dir = Dir::open_ambient_dir(&output.dir, ambient_authority()).expect("open output");
        let name = path.file_name().expect("file name");
        let contents = dir.read_to_string(name).expect("read back");
        assert_eq!(contents, PddlProblem::new(&problem).to_string());
    }

    #[rstest]
    fn writes_json_dump(output: OutputFixture, problem: ProblemInstance) {
        let path = write_problem(&output.dir, &problem, OutputFormat::Json).expect("write");

        let dir = Dir::open_ambient_dir(&output.dir, ambient_authority()).expect("open output");
        let name = path.file_name().expect("file name");
        let contents = dir.read_to_string(name).expect("read back");
        let json: serde_json::Value = serde_json::from_str(&contents).expect("valid json");
        assert_eq!(json["config"]["goals"], 3);
        assert_eq!(json["personLocations"].as_array().map(Vec::len), Some(3));
    }
}

//! Behavioural tests for the problem generator CLI.
//!
//! These scenarios validate that the CLI writes problem files named after
//! the requested counts and reports failures for infeasible inputs.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use camino::Utf8PathBuf;
use test_support::{list_files, open_output_dir, unique_output_dir};

use drone_problem::cli::{CliError, ParseOutcome, RunReport, parse_args, run};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

#[derive(Default, ScenarioState)]
struct World {
    output_dir: Slot<Utf8PathBuf>,
    command_result: Slot<Result<RunReport, CliError>>,
}

#[fixture]
fn world() -> World {
    World::default()
}

fn output_dir(world: &World) -> Utf8PathBuf {
    world.output_dir.get().expect("output dir should be set")
}

fn command_result(world: &World) -> Result<RunReport, CliError> {
    world.command_result.get().expect("command result set")
}

fn run_cli(args: &str, output_dir: &Utf8PathBuf) -> Result<RunReport, CliError> {
    let argv = std::iter::once("drone-problem-gen")
        .chain(args.split_whitespace())
        .chain(["--output-dir", output_dir.as_str()])
        .map(str::to_owned);
    match parse_args(argv)? {
        ParseOutcome::Options(options) => run(&options),
        ParseOutcome::Display(text) => panic!("unexpected display output: {text}"),
    }
}

fn read_output(world: &World, file_name: &str) -> String {
    let dir = open_output_dir(&output_dir(world)).expect("open output dir");
    dir.read_to_string(file_name).expect("read problem file")
}

#[given("an empty output directory")]
fn an_empty_output_directory(world: &World) {
    world.output_dir.set(unique_output_dir("cli-bdd"));
}

#[when("the CLI runs with arguments \"{args}\"")]
fn the_cli_runs_with_arguments(world: &World, args: String) {
    let result = run_cli(&args, &output_dir(world));
    world.command_result.set(result);
}

#[then("the CLI reports success")]
fn the_cli_reports_success(world: &World) {
    let report = command_result(world).expect("CLI should succeed");
    assert!(report.path.starts_with(output_dir(world)));
}

#[then("the file \"{name}\" is a PDDL problem")]
fn the_file_is_a_pddl_problem(world: &World, name: String) {
    let contents = read_output(world, &name);
    let problem_name = name.trim_end_matches(".pddl");

    assert!(contents.starts_with(&format!("(define (problem {problem_name})\n")));
    assert!(contents.contains("(:domain drone-domain)"));
    assert!(contents.contains("(:objects"));
    assert!(contents.contains("(:init"));
    assert!(contents.contains("(:goal (and"));
    assert_eq!(contents.matches("(has-content ").count(), 3);
}

#[then("the file \"{name}\" holds {goals:usize} goals")]
fn the_file_holds_goals(world: &World, name: String, goals: usize) {
    let contents = read_output(world, &name);
    let json: serde_json::Value = serde_json::from_str(&contents).expect("valid JSON");
    let needs = json["needs"].as_array().expect("needs matrix");
    let assigned = needs
        .iter()
        .filter_map(serde_json::Value::as_array)
        .flatten()
        .filter(|cell| cell.as_bool() == Some(true))
        .count();

    assert_eq!(assigned, goals);
}

#[then("the CLI reports the error \"{message}\"")]
fn the_cli_reports_the_error(world: &World, message: String) {
    let err = command_result(world).expect_err("CLI should fail");
    let rendered = err.to_string();
    assert!(rendered.contains(&message), "unexpected error: {rendered}");
}

#[then("no problem file is written")]
fn no_problem_file_is_written(world: &World) {
    let files = list_files(&output_dir(world)).expect("list output dir");
    assert!(files.is_empty(), "unexpected files: {files:?}");
}

#[scenario(
    path = "tests/features/cli.feature",
    name = "Generating a PDDL problem"
)]
fn generating_a_pddl_problem(world: World) {
    let _ = world;
}

#[scenario(path = "tests/features/cli.feature", name = "Generating a JSON dump")]
fn generating_a_json_dump(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/cli.feature",
    name = "Rejecting an infeasible configuration"
)]
fn rejecting_an_infeasible_configuration(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/cli.feature",
    name = "Rejecting missing arguments"
)]
fn rejecting_missing_arguments(world: World) {
    let _ = world;
}

//! Behaviour-driven step definitions driving the score CLI scenarios.

use super::helpers::{PINNED_NOW, ScoreFiles, write_utf8};
use super::*;
use crate::score::run_score_with;
use clap::Parser;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use stint_core::ScoringError;

struct ScoreWorld {
    files: ScoreFiles,
    include_history: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ScoreWorld {
    fn new() -> Self {
        Self {
            files: ScoreFiles::new(),
            include_history: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self, mode: &str) -> Vec<String> {
        let mut argv = vec![
            "stint".to_owned(),
            "score".to_owned(),
            self.files.opportunities.as_str().to_owned(),
        ];
        if *self.include_history.borrow() {
            argv.extend([
                format!("--{ARG_HISTORY}"),
                self.files.history.as_str().to_owned(),
            ]);
        }
        argv.extend([
            format!("--{ARG_MODE}"),
            mode.to_owned(),
            format!("--{ARG_NOW}"),
            PINNED_NOW.to_owned(),
        ]);
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn run(&self, mode: &str) {
        let invocation = self.build_command_line(mode);
        let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
        let outcome = parsed.and_then(|cli| match cli.command {
            Command::Score(args) => {
                let mut buffer = self.stdout.borrow_mut();
                run_score_with(args, &mut *buffer)
            }
        });
        self.result.replace(Some(outcome));
    }

    fn printed(&self) -> Vec<serde_json::Value> {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        result.as_ref().expect("expected success");
        let output: serde_json::Value =
            serde_json::from_slice(&self.stdout.borrow()).expect("output should be JSON");
        output.as_array().cloned().expect("output should be an array")
    }

    fn with_error(&self, check: impl FnOnce(&CliError)) {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error);
    }
}

#[fixture]
fn world() -> ScoreWorld {
    ScoreWorld::new()
}

#[given("opportunity and history files exist on disk")]
fn files_exist(#[from(world)] world: &ScoreWorld) {
    world.files.write_both();
}

#[given("I limit the output to one opportunity")]
fn limit_to_one(#[from(world)] world: &ScoreWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_LIMIT}"), "1".to_owned()]);
}

#[given("the history file contains invalid JSON")]
fn history_is_invalid(#[from(world)] world: &ScoreWorld) {
    write_utf8(&world.files.history, b"{ not valid json");
}

#[given("I omit the history path")]
fn omit_history(#[from(world)] world: &ScoreWorld) {
    *world.include_history.borrow_mut() = false;
}

#[when("I run the score command in balanced mode")]
fn run_balanced(#[from(world)] world: &ScoreWorld) {
    world.run("balanced");
}

#[when("I run the score command in championship mode")]
fn run_championship(#[from(world)] world: &ScoreWorld) {
    world.run("championship");
}

#[then("the command succeeds and prints the sprint race first")]
fn sprint_first(#[from(world)] world: &ScoreWorld) {
    let entries = world.printed();
    assert_eq!(entries.len(), 2);
    let first = entries.first().expect("first entry");
    assert_eq!(first["seriesId"], 139);
    assert_eq!(first["score"]["factors"]["fatigueRisk"], 90);
}

#[then("the command prints exactly one opportunity")]
fn exactly_one(#[from(world)] world: &ScoreWorld) {
    assert_eq!(world.printed().len(), 1);
}

#[then("the command fails because the mode is unknown")]
fn fails_unknown_mode(#[from(world)] world: &ScoreWorld) {
    world.with_error(|error| match error {
        CliError::InvalidMode(ScoringError::InvalidMode { mode }) => {
            assert_eq!(mode, "championship");
        }
        other => panic!("expected InvalidMode, found {other:?}"),
    });
}

#[then("the command fails because the history JSON is invalid")]
fn fails_invalid_json(#[from(world)] world: &ScoreWorld) {
    world.with_error(|error| match error {
        CliError::ParseInput { field, .. } => assert_eq!(*field, ARG_HISTORY),
        other => panic!("expected ParseInput, found {other:?}"),
    });
}

#[then("the command fails because the history path is missing")]
fn fails_missing_history(#[from(world)] world: &ScoreWorld) {
    world.with_error(|error| match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_HISTORY),
        other => panic!("expected MissingArgument, found {other:?}"),
    });
}

macro_rules! register_score_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/score_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ScoreWorld) {
            let _ = world;
        }
    };
}

register_score_scenario!(score_happy_path, "scoring opportunities from JSON");
register_score_scenario!(score_limited_output, "limiting the ranked output");
register_score_scenario!(score_unknown_mode, "rejecting unknown modes");
register_score_scenario!(score_invalid_history, "rejecting invalid history JSON");
register_score_scenario!(score_missing_history, "rejecting missing history paths");

//! Score command implementation for the stint CLI.

use std::cmp::Reverse;
use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use stint_core::{
    Clock, FixedClock, OpportunityScorer, OptimizationMode, RacingOpportunity, Score,
    SystemClock, UserHistory,
};
use stint_scorer::ScoringEngine;

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_HISTORY, ARG_LIMIT, ARG_MODE, ARG_NOW, ARG_OPPORTUNITIES, CliError, ENV_HISTORY,
    ENV_MODE, ENV_OPPORTUNITIES,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score every opportunity in a JSON array against a driver's \
                 history and print them ranked by overall score. Inputs can \
                 come from CLI flags, configuration files, or environment \
                 variables.",
    about = "Score and rank racing opportunities"
)]
#[ortho_config(prefix = "STINT")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing an array of opportunities.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) opportunities_path: Option<Utf8PathBuf>,
    /// Path to a JSON file containing the driver's history.
    #[arg(long = ARG_HISTORY, value_name = "path")]
    #[serde(default)]
    pub(crate) history: Option<Utf8PathBuf>,
    /// Optimisation mode: balanced, irating_push or safety_recovery.
    #[arg(long = ARG_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<String>,
    /// Pin the clock to an RFC 3339 instant for reproducible output.
    #[arg(long = ARG_NOW, value_name = "timestamp")]
    #[serde(default)]
    pub(crate) now: Option<String>,
    /// Print at most this many opportunities.
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    /// Path to the JSON opportunities file.
    pub(crate) opportunities_path: Utf8PathBuf,
    /// Path to the JSON history file.
    pub(crate) history_path: Utf8PathBuf,
    /// Parsed optimisation mode.
    pub(crate) mode: OptimizationMode,
    /// Pinned instant, if any.
    pub(crate) now: Option<DateTime<Utc>>,
    /// Maximum number of results to print.
    pub(crate) limit: Option<usize>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.opportunities_path, ARG_OPPORTUNITIES)?;
        Self::require_existing(&self.history_path, ARG_HISTORY)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let opportunities_path = args.opportunities_path.ok_or(CliError::MissingArgument {
            field: ARG_OPPORTUNITIES,
            env: ENV_OPPORTUNITIES,
        })?;
        let history_path = args.history.ok_or(CliError::MissingArgument {
            field: ARG_HISTORY,
            env: ENV_HISTORY,
        })?;
        let mode = args
            .mode
            .ok_or(CliError::MissingArgument {
                field: ARG_MODE,
                env: ENV_MODE,
            })?
            .parse::<OptimizationMode>()?;
        let now = args.now.map(|value| parse_now(&value)).transpose()?;

        Ok(Self {
            opportunities_path,
            history_path,
            mode,
            now,
            limit: args.limit,
        })
    }
}

fn parse_now(value: &str) -> Result<DateTime<Utc>, CliError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|source| CliError::InvalidNow {
            value: value.to_owned(),
            source,
        })
}

/// One scored opportunity as printed by `stint score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedOpportunity {
    /// Series identifier.
    pub series_id: u32,
    /// Series display name.
    pub series_name: String,
    /// Track identifier.
    pub track_id: u32,
    /// Track display name.
    pub track_name: String,
    /// The engine's assessment.
    pub score: Score,
}

pub(super) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

pub(super) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_score_config(args)?;
    let opportunities: Vec<RacingOpportunity> =
        load_json(&config.opportunities_path, ARG_OPPORTUNITIES)?;
    let history: UserHistory = load_json(&config.history_path, ARG_HISTORY)?;

    let ranked = match config.now {
        Some(instant) => {
            score_with_clock(FixedClock::new(instant), &config, opportunities, &history)
        }
        None => score_with_clock(SystemClock, &config, opportunities, &history),
    };
    write_ranked(writer, &ranked)
}

fn resolve_score_config(args: ScoreArgs) -> Result<ScoreConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn score_with_clock<C: Clock>(
    clock: C,
    config: &ScoreConfig,
    opportunities: Vec<RacingOpportunity>,
    history: &UserHistory,
) -> Vec<RankedOpportunity> {
    let engine = ScoringEngine::with_clock(clock);
    log::info!(
        "scoring {} opportunities for {} in {} mode",
        opportunities.len(),
        history.user_id,
        config.mode
    );
    rank_opportunities(&engine, opportunities, history, config.mode, config.limit)
}

/// Score every opportunity and order the results best first.
///
/// Ties on the overall score fall back to priority, then to input order.
pub(crate) fn rank_opportunities(
    scorer: &dyn OpportunityScorer,
    opportunities: Vec<RacingOpportunity>,
    history: &UserHistory,
    mode: OptimizationMode,
    limit: Option<usize>,
) -> Vec<RankedOpportunity> {
    let mut ranked: Vec<RankedOpportunity> = opportunities
        .into_iter()
        .map(|opportunity| {
            let score = scorer.score(&opportunity, history, mode);
            RankedOpportunity {
                series_id: opportunity.series_id,
                series_name: opportunity.series_name,
                track_id: opportunity.track_id,
                track_name: opportunity.track_name,
                score,
            }
        })
        .collect();
    // Stable sort keeps input order among equal keys.
    ranked.sort_by_key(|entry| {
        (
            Reverse(entry.score.overall),
            Reverse(entry.score.priority_score),
        )
    });
    if let Some(max_entries) = limit {
        ranked.truncate(max_entries);
    }
    ranked
}

/// Loads a JSON document from disk.
pub(super) fn load_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

fn write_ranked(writer: &mut dyn Write, ranked: &[RankedOpportunity]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(ranked).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}

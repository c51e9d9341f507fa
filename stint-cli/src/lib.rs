//! Command-line interface for scoring racing opportunities.
//!
//! `stint score` reads a JSON array of opportunities and a JSON user
//! history, scores every opportunity under the chosen mode and prints the
//! ranked results as JSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod score;

pub use error::CliError;
pub use score::RankedOpportunity;

use score::ScoreArgs;

pub(crate) const ARG_OPPORTUNITIES: &str = "opportunities";
pub(crate) const ARG_HISTORY: &str = "history";
pub(crate) const ARG_MODE: &str = "mode";
pub(crate) const ARG_NOW: &str = "now";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ENV_OPPORTUNITIES: &str = "STINT_CMDS_SCORE_OPPORTUNITIES_PATH";
pub(crate) const ENV_HISTORY: &str = "STINT_CMDS_SCORE_HISTORY";
pub(crate) const ENV_MODE: &str = "STINT_CMDS_SCORE_MODE";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, when
/// an input file cannot be read or parsed, or when writing the output
/// fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => score::run_score(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "stint",
    about = "Recommend which racing opportunities suit a driver",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score and rank opportunities against a driver's history.
    Score(ScoreArgs),
}

#[cfg(test)]
mod tests;

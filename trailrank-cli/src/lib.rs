//! Command-line interface for ranking hiking routes and packing for them.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod gear;
mod rank;

pub use error::CliError;

use gear::{GearArgs, run_gear};
use rank::{RankArgs, run_rank};

pub(crate) const ARG_RANK_PREFERENCES: &str = "preferences";
pub(crate) const ARG_RANK_CATALOG: &str = "catalog";
pub(crate) const ARG_RANK_WEIGHT_FLOOR: &str = "weight-floor";
pub(crate) const ARG_RANK_NO_WEIGHT_FLOOR: &str = "no-weight-floor";
pub(crate) const ARG_RANK_NEUTRAL_SCORE: &str = "neutral-score";
pub(crate) const ENV_RANK_PREFERENCES: &str = "TRAILRANK_CMDS_RANK_PREFERENCES_PATH";

pub(crate) const ARG_GEAR_DAYS: &str = "days";
pub(crate) const ARG_GEAR_TECHNICALITY: &str = "technicality";
pub(crate) const ARG_GEAR_WEATHER: &str = "weather";
pub(crate) const ARG_GEAR_SEASON: &str = "season";
pub(crate) const ARG_GEAR_GROUP_SIZE: &str = "group-size";
pub(crate) const ARG_GEAR_EXPERIENCED: &str = "experienced";
pub(crate) const ENV_GEAR_DAYS: &str = "TRAILRANK_CMDS_GEAR_DAYS";
pub(crate) const ENV_GEAR_TECHNICALITY: &str = "TRAILRANK_CMDS_GEAR_TECHNICALITY";
pub(crate) const ENV_GEAR_WEATHER: &str = "TRAILRANK_CMDS_GEAR_WEATHER";
pub(crate) const ENV_GEAR_SEASON: &str = "TRAILRANK_CMDS_GEAR_SEASON";

/// Run the CLI with the current process arguments and environment.
///
/// Log output goes to stderr and follows `RUST_LOG`; warnings are shown by
/// default.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or inputs are
/// invalid, or when the output cannot be written.
pub fn run() -> Result<(), CliError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init()
        .map_err(CliError::Logging)?;
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
        Command::Gear(args) => run_gear(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "trailrank",
    about = "Rank hiking routes against a hiker's preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank catalog routes for a preference record.
    Rank(RankArgs),
    /// Recommend gear for a trip.
    Gear(GearArgs),
}

#[cfg(test)]
mod tests;

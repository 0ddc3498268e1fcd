//! Gear command implementation for the trailrank CLI.

use std::io::Write;

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use trailrank_core::Difficulty;
use trailrank_gear::{GearAdvisor, GearList, GearRequest, Season, Weather};

use crate::rank::write_json;
use crate::{
    ARG_GEAR_DAYS, ARG_GEAR_EXPERIENCED, ARG_GEAR_GROUP_SIZE, ARG_GEAR_SEASON,
    ARG_GEAR_TECHNICALITY, ARG_GEAR_WEATHER, CliError, ENV_GEAR_DAYS, ENV_GEAR_SEASON,
    ENV_GEAR_TECHNICALITY, ENV_GEAR_WEATHER,
};

/// CLI arguments for the `gear` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Recommend gear for a trip, split into essential, \
                 recommended and optional items. Trip details can come from \
                 CLI flags, configuration files, or environment variables.",
    about = "Recommend gear for a trip"
)]
#[ortho_config(prefix = "TRAILRANK")]
pub(crate) struct GearArgs {
    /// Days on the trail.
    #[arg(long = ARG_GEAR_DAYS, value_name = "n")]
    #[serde(default)]
    pub(crate) days: Option<u32>,
    /// Technical grade: easy, moderate, hard or expert.
    #[arg(long = ARG_GEAR_TECHNICALITY, value_name = "grade")]
    #[serde(default)]
    pub(crate) technicality: Option<Difficulty>,
    /// Expected weather: clear, rain, wind or cold.
    #[arg(long = ARG_GEAR_WEATHER, value_name = "weather")]
    #[serde(default)]
    pub(crate) weather: Option<Weather>,
    /// Season: dry or wet.
    #[arg(long = ARG_GEAR_SEASON, value_name = "season")]
    #[serde(default)]
    pub(crate) season: Option<Season>,
    /// Hikers in the party; defaults to one.
    #[arg(long = ARG_GEAR_GROUP_SIZE, value_name = "n")]
    #[serde(default)]
    pub(crate) group_size: Option<u32>,
    /// The party has done similar trips before.
    #[arg(long = ARG_GEAR_EXPERIENCED)]
    #[serde(default)]
    pub(crate) experienced: bool,
}

impl GearArgs {
    pub(crate) fn into_request(self) -> Result<GearRequest, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        GearRequest::try_from(merged)
    }
}

impl TryFrom<GearArgs> for GearRequest {
    type Error = CliError;

    fn try_from(args: GearArgs) -> Result<Self, Self::Error> {
        let request = Self {
            days: args.days.ok_or(CliError::MissingArgument {
                field: ARG_GEAR_DAYS,
                env: ENV_GEAR_DAYS,
            })?,
            technicality: args.technicality.ok_or(CliError::MissingArgument {
                field: ARG_GEAR_TECHNICALITY,
                env: ENV_GEAR_TECHNICALITY,
            })?,
            weather: args.weather.ok_or(CliError::MissingArgument {
                field: ARG_GEAR_WEATHER,
                env: ENV_GEAR_WEATHER,
            })?,
            season: args.season.ok_or(CliError::MissingArgument {
                field: ARG_GEAR_SEASON,
                env: ENV_GEAR_SEASON,
            })?,
            group_size: args.group_size.unwrap_or(1),
            has_experience: args.experienced,
        };
        request.validate()?;
        Ok(request)
    }
}

pub(crate) fn run_gear(args: GearArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_gear_with(args, &GearAdvisor::default(), &mut stdout)
}

pub(crate) fn run_gear_with(
    args: GearArgs,
    advisor: &GearAdvisor,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let list = execute_gear(args, advisor)?;
    write_json(writer, &list)
}

fn execute_gear(args: GearArgs, advisor: &GearAdvisor) -> Result<GearList, CliError> {
    let request = args.into_request()?;
    log::debug!(
        "recommending gear for {} hikers over {} days",
        request.group_size,
        request.days
    );
    Ok(advisor.recommend(&request)?)
}

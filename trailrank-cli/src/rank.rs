//! Rank command implementation for the trailrank CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use trailrank_core::{Catalog, CatalogDocument, Ranker, Ranking, UserPreferences};
use trailrank_data::{CostEstimator, LocationTable, seed_catalog};
use trailrank_topsis::{CriteriaAugmenter, EngineConfig, TopsisEngine, WeightingRules};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_RANK_CATALOG, ARG_RANK_NEUTRAL_SCORE, ARG_RANK_NO_WEIGHT_FLOOR, ARG_RANK_PREFERENCES,
    ARG_RANK_WEIGHT_FLOOR, CliError, ENV_RANK_PREFERENCES,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank hiking routes for the hiker described in a JSON \
                 preference record. Routes come from a JSON catalog document \
                 or, when none is given, from the built-in catalog. The \
                 ranking, its methodology and diagnostics are printed as JSON.",
    about = "Rank routes for a preference record"
)]
#[ortho_config(prefix = "TRAILRANK")]
pub(crate) struct RankArgs {
    /// Path to a JSON file containing the hiker's preferences.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) preferences_path: Option<Utf8PathBuf>,
    /// Path to a JSON catalog document replacing the built-in routes.
    #[arg(long = ARG_RANK_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Lower bound applied to each factor weight before renormalising.
    #[arg(
        long = ARG_RANK_WEIGHT_FLOOR,
        value_name = "weight",
        conflicts_with = "no_weight_floor"
    )]
    #[serde(default)]
    pub(crate) weight_floor: Option<f64>,
    /// Let preference adjustments push weights below zero.
    #[arg(long = ARG_RANK_NO_WEIGHT_FLOOR)]
    #[serde(default)]
    pub(crate) no_weight_floor: bool,
    /// Score given to routes whose closeness is undefined.
    #[arg(long = ARG_RANK_NEUTRAL_SCORE, value_name = "score")]
    #[serde(default)]
    pub(crate) neutral_score: Option<f64>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Where the routes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogSource {
    /// The routes compiled into `trailrank-data`.
    BuiltIn,
    /// A JSON catalog document on disk.
    File(Utf8PathBuf),
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the JSON preference record.
    pub(crate) preferences_path: Utf8PathBuf,
    /// Catalog to rank.
    pub(crate) catalog: CatalogSource,
    /// Weighting rules with the requested floor.
    pub(crate) weighting: WeightingRules,
    /// Engine tunables.
    pub(crate) engine: EngineConfig,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.preferences_path, ARG_RANK_PREFERENCES)?;
        if let CatalogSource::File(path) = &self.catalog {
            require_existing(path, ARG_RANK_CATALOG)?;
        }
        Ok(())
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let preferences_path = args.preferences_path.ok_or(CliError::MissingArgument {
            field: ARG_RANK_PREFERENCES,
            env: ENV_RANK_PREFERENCES,
        })?;
        let catalog = args
            .catalog
            .map_or(CatalogSource::BuiltIn, CatalogSource::File);

        let weighting = if args.no_weight_floor {
            WeightingRules::unclamped()
        } else if let Some(floor) = args.weight_floor {
            WeightingRules::default().with_min_weight(Some(unit_interval(
                ARG_RANK_WEIGHT_FLOOR,
                floor,
            )?))
        } else {
            WeightingRules::default()
        };

        let mut engine = EngineConfig::default();
        if let Some(score) = args.neutral_score {
            engine.neutral_score = unit_interval(ARG_RANK_NEUTRAL_SCORE, score)?;
        }

        Ok(Self {
            preferences_path,
            catalog,
            weighting,
            engine,
        })
    }
}

fn unit_interval(field: &'static str, value: f64) -> Result<f64, CliError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(CliError::OutOfRange {
            field,
            range: "0..=1",
            value,
        })
    }
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
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

/// Builds the ranker for one `rank` invocation.
pub(crate) trait RankerBuilder {
    fn build(&self, config: &RankConfig) -> Box<dyn Ranker>;
}

/// TOPSIS over the stock location and cost tables.
pub(crate) struct DefaultRankerBuilder;

impl RankerBuilder for DefaultRankerBuilder {
    fn build(&self, config: &RankConfig) -> Box<dyn Ranker> {
        let locations = LocationTable::default();
        let augmenter =
            CriteriaAugmenter::new(locations.clone(), CostEstimator::new(locations));
        Box::new(
            TopsisEngine::new(augmenter)
                .with_weighting(config.weighting.clone())
                .with_config(config.engine),
        )
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &DefaultRankerBuilder, &mut stdout)
}

pub(crate) fn run_rank_with(
    args: RankArgs,
    builder: &dyn RankerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let ranking = execute_rank(&config, builder)?;
    write_json(writer, &ranking)
}

pub(crate) fn execute_rank(
    config: &RankConfig,
    builder: &dyn RankerBuilder,
) -> Result<Ranking, CliError> {
    let preferences = load_preferences(&config.preferences_path)?;
    let catalog = load_catalog(&config.catalog)?;
    log::debug!(
        "ranking {} routes for a hiker from {}",
        catalog.len(),
        preferences.location
    );
    builder
        .build(config)
        .rank(&catalog, &preferences)
        .map_err(|source| CliError::Rank { source })
}

/// Load and validate a preference record.
pub(crate) fn load_preferences(path: &Utf8Path) -> Result<UserPreferences, CliError> {
    let preferences: UserPreferences = load_json(path, ARG_RANK_PREFERENCES)?;
    preferences
        .validate()
        .map_err(|source| CliError::InvalidPreferences {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(preferences)
}

/// Load the catalog named by `source`.
pub(crate) fn load_catalog(source: &CatalogSource) -> Result<Catalog, CliError> {
    match source {
        CatalogSource::BuiltIn => seed_catalog().map_err(CliError::SeedCatalog),
        CatalogSource::File(path) => {
            let document: CatalogDocument = load_json(path, ARG_RANK_CATALOG)?;
            Catalog::try_from(document).map_err(|source| CliError::InvalidCatalog {
                path: path.clone(),
                source,
            })
        }
    }
}

fn load_json<T: DeserializeOwned>(path: &Utf8Path, field: &'static str) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Print `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}

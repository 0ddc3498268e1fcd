//! Focused unit tests covering rank CLI configuration and input loading.

use super::helpers::{Workspace, jakarta_pair, seed_document, write_utf8};
use crate::rank::{
    CatalogSource, DefaultRankerBuilder, RankArgs, RankConfig, config_from_layers_for_test,
    execute_rank, load_catalog, load_preferences,
};
use crate::{
    ARG_RANK_CATALOG, ARG_RANK_NEUTRAL_SCORE, ARG_RANK_PREFERENCES, ARG_RANK_WEIGHT_FLOOR,
    CliError, ENV_RANK_PREFERENCES,
};
use camino::Utf8PathBuf;
use rstest::rstest;
use trailrank_core::{CatalogError, PreferencesError};
use trailrank_topsis::{DEFAULT_MIN_WEIGHT, DEFAULT_NEUTRAL_SCORE, WeightingRules};

fn args_for(path: &str) -> RankArgs {
    RankArgs {
        preferences_path: Some(Utf8PathBuf::from(path)),
        ..RankArgs::default()
    }
}

#[rstest]
fn converting_rank_without_preferences_errors() {
    let err = RankConfig::try_from(RankArgs::default()).expect_err("missing path should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_RANK_PREFERENCES);
            assert_eq!(env, ENV_RANK_PREFERENCES);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn rank_config_defaults_to_stock_rules_and_built_in_catalog() {
    let config = RankConfig::try_from(args_for("prefs.json")).expect("config should build");
    assert_eq!(config.catalog, CatalogSource::BuiltIn);
    assert_eq!(config.weighting.min_weight, Some(DEFAULT_MIN_WEIGHT));
    assert_eq!(config.engine.neutral_score, DEFAULT_NEUTRAL_SCORE);
}

#[rstest]
fn no_weight_floor_selects_unclamped_rules() {
    let args = RankArgs {
        no_weight_floor: true,
        ..args_for("prefs.json")
    };
    let config = RankConfig::try_from(args).expect("config should build");
    assert_eq!(config.weighting, WeightingRules::unclamped());
}

#[rstest]
fn weight_floor_and_neutral_score_are_applied() {
    let args = RankArgs {
        weight_floor: Some(0.1),
        neutral_score: Some(0.25),
        catalog: Some(Utf8PathBuf::from("routes.json")),
        ..args_for("prefs.json")
    };
    let config = RankConfig::try_from(args).expect("config should build");
    assert_eq!(config.weighting.min_weight, Some(0.1));
    assert_eq!(config.engine.neutral_score, 0.25);
    assert_eq!(
        config.catalog,
        CatalogSource::File(Utf8PathBuf::from("routes.json"))
    );
}

#[rstest]
#[case::floor_negative(Some(-0.1), None, ARG_RANK_WEIGHT_FLOOR)]
#[case::floor_above_one(Some(1.5), None, ARG_RANK_WEIGHT_FLOOR)]
#[case::neutral_above_one(None, Some(2.0), ARG_RANK_NEUTRAL_SCORE)]
#[case::neutral_nan(None, Some(f64::NAN), ARG_RANK_NEUTRAL_SCORE)]
fn out_of_range_tunables_are_rejected(
    #[case] weight_floor: Option<f64>,
    #[case] neutral_score: Option<f64>,
    #[case] expected: &'static str,
) {
    let args = RankArgs {
        weight_floor,
        neutral_score,
        ..args_for("prefs.json")
    };
    match RankConfig::try_from(args).expect_err("value should be rejected") {
        CliError::OutOfRange { field, .. } => assert_eq!(field, expected),
        other => panic!("expected OutOfRange, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_preferences() {
    let workspace = Workspace::new();
    let config = RankConfig::try_from(args_for(workspace.path("absent.json").as_str()))
        .expect("config should build");
    match config.validate_sources().expect_err("expected failure") {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_RANK_PREFERENCES),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_catalog() {
    let workspace = Workspace::new();
    let preferences = workspace.write_preferences(&jakarta_pair());
    let args = RankArgs {
        catalog: Some(workspace.path("routes.json")),
        ..args_for(preferences.as_str())
    };
    let config = RankConfig::try_from(args).expect("config should build");
    match config.validate_sources().expect_err("expected failure") {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_RANK_CATALOG),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let workspace = Workspace::new();
    let directory = workspace.path("preferences.json");
    std::fs::create_dir(directory.as_std_path()).expect("preferences directory");
    let config =
        RankConfig::try_from(args_for(directory.as_str())).expect("config should build");
    match config.validate_sources().expect_err("expected failure") {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_RANK_PREFERENCES);
            assert_eq!(path, directory);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_preferences_decodes_json() {
    let workspace = Workspace::new();
    let path = workspace.write_preferences(&jakarta_pair());
    let decoded = load_preferences(&path).expect("preferences should decode");
    assert_eq!(decoded, jakarta_pair());
}

#[rstest]
fn load_preferences_rejects_invalid_json() {
    let workspace = Workspace::new();
    let path = workspace.path("preferences.json");
    write_utf8(&path, b"{ not valid json");
    match load_preferences(&path).expect_err("invalid json should error") {
        CliError::ParseInput { field, path: found, .. } => {
            assert_eq!(field, ARG_RANK_PREFERENCES);
            assert_eq!(found, path);
        }
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn load_preferences_rejects_invalid_records() {
    let workspace = Workspace::new();
    let path = workspace.write_preferences(&jakarta_pair().with_fitness(11));
    match load_preferences(&path).expect_err("fitness 11 should error") {
        CliError::InvalidPreferences { source, .. } => {
            assert_eq!(source, PreferencesError::FitnessOutOfRange { found: 11 });
        }
        other => panic!("expected InvalidPreferences, found {other:?}"),
    }
}

#[rstest]
fn load_preferences_io_error_returns_open_error() {
    let workspace = Workspace::new();
    let path = workspace.path("preferences.json");
    match load_preferences(&path).expect_err("missing file should error") {
        CliError::OpenInput { path: found, .. } => assert_eq!(found, path),
        other => panic!("expected OpenInput, found {other:?}"),
    }
}

#[rstest]
fn load_catalog_reads_documents() {
    let workspace = Workspace::new();
    let path = workspace.write_catalog(&seed_document());
    let catalog = load_catalog(&CatalogSource::File(path)).expect("catalog should load");
    assert_eq!(catalog.len(), 6);
}

#[rstest]
fn load_catalog_reports_integrity_failures() {
    let workspace = Workspace::new();
    let mut document = seed_document();
    let dropped = document.values.pop().expect("seed catalog has values");
    let path = workspace.write_catalog(&document);
    match load_catalog(&CatalogSource::File(path)).expect_err("incomplete catalog") {
        CliError::InvalidCatalog { source, .. } => assert_eq!(
            source,
            CatalogError::MissingValue {
                route_id: dropped.route_id,
                criterion_id: dropped.criterion_id,
            }
        ),
        other => panic!("expected InvalidCatalog, found {other:?}"),
    }
}

#[rstest]
fn execute_rank_orders_the_built_in_catalog() {
    let workspace = Workspace::new();
    let path = workspace.write_preferences(&jakarta_pair());
    let config = RankConfig::try_from(args_for(path.as_str())).expect("config should build");
    let ranking = execute_rank(&config, &DefaultRankerBuilder).expect("ranking succeeds");
    let ranks: Vec<usize> = ranking.routes.iter().map(|route| route.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(ranking.methodology.algorithm, "TOPSIS");
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "preferences_path": 42 }));

    match config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration")
    {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "neutral_score": 0.3,
            "weight_floor": 0.02,
        }),
        None,
    );
    composer.push_environment(json!({
        "preferences_path": "from-env.json",
        "weight_floor": 0.08,
    }));
    composer.push_cli(json!({ "catalog": "from-cli.json" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.preferences_path, Utf8PathBuf::from("from-env.json"));
    assert_eq!(
        config.catalog,
        CatalogSource::File(Utf8PathBuf::from("from-cli.json"))
    );
    assert_eq!(config.weighting.min_weight, Some(0.08));
    assert_eq!(config.engine.neutral_score, 0.3);
}

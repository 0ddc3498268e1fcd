//! Error types emitted by the trailrank CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use trailrank_core::{CatalogError, PreferencesError, RankError};
use trailrank_gear::GearRequestError;

/// Errors emitted by the trailrank CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The logger could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[source] log::SetLoggerError),
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A numeric option fell outside its accepted range.
    #[error("--{field} must be within {range}, got {value}")]
    OutOfRange {
        /// Flag name.
        field: &'static str,
        /// Accepted range.
        range: &'static str,
        /// Supplied value.
        value: f64,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag name.
        field: &'static str,
        /// Path supplied.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag name.
        field: &'static str,
        /// Path supplied.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag name.
        field: &'static str,
        /// Path supplied.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening an input document failed.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        /// Flag name.
        field: &'static str,
        /// Path supplied.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// An input document was not valid JSON for its type.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        /// Flag name.
        field: &'static str,
        /// Path supplied.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The preference record failed validation.
    #[error("preferences in {path:?} failed validation: {source}")]
    InvalidPreferences {
        /// Path supplied.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: PreferencesError,
    },
    /// A catalog document failed integrity checks.
    #[error("catalog in {path:?} failed validation: {source}")]
    InvalidCatalog {
        /// Path supplied.
        path: Utf8PathBuf,
        /// Integrity failure.
        #[source]
        source: CatalogError,
    },
    /// The built-in catalog failed integrity checks.
    #[error("built-in catalog failed validation: {0}")]
    SeedCatalog(#[source] CatalogError),
    /// The ranker rejected the request.
    #[error("ranking failed: {source}")]
    Rank {
        /// Ranker failure.
        #[source]
        source: RankError,
    },
    /// The gear request described no real trip.
    #[error("invalid gear request: {0}")]
    InvalidGearRequest(#[from] GearRequestError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

//! Temporary workspaces and input documents for CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;
use trailrank_core::{
    BudgetRange, CatalogDocument, ExperienceLevel, Interest, UserPreferences,
};
use trailrank_data::seed_catalog;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary directory addressed with UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `preferences` as JSON and return the file path.
    pub(super) fn write_preferences(&self, preferences: &UserPreferences) -> Utf8PathBuf {
        let path = self.path("preferences.json");
        let payload = serde_json::to_string_pretty(preferences).expect("serialise preferences");
        write_utf8(&path, payload.as_bytes());
        path
    }

    /// Write `document` as JSON and return the file path.
    pub(super) fn write_catalog(&self, document: &CatalogDocument) -> Utf8PathBuf {
        let path = self.path("catalog.json");
        let payload = serde_json::to_string_pretty(document).expect("serialise catalog");
        write_utf8(&path, payload.as_bytes());
        path
    }
}

/// A couple from Jakarta with a mid-range budget who like views.
pub(super) fn jakarta_pair() -> UserPreferences {
    UserPreferences::new(ExperienceLevel::Intermediate, "Jakarta")
        .with_group_size(2)
        .with_budget(BudgetRange::From1mTo2m)
        .with_interest(Interest::ScenicViews)
}

/// The built-in catalog in document form.
pub(super) fn seed_document() -> CatalogDocument {
    let catalog = seed_catalog().expect("seed catalog is valid");
    CatalogDocument::from(&catalog)
}

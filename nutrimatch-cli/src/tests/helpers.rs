//! Test helpers for writing catalogs and targets into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use nutrimatch_core::FoodItem;
use nutrimatch_core::test_support::{sample_catalog, staple_catalog};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory holding a catalog and a weight-loss target.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    /// Workspace with the three-food staple catalog and a weight-loss target.
    pub(super) fn with_staples() -> Self {
        let workspace = Self::new();
        workspace.write_catalog(&staple_catalog());
        workspace.write_target(&weight_loss_target());
        workspace
    }

    /// Workspace with the ten-food sample catalog and a weight-loss target.
    pub(super) fn with_sample() -> Self {
        let workspace = Self::new();
        workspace.write_catalog(&sample_catalog());
        workspace.write_target(&weight_loss_target());
        workspace
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn catalog(&self) -> Utf8PathBuf {
        self.root.join("catalog.json")
    }

    pub(super) fn target(&self) -> Utf8PathBuf {
        self.root.join("target.json")
    }

    pub(super) fn write_catalog(&self, catalog: &[FoodItem]) {
        let payload = serde_json::to_string_pretty(catalog).expect("serialize catalog");
        write_utf8(&self.catalog(), payload.as_bytes());
    }

    pub(super) fn write_target(&self, target: &serde_json::Value) {
        let payload = serde_json::to_string_pretty(target).expect("serialize target");
        write_utf8(&self.target(), payload.as_bytes());
    }
}

pub(super) fn weight_loss_target() -> serde_json::Value {
    json!({
        "calories": 500.0,
        "protein": 40.0,
        "carbs": 50.0,
        "fat": 15.0,
        "goal": "weight-loss",
    })
}

/// Names from a JSON array of ranked foods.
pub(super) fn names_in(output: &[u8]) -> Vec<String> {
    let value: serde_json::Value = serde_json::from_slice(output).expect("output should be JSON");
    value
        .as_array()
        .expect("output should be an array")
        .iter()
        .map(|entry| {
            entry
                .get("name")
                .and_then(serde_json::Value::as_str)
                .expect("entry name")
                .to_owned()
        })
        .collect()
}

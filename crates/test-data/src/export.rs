//! JSON fixture export for generated scenarios.
//!
//! Serializes a scenario's configuration and telemetry into a self-describing
//! fixture document that downstream tests can load and replay.

use std::fs;
use std::path::{Path, PathBuf};

use eva::Telemetry;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::config::ScenarioConfig;
use crate::scenario::ScenarioResult;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A fixture file for one generated scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureDocument {
    /// Unique fixture id.
    pub id: Uuid,
    /// Fixture name, also used as the file stem.
    pub name: String,
    /// When the fixture was generated.
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    /// Configuration the scenario was built from.
    pub config: ScenarioConfig,
    /// Walk telemetry.
    pub telemetry: Telemetry,
}

impl FixtureDocument {
    /// Wraps a scenario result into a named fixture document.
    pub fn from_result(name: impl Into<String>, result: &ScenarioResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            generated_at: OffsetDateTime::now_utc(),
            config: result.config.clone(),
            telemetry: result.telemetry.clone(),
        }
    }
}

/// Serializes a fixture document to pretty-printed JSON.
pub fn fixture_json(document: &FixtureDocument) -> Result<Vec<u8>, ExportError> {
    Ok(serde_json::to_vec_pretty(document)?)
}

/// Writes a fixture document to `<dir>/<name>.json`, creating the directory
/// if needed. Returns the path written.
pub fn write_fixture(document: &FixtureDocument, dir: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", document.name));
    fs::write(&path, fixture_json(document)?)?;
    Ok(path)
}

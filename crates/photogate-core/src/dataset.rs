//! Dataset loading and schema validation.
//!
//! The input is an externally produced CSV table of simulated gate outputs,
//! one row per candidate phase setting. The loader checks the header against
//! the required column set before touching any row, so a schema mismatch is
//! reported once, naming every absent column.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Columns every input table must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "phi_a",
    "phi_b",
    "preds_AB_0",
    "preds_A_1B_0",
    "preds_A_0B_1",
    "preds_AB_1",
];

/// One candidate phase setting with its four predicted gate outputs.
///
/// The `preds_*` naming follows the truth-table convention of the source
/// tables: both-low, A-high-B-low, A-low-B-high, both-high.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseConfig {
    /// Phase parameter of arm A, passed through unmodified.
    pub phi_a: f64,
    /// Phase parameter of arm B, passed through unmodified.
    pub phi_b: f64,
    /// Predicted output intensity for input A=0, B=0.
    #[serde(rename = "preds_AB_0")]
    pub preds_ab_0: f64,
    /// Predicted output intensity for input A=1, B=0.
    #[serde(rename = "preds_A_1B_0")]
    pub preds_a_1b_0: f64,
    /// Predicted output intensity for input A=0, B=1.
    #[serde(rename = "preds_A_0B_1")]
    pub preds_a_0b_1: f64,
    /// Predicted output intensity for input A=1, B=1.
    #[serde(rename = "preds_AB_1")]
    pub preds_ab_1: f64,
}

/// Validated input table, in source order. First stage of the pipeline.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    /// Rows in the order they appear in the source table.
    pub rows: Vec<PhaseConfig>,
}

impl LoadedDataset {
    /// Load and validate a CSV table.
    ///
    /// Fails with [`PipelineError::DataFileMissing`] when the path does not
    /// resolve to a file, [`PipelineError::MissingColumns`] when the header
    /// lacks any required column, and a wrapped CSV error for unreadable or
    /// malformed content (including non-numeric required fields).
    pub fn from_csv_path(path: &Path) -> Result<Self, PipelineError> {
        if !path.is_file() {
            return Err(PipelineError::DataFileMissing {
                path: path.to_path_buf(),
            });
        }

        let file = std::fs::File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);

        let headers = reader.headers()?.clone();
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| !headers.iter().any(|h| h == **col))
            .map(|col| col.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(PipelineError::MissingColumns { missing });
        }

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let row: PhaseConfig = record?;
            rows.push(row);
        }

        log::debug!("loaded {} configuration rows from {}", rows.len(), path.display());
        Ok(Self { rows })
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

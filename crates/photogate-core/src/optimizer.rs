//! Configuration facade driving the four pipeline stages in order.

use std::path::{Path, PathBuf};

use crate::classify::RunResult;
use crate::dataset::LoadedDataset;
use crate::error::PipelineError;
use crate::gate::{GatePolarity, parse_gate};
use crate::threshold::DEFAULT_THRESHOLD_FRACTION;

/// Validated run configuration for one dataset and one gate polarity.
///
/// The polarity is fixed at construction and cannot change mid-run. Each
/// [`run`](GateOptimizer::run) reads the source afresh and owns its pipeline
/// exclusively, so independent runs may proceed in parallel.
#[derive(Debug, Clone)]
pub struct GateOptimizer {
    gate: GatePolarity,
    threshold_fraction: f64,
    data_path: PathBuf,
}

impl GateOptimizer {
    /// Validate the configuration.
    ///
    /// The gate string is checked first, before any filesystem access, so an
    /// unsupported gate never reaches I/O. The data path must then resolve
    /// to an existing file.
    pub fn new(data_path: impl Into<PathBuf>, gate_type: &str) -> Result<Self, PipelineError> {
        let gate = parse_gate(gate_type).ok_or_else(|| PipelineError::InvalidGate {
            given: gate_type.to_string(),
        })?;
        let data_path = data_path.into();
        if !data_path.is_file() {
            return Err(PipelineError::DataFileMissing { path: data_path });
        }
        Ok(Self {
            gate,
            threshold_fraction: DEFAULT_THRESHOLD_FRACTION,
            data_path,
        })
    }

    /// Override the cutoff fraction (default 0.8). Not range-validated.
    pub fn with_threshold_fraction(mut self, fraction: f64) -> Self {
        self.threshold_fraction = fraction;
        self
    }

    /// Configured polarity.
    pub fn gate(&self) -> GatePolarity {
        self.gate
    }

    /// Configured cutoff fraction.
    pub fn threshold_fraction(&self) -> f64 {
        self.threshold_fraction
    }

    /// Configured input table path.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Load, score, derive the threshold, and classify.
    ///
    /// Errors from loading are surfaced synchronously; a failed run produces
    /// no result and leaves nothing to clean up.
    pub fn run(&self) -> Result<RunResult, PipelineError> {
        let result = LoadedDataset::from_csv_path(&self.data_path)?
            .score(self.gate)
            .apply_threshold(self.threshold_fraction)
            .classify();
        log::debug!(
            "{} run complete: {} rows classified, {} dropped",
            self.gate,
            result.rows.len(),
            result.dropped_rows
        );
        Ok(result)
    }
}

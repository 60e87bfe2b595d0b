//! Pipeline error taxonomy.

use std::path::PathBuf;

/// Failures surfaced by configuration, loading, or the pipeline facade.
///
/// Stage-ordering mistakes have no variant here: the stage chain consumes
/// each intermediate dataset, so an out-of-order call does not compile.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Unsupported gate name. Raised before any I/O happens.
    #[error("gate_type must be 'NOR' or 'NAND', got '{given}'")]
    InvalidGate { given: String },

    /// Input table does not exist or is not a readable file.
    #[error("data file not found at {path}")]
    DataFileMissing { path: PathBuf },

    /// Underlying read failure on the input table.
    #[error("error loading data: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV content, including non-numeric required fields.
    #[error("error loading data: {0}")]
    Csv(#[from] csv::Error),

    /// Header is missing one or more required columns.
    #[error("CSV file must contain required columns; missing: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_lists_every_column() {
        let err = PipelineError::MissingColumns {
            missing: vec!["phi_a".to_string(), "preds_AB_1".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("phi_a"));
        assert!(msg.contains("preds_AB_1"));
    }

    #[test]
    fn invalid_gate_names_the_offender() {
        let err = PipelineError::InvalidGate {
            given: "XOR".to_string(),
        };
        assert!(err.to_string().contains("XOR"));
    }
}

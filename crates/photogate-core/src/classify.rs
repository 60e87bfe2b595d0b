//! Final labeling stage and the run-result snapshot.

use std::collections::HashMap;

use serde::Serialize;

use crate::gate::GatePolarity;
use crate::scoring::ScoredConfig;
use crate::threshold::ThresholdedDataset;

/// Binary quality label for a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    Optimal,
    #[serde(rename = "Non-Optimal")]
    NonOptimal,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Optimal => write!(f, "Optimal"),
            Self::NonOptimal => write!(f, "Non-Optimal"),
        }
    }
}

/// A scored configuration with its final label.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClassifiedConfig {
    #[serde(flatten)]
    pub scored: ScoredConfig,
    pub classification: Classification,
}

/// Read-only snapshot of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    /// Polarity the run was configured for.
    pub gate: GatePolarity,
    /// Fraction of the maximum score used for the cutoff.
    pub threshold_fraction: f64,
    /// Maximum score over surviving rows; `None` when none survived.
    pub max_opt_score: Option<f64>,
    /// Cutoff applied to every row; `None` when none survived.
    pub threshold: Option<f64>,
    /// Rows removed by the score calculator for non-finite metrics.
    pub dropped_rows: usize,
    /// Label totals over the surviving rows.
    pub class_counts: HashMap<Classification, usize>,
    /// The augmented table, in source order.
    pub rows: Vec<ClassifiedConfig>,
}

impl ThresholdedDataset {
    /// Label every surviving row against the cutoff.
    ///
    /// A score exactly equal to the threshold counts as Optimal; multiple
    /// rows sharing the maximum all qualify identically.
    pub fn classify(self) -> RunResult {
        let rows: Vec<ClassifiedConfig> = match self.threshold {
            Some(threshold) => self
                .rows
                .into_iter()
                .map(|scored| ClassifiedConfig {
                    scored,
                    classification: if scored.opt_score >= threshold {
                        Classification::Optimal
                    } else {
                        Classification::NonOptimal
                    },
                })
                .collect(),
            // No threshold means no surviving rows to label.
            None => Vec::new(),
        };

        let mut class_counts = HashMap::new();
        for row in &rows {
            *class_counts.entry(row.classification).or_insert(0) += 1;
        }

        RunResult {
            gate: self.gate,
            threshold_fraction: self.threshold_fraction,
            max_opt_score: self.max_opt_score,
            threshold: self.threshold,
            dropped_rows: self.dropped_rows,
            class_counts,
            rows,
        }
    }
}

impl RunResult {
    /// Count for one label, zero when no row carries it.
    pub fn count(&self, label: Classification) -> usize {
        self.class_counts.get(&label).copied().unwrap_or(0)
    }
}

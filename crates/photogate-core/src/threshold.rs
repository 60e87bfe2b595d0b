//! Adaptive classification threshold derived from the observed scores.

use crate::gate::GatePolarity;
use crate::scoring::{ScoredConfig, ScoredDataset};

/// Default fraction of the maximum score used as the cutoff.
pub const DEFAULT_THRESHOLD_FRACTION: f64 = 0.8;

/// Scored rows plus the cutoff derived from their maximum score.
///
/// `max_opt_score` and `threshold` are `None` when no rows survived the
/// score calculator; classification then operates on an empty set.
#[derive(Debug, Clone)]
pub struct ThresholdedDataset {
    pub gate: GatePolarity,
    pub rows: Vec<ScoredConfig>,
    pub dropped_rows: usize,
    /// Maximum `opt_score` over the surviving rows.
    pub max_opt_score: Option<f64>,
    /// `max_opt_score * threshold_fraction`.
    pub threshold: Option<f64>,
    /// The fraction the cutoff was derived with.
    pub threshold_fraction: f64,
}

impl ScoredDataset {
    /// Derive the classification cutoff as `fraction` of the maximum score.
    ///
    /// The fraction is not range-validated: values above 1.0 put the cutoff
    /// beyond every score, values at or below 0.0 put it under all of them.
    /// Both are allowed outcomes, not errors.
    pub fn apply_threshold(self, fraction: f64) -> ThresholdedDataset {
        let max_opt_score = self.rows.iter().map(|r| r.opt_score).reduce(f64::max);
        let threshold = max_opt_score.map(|m| m * fraction);
        if let (Some(max), Some(t)) = (max_opt_score, threshold) {
            log::debug!("threshold {t} from max score {max} ({})", self.gate);
        }

        ThresholdedDataset {
            gate: self.gate,
            rows: self.rows,
            dropped_rows: self.dropped_rows,
            max_opt_score,
            threshold,
            threshold_fraction: fraction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::PhaseConfig;

    fn scored(scores: &[f64]) -> ScoredDataset {
        let rows = scores
            .iter()
            .map(|&s| ScoredConfig {
                config: PhaseConfig {
                    phi_a: 0.0,
                    phi_b: 0.0,
                    preds_ab_0: 0.0,
                    preds_a_1b_0: 0.0,
                    preds_a_0b_1: 0.0,
                    preds_ab_1: 0.0,
                },
                optimize_ratio: s,
                uniformity_penalty: 0.0,
                opt_score: s,
            })
            .collect();
        ScoredDataset {
            gate: GatePolarity::Nor,
            rows,
            dropped_rows: 0,
        }
    }

    #[test]
    fn threshold_is_fraction_of_max() {
        let t = scored(&[100.0, 10.0, 55.0]).apply_threshold(0.8);
        assert_eq!(t.max_opt_score, Some(100.0));
        assert_eq!(t.threshold, Some(80.0));
        assert_eq!(t.threshold_fraction, 0.8);
    }

    #[test]
    fn empty_dataset_leaves_threshold_undefined() {
        let t = scored(&[]).apply_threshold(0.8);
        assert_eq!(t.max_opt_score, None);
        assert_eq!(t.threshold, None);
    }

    #[test]
    fn out_of_range_fractions_are_accepted() {
        let t = scored(&[100.0]).apply_threshold(1.5);
        assert_eq!(t.threshold, Some(150.0));
        let t = scored(&[100.0]).apply_threshold(0.0);
        assert_eq!(t.threshold, Some(0.0));
    }
}

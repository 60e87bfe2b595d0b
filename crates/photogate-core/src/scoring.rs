//! Score calculation: dominance ratio, uniformity penalty, combined score.
//!
//! This is the only stage with nontrivial arithmetic. Division by a zero or
//! vanishing denominator produces a non-finite ratio; such rows are dropped
//! entirely rather than clamped, and never reach the threshold stage.

use serde::Serialize;

use crate::dataset::{LoadedDataset, PhaseConfig};
use crate::gate::GatePolarity;

/// Additive smoothing term on the penalty denominator. Keeps the score
/// bounded when all three zero-state outputs are identical. Fixed, not
/// configurable.
pub const SCORE_SMOOTHING: f64 = 0.1;

/// A configuration row with its derived quality metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredConfig {
    /// The original row, passed through unmodified.
    #[serde(flatten)]
    pub config: PhaseConfig,
    /// Dominance ratio for the target polarity.
    pub optimize_ratio: f64,
    /// Sample standard deviation across the three zero-state outputs.
    pub uniformity_penalty: f64,
    /// `optimize_ratio / (uniformity_penalty + 0.1)`.
    pub opt_score: f64,
}

/// Output of the score calculator: surviving rows plus the prune count.
#[derive(Debug, Clone)]
pub struct ScoredDataset {
    /// Polarity the scores were computed against.
    pub gate: GatePolarity,
    /// Rows whose three derived metrics are all finite, in source order.
    pub rows: Vec<ScoredConfig>,
    /// Rows removed because a derived metric was infinite or NaN.
    pub dropped_rows: usize,
}

impl LoadedDataset {
    /// Derive `optimize_ratio`, `uniformity_penalty`, and `opt_score` for
    /// every row, pruning rows with any non-finite metric.
    pub fn score(self, gate: GatePolarity) -> ScoredDataset {
        let total = self.rows.len();
        let rows: Vec<ScoredConfig> = self
            .rows
            .into_iter()
            .filter_map(|config| {
                let optimize_ratio = gate.optimize_ratio(&config);
                let uniformity_penalty = sample_std_dev(&gate.zero_state_outputs(&config));
                let opt_score = optimize_ratio / (uniformity_penalty + SCORE_SMOOTHING);
                let finite = optimize_ratio.is_finite()
                    && uniformity_penalty.is_finite()
                    && opt_score.is_finite();
                finite.then_some(ScoredConfig {
                    config,
                    optimize_ratio,
                    uniformity_penalty,
                    opt_score,
                })
            })
            .collect();

        let dropped_rows = total - rows.len();
        if dropped_rows > 0 {
            log::warn!(
                "dropped {dropped_rows} of {total} rows with non-finite metrics ({gate})"
            );
        }

        ScoredDataset {
            gate,
            rows,
            dropped_rows,
        }
    }
}

/// Sample standard deviation (n−1 denominator) of a fixed set of values.
fn sample_std_dev(values: &[f64; 3]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    var.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(preds: [f64; 4]) -> PhaseConfig {
        PhaseConfig {
            phi_a: 0.0,
            phi_b: 0.0,
            preds_ab_0: preds[0],
            preds_a_1b_0: preds[1],
            preds_a_0b_1: preds[2],
            preds_ab_1: preds[3],
        }
    }

    fn dataset(rows: Vec<PhaseConfig>) -> LoadedDataset {
        LoadedDataset { rows }
    }

    #[test]
    fn sample_std_dev_matches_hand_computation() {
        // Mean 2, squared deviations 1 + 0 + 1, /(n-1) = 1, sqrt = 1.
        assert_eq!(sample_std_dev(&[1.0, 2.0, 3.0]), 1.0);
        assert_eq!(sample_std_dev(&[5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn score_combines_ratio_and_penalty() {
        let scored = dataset(vec![row([10.0, 1.0, 1.0, 1.0])]).score(GatePolarity::Nor);
        let r = &scored.rows[0];
        assert_eq!(r.optimize_ratio, 10.0);
        assert_eq!(r.uniformity_penalty, 0.0);
        assert_eq!(r.opt_score, 100.0);
    }

    #[test]
    fn nand_penalty_spans_the_numerator_terms() {
        let scored = dataset(vec![row([1.0, 2.0, 3.0, 1.0])]).score(GatePolarity::Nand);
        let r = &scored.rows[0];
        assert_eq!(r.optimize_ratio, 6.0);
        assert_eq!(r.uniformity_penalty, 1.0);
        assert_eq!(r.opt_score, 6.0 / 1.1);
    }

    #[test]
    fn zero_denominator_rows_are_dropped() {
        let scored = dataset(vec![
            row([10.0, 0.0, 1.0, 1.0]), // infinite ratio
            row([10.0, 1.0, 1.0, 1.0]),
        ])
        .score(GatePolarity::Nor);
        assert_eq!(scored.rows.len(), 1);
        assert_eq!(scored.dropped_rows, 1);
        assert_eq!(scored.rows[0].opt_score, 100.0);
    }

    #[test]
    fn nan_input_rows_are_dropped() {
        let scored =
            dataset(vec![row([f64::NAN, 1.0, 1.0, 1.0])]).score(GatePolarity::Nor);
        assert!(scored.rows.is_empty());
        assert_eq!(scored.dropped_rows, 1);
    }

    #[test]
    fn surviving_rows_keep_source_order() {
        let scored = dataset(vec![
            row([1.0, 1.0, 1.0, 1.0]),
            row([10.0, 0.0, 1.0, 1.0]),
            row([2.0, 1.0, 1.0, 1.0]),
        ])
        .score(GatePolarity::Nor);
        assert_eq!(scored.rows.len(), 2);
        assert_eq!(scored.rows[0].config.preds_ab_0, 1.0);
        assert_eq!(scored.rows[1].config.preds_ab_0, 2.0);
    }
}

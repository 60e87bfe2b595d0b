//! Target gate polarity and the formula variants it selects.
//!
//! The polarity is parsed once at configuration time and dispatched as a
//! tagged enum from then on; no stage re-inspects the original string.

use serde::{Deserialize, Serialize};

use crate::dataset::PhaseConfig;

/// Boolean function targeted by a phase configuration.
///
/// The polarity decides which of the four predicted outputs represents the
/// gate's logical "1" and which three must stay uniformly low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GatePolarity {
    /// Output high only for the both-low input pair.
    Nor,
    /// Output low only for the both-high input pair.
    Nand,
}

impl GatePolarity {
    /// Dominance ratio for one configuration.
    ///
    /// NOR: the both-low output against the product of the other three.
    /// NAND: the product of the three "1"-producing outputs against the
    /// single both-high output.
    pub fn optimize_ratio(&self, config: &PhaseConfig) -> f64 {
        match self {
            Self::Nor => {
                config.preds_ab_0
                    / (config.preds_a_1b_0 * config.preds_a_0b_1 * config.preds_ab_1)
            }
            Self::Nand => {
                (config.preds_ab_0 * config.preds_a_1b_0 * config.preds_a_0b_1)
                    / config.preds_ab_1
            }
        }
    }

    /// The three outputs expected to sit in the gate's logical-zero state.
    ///
    /// Their per-row dispersion is the uniformity penalty.
    pub fn zero_state_outputs(&self, config: &PhaseConfig) -> [f64; 3] {
        match self {
            Self::Nor => [config.preds_a_1b_0, config.preds_a_0b_1, config.preds_ab_1],
            Self::Nand => [config.preds_ab_0, config.preds_a_1b_0, config.preds_a_0b_1],
        }
    }
}

impl std::fmt::Display for GatePolarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nor => write!(f, "NOR"),
            Self::Nand => write!(f, "NAND"),
        }
    }
}

/// Parse a gate name, case-insensitively. Returns `None` for anything other
/// than the two supported polarities.
pub fn parse_gate(gate: &str) -> Option<GatePolarity> {
    match gate.trim().to_lowercase().as_str() {
        "nor" => Some(GatePolarity::Nor),
        "nand" => Some(GatePolarity::Nand),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(preds: [f64; 4]) -> PhaseConfig {
        PhaseConfig {
            phi_a: 0.0,
            phi_b: 0.0,
            preds_ab_0: preds[0],
            preds_a_1b_0: preds[1],
            preds_a_0b_1: preds[2],
            preds_ab_1: preds[3],
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(parse_gate("NOR"), Some(GatePolarity::Nor));
        assert_eq!(parse_gate("nor"), Some(GatePolarity::Nor));
        assert_eq!(parse_gate(" Nand "), Some(GatePolarity::Nand));
    }

    #[test]
    fn parse_rejects_other_gates() {
        assert_eq!(parse_gate("XOR"), None);
        assert_eq!(parse_gate(""), None);
        assert_eq!(parse_gate("norx"), None);
    }

    #[test]
    fn nor_ratio_divides_both_low_by_product_of_rest() {
        let c = config([10.0, 2.0, 4.0, 5.0]);
        assert_eq!(GatePolarity::Nor.optimize_ratio(&c), 10.0 / 40.0);
    }

    #[test]
    fn nand_ratio_divides_product_by_both_high() {
        let c = config([2.0, 3.0, 4.0, 6.0]);
        assert_eq!(GatePolarity::Nand.optimize_ratio(&c), 24.0 / 6.0);
    }

    #[test]
    fn zero_state_outputs_follow_polarity() {
        let c = config([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(GatePolarity::Nor.zero_state_outputs(&c), [2.0, 3.0, 4.0]);
        assert_eq!(GatePolarity::Nand.zero_state_outputs(&c), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn display_uses_canonical_names() {
        assert_eq!(GatePolarity::Nor.to_string(), "NOR");
        assert_eq!(GatePolarity::Nand.to_string(), "NAND");
    }
}

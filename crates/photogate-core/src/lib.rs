//! # photogate-core
//!
//! Screening pipeline for two-input photonic logic-gate phase
//! configurations. Given a table of predicted output intensities for the
//! four input combinations, it scores each candidate phase pair against a
//! target polarity (NOR or NAND) and labels it Optimal or Non-Optimal
//! under a data-derived cutoff.
//!
//! ## Quick Start
//!
//! ```no_run
//! use photogate_core::{Classification, GateOptimizer};
//!
//! let result = GateOptimizer::new("data/nor_data.csv", "NOR")?
//!     .with_threshold_fraction(0.8)
//!     .run()?;
//!
//! println!("threshold: {:?}", result.threshold);
//! println!("optimal configurations: {}", result.count(Classification::Optimal));
//! # Ok::<(), photogate_core::PipelineError>(())
//! ```
//!
//! ## Architecture
//!
//! Loader → Score Calculator → Threshold Setter → Classifier
//!
//! Each stage consumes the previous stage's output and returns the next:
//!
//! ```text
//! LoadedDataset → ScoredDataset → ThresholdedDataset → RunResult
//! ```
//!
//! Running a stage out of order therefore does not compile; the only
//! runtime failures are configuration, resource, and schema errors, all
//! raised before scoring begins. Rows whose derived metrics come out
//! non-finite are pruned, not clamped; the prune count travels with the
//! result.

pub mod classify;
pub mod dataset;
pub mod error;
pub mod gate;
pub mod optimizer;
pub mod scoring;
pub mod threshold;

pub use classify::{Classification, ClassifiedConfig, RunResult};
pub use dataset::{LoadedDataset, PhaseConfig, REQUIRED_COLUMNS};
pub use error::PipelineError;
pub use gate::{GatePolarity, parse_gate};
pub use optimizer::GateOptimizer;
pub use scoring::{SCORE_SMOOTHING, ScoredConfig, ScoredDataset};
pub use threshold::{DEFAULT_THRESHOLD_FRACTION, ThresholdedDataset};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

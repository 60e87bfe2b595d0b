//! Command implementations and shared result rendering.

pub mod batch;
pub mod classify;

use std::path::Path;

use photogate_core::{Classification, REQUIRED_COLUMNS, RunResult};

/// Print the augmented table and summary statistics for one run.
pub fn print_result(result: &RunResult) {
    if result.rows.is_empty() {
        println!("(no surviving rows)");
    } else {
        println!(
            "{:>9} {:>9} {:>11} {:>13} {:>13} {:>11} {:>14} {:>12} {:>12}  {}",
            "phi_a",
            "phi_b",
            "preds_AB_0",
            "preds_A_1B_0",
            "preds_A_0B_1",
            "preds_AB_1",
            "optimize_ratio",
            "uniformity",
            "opt_score",
            "classification",
        );
        for row in &result.rows {
            let c = &row.scored.config;
            println!(
                "{:>9.4} {:>9.4} {:>11.4} {:>13.4} {:>13.4} {:>11.4} {:>14.4} {:>12.4} {:>12.4}  {}",
                c.phi_a,
                c.phi_b,
                c.preds_ab_0,
                c.preds_a_1b_0,
                c.preds_a_0b_1,
                c.preds_ab_1,
                row.scored.optimize_ratio,
                row.scored.uniformity_penalty,
                row.scored.opt_score,
                row.classification,
            );
        }
    }

    println!();
    match (result.max_opt_score, result.threshold) {
        (Some(max), Some(threshold)) => {
            println!("Maximum opt score: {max}");
            println!("Threshold: {threshold}");
        }
        _ => println!("Maximum opt score: undefined (no surviving rows)"),
    }
    if result.dropped_rows > 0 {
        println!("Dropped rows (non-finite metrics): {}", result.dropped_rows);
    }
    println!(
        "Class counts: Optimal: {}, Non-Optimal: {}",
        result.count(Classification::Optimal),
        result.count(Classification::NonOptimal),
    );
}

/// Write the full run result as pretty-printed JSON.
pub fn write_json(result: &RunResult, path: &Path) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}

/// Write the augmented table as CSV, source columns first.
pub fn write_table_csv(result: &RunResult, path: &Path) -> csv::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header: Vec<&str> = REQUIRED_COLUMNS.to_vec();
    header.extend(["optimize_ratio", "uniformity_penalty", "opt_score", "classification"]);
    writer.write_record(&header)?;

    for row in &result.rows {
        let c = &row.scored.config;
        writer.write_record(&[
            c.phi_a.to_string(),
            c.phi_b.to_string(),
            c.preds_ab_0.to_string(),
            c.preds_a_1b_0.to_string(),
            c.preds_a_0b_1.to_string(),
            c.preds_ab_1.to_string(),
            row.scored.optimize_ratio.to_string(),
            row.scored.uniformity_penalty.to_string(),
            row.scored.opt_score.to_string(),
            row.classification.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

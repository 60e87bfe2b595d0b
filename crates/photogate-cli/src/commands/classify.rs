use std::path::Path;

use photogate_core::GateOptimizer;

pub fn run(
    data: &Path,
    gate: &str,
    threshold_fraction: f64,
    output: Option<&Path>,
    save_table: Option<&Path>,
) {
    let optimizer = match GateOptimizer::new(data, gate) {
        Ok(optimizer) => optimizer.with_threshold_fraction(threshold_fraction),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let result = match optimizer.run() {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    println!(
        "Processing {} gate ({} rows)...\n",
        result.gate,
        result.rows.len() + result.dropped_rows
    );
    super::print_result(&result);

    if let Some(path) = save_table {
        if let Err(e) = super::write_table_csv(&result, path) {
            eprintln!("Failed to write table: {e}");
            std::process::exit(1);
        }
        println!("\nAugmented table written to {}", path.display());
    }

    if let Some(path) = output {
        if let Err(e) = super::write_json(&result, path) {
            eprintln!("Failed to write report: {e}");
            std::process::exit(1);
        }
        println!("\nReport written to {}", path.display());
    }
}

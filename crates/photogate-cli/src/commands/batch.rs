use std::path::Path;

use photogate_core::GateOptimizer;

/// Process each provided dataset with its gate polarity. A failing dataset
/// is reported and skipped so one bad input cannot mask the others.
pub fn run(nor: Option<&Path>, nand: Option<&Path>, threshold_fraction: f64) {
    let datasets: Vec<(&str, &Path)> = [("NOR", nor), ("NAND", nand)]
        .into_iter()
        .filter_map(|(gate, path)| path.map(|p| (gate, p)))
        .collect();

    if datasets.is_empty() {
        eprintln!("No datasets given; pass --nor and/or --nand.");
        std::process::exit(1);
    }

    let mut failures = 0;
    for &(gate, path) in &datasets {
        println!("\nProcessing {gate} gate...");
        let outcome = GateOptimizer::new(path, gate)
            .map(|o| o.with_threshold_fraction(threshold_fraction))
            .and_then(|o| o.run());
        match outcome {
            Ok(result) => {
                println!();
                super::print_result(&result);
            }
            Err(e) => {
                eprintln!("Error processing {gate}: {e}");
                failures += 1;
            }
        }
    }

    if failures == datasets.len() {
        std::process::exit(1);
    }
}

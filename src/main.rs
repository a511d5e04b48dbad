use std::io::{self, BufWriter};

use edit_distance_calculator::harness::{self, HarnessReport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cases = harness::standard_cases();
    eprintln!("Checking {} fixed cases against the tabulated evaluator.", cases.len());

    let report = HarnessReport::from_cases(&cases);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report.write_to(&mut out)?;

    if report.mismatches.is_empty() {
        eprintln!("All {} cases matched.", report.total_cases);
    }
    // Exit non-zero when any case disagreed; the full report is already printed.
    report.into_result()?;
    Ok(())
}

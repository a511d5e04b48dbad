pub mod error;
pub mod harness;
pub mod ipc;
pub mod levenshtein;
pub mod sequence;

use wasm_bindgen::prelude::*;

pub use error::Error;
pub use harness::{Case, Comparison, HarnessReport, Mismatch};
pub use levenshtein::{levenshtein_distance, recursive_distance};
pub use sequence::Sequence;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn to_js_count(distance: usize) -> u32 {
    u32::try_from(distance).unwrap_or(u32::MAX)
}

/// Tabulated distance over the Unicode scalar values of two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> u32 {
    to_js_count(levenshtein::levenshtein_distance(&chars(a), &chars(b)))
}

/// Naive recursive distance. Exponential; keep inputs short.
#[wasm_bindgen]
pub fn recursive_edit_distance(a: &str, b: &str) -> u32 {
    to_js_count(levenshtein::recursive_distance(&chars(a), &chars(b)))
}

fn run_harness_with_progress(progress_callback: &js_sys::Function, label: &str) -> HarnessReport {
    let cases = harness::standard_cases();
    let _ = progress_callback.call1(&JsValue::NULL, &JsValue::from_str(&format!(
        "Rust Wasm ({}): Checking {} fixed cases...", label, cases.len()
    )));
    let report = HarnessReport::from_cases(&cases);
    for mismatch in &report.mismatches {
        web_sys::console::warn_1(&JsValue::from_str(&mismatch.to_string()));
    }
    let _ = progress_callback.call1(&JsValue::NULL, &JsValue::from_str(&format!(
        "Rust Wasm ({}): {} mismatches, {} comparisons against '{}'.",
        label, report.mismatches.len(), report.comparisons.len(), harness::REFERENCE_WORD
    )));
    report
}

#[wasm_bindgen]
pub fn run_harness_json(progress_callback: &js_sys::Function) -> Result<String, JsValue> {
    let report = run_harness_with_progress(progress_callback, "JSON");
    report
        .to_json()
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {}", e)))
}

#[wasm_bindgen]
pub fn comparisons_to_ipc_bytes(progress_callback: &js_sys::Function) -> Result<Vec<u8>, JsValue> {
    let report = run_harness_with_progress(progress_callback, "IPC");
    let _ = progress_callback.call1(&JsValue::NULL, &JsValue::from_str("Rust Wasm (IPC): Finalizing IPC stream..."));
    ipc::report_to_ipc_bytes(&report).map_err(|e| JsValue::from_str(&format!("Arrow IPC error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::{edit_distance, recursive_edit_distance};

    #[test]
    fn string_entry_points_agree() {
        for (a, b, expected) in [("", "", 0), ("kitten", "mittens", 2), ("1234", "1233", 1), ("über", "uber", 1)] {
            assert_eq!(edit_distance(a, b), expected);
            assert_eq!(recursive_edit_distance(a, b), expected);
        }
    }
}

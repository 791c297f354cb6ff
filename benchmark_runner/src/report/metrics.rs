//!
//! Metric lines printed by the aligner.
//!

/// The labels of the metric lines the aligner prints to standard output.
pub const LABELS: [&str; 3] = ["Tiempo total:", "Secuencias procesadas:", "Gaps insertados:"];

///
/// Returns the lines of `stdout` containing any metric label, trimmed, in
/// their original order.
///
pub fn extract(stdout: &str) -> Vec<&str> {
    stdout
        .lines()
        .filter(|line| LABELS.iter().any(|label| line.contains(label)))
        .map(str::trim)
        .collect()
}

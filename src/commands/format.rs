//! Shared output formatting helpers for commands

use stepgraph_core::graph::Weight;

/// Print a records header line: `H stepgraph=1 records=1 mode=<mode> k=v ...`
pub fn print_records_header(mode: &str, extra_fields: &[(&str, &str)]) {
    let mut parts = vec!["H stepgraph=1 records=1".to_string(), format!("mode={}", mode)];

    for (key, value) in extra_fields {
        parts.push(format!("{}={}", key, value));
    }

    println!("{}", parts.join(" "));
}

/// Escape double quotes for quoted records fields
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// A distance for display, `missing` when unreached
pub fn format_distance(distance: Option<Weight>, missing: &str) -> String {
    match distance {
        Some(d) => d.to_string(),
        None => missing.to_string(),
    }
}

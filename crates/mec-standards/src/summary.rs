//! Diagnostic summary of a loaded chart.

use std::collections::BTreeSet;

use mec_model::EligibilityChart;

/// Counts describing a loaded chart, for the CLI and diagnostics.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ChartSummary {
    /// Where the chart came from (bundled asset or a file path).
    pub source: String,
    pub condition_count: usize,
    /// Distinct method names across all conditions.
    pub method_count: usize,
    /// Cells carrying an Initiation rating.
    pub rated_cell_count: usize,
}

/// Summarize a chart.
pub fn summarize(chart: &EligibilityChart, source: impl Into<String>) -> ChartSummary {
    let mut methods = BTreeSet::new();
    let mut rated = 0usize;
    for (_, entry) in chart.conditions() {
        for (method, ratings) in entry.methods() {
            methods.insert(method.to_string());
            if ratings.is_applicable() {
                rated += 1;
            }
        }
    }
    ChartSummary {
        source: source.into(),
        condition_count: chart.len(),
        method_count: methods.len(),
        rated_cell_count: rated,
    }
}

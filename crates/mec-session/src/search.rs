//! Condition search: case-insensitive substring filter over the chart.

use mec_model::EligibilityChart;
use tracing::debug;

use crate::selection::SelectionSet;

/// Queries shorter than this (in characters) produce no results; short
/// input would match most of the chart.
pub const MIN_QUERY_LEN: usize = 3;

/// Filter chart conditions by `query`.
///
/// Returns every condition whose name contains `query` case-insensitively
/// and which is not already selected (case-insensitive exclusion), in chart
/// order. Pure: neither the chart nor the selection is touched.
pub fn filter_conditions<'a>(
    query: &str,
    chart: &'a EligibilityChart,
    excluded: &SelectionSet,
) -> Vec<&'a str> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    let results: Vec<&str> = chart
        .condition_names()
        .filter(|name| name.to_lowercase().contains(&needle))
        .filter(|name| !excluded.contains_ignore_case(name))
        .collect();
    debug!(query, matches = results.len(), "filtered conditions");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use mec_model::{ConditionEntry, MethodRatings};

    fn chart_of(names: &[&str]) -> EligibilityChart {
        let mut chart = EligibilityChart::new();
        for name in names {
            let mut entry = ConditionEntry::new();
            entry.insert(
                "CHC",
                MethodRatings::new(Some("1".to_string()), Some("1".to_string())),
            );
            chart.insert(*name, entry);
        }
        chart
    }

    #[test]
    fn short_queries_return_nothing() {
        let chart = chart_of(&["Asthma"]);
        let none = SelectionSet::new();
        assert!(filter_conditions("", &chart, &none).is_empty());
        assert!(filter_conditions("as", &chart, &none).is_empty());
    }

    #[test]
    fn matching_is_case_insensitive_and_ordered() {
        let chart = chart_of(&["Uterine fibroids", "Asthma", "Anemias - Thalassemia"]);
        let none = SelectionSet::new();
        assert_eq!(filter_conditions("ASTH", &chart, &none), vec!["Asthma"]);
        assert_eq!(
            filter_conditions("asth", &chart, &none),
            filter_conditions("AsTh", &chart, &none)
        );
        // Chart order, not alphabetical
        assert_eq!(
            filter_conditions("ter", &chart, &none),
            vec!["Uterine fibroids"]
        );
    }

    #[test]
    fn selected_conditions_are_excluded_case_insensitively() {
        let chart = chart_of(&["Asthma", "Anemias - Thalassemia"]);
        let selected: SelectionSet = ["ASTHMA"].into_iter().collect();
        assert!(filter_conditions("asthma", &chart, &selected).is_empty());
        assert_eq!(
            filter_conditions("anem", &chart, &selected),
            vec!["Anemias - Thalassemia"]
        );
    }
}

#![allow(missing_docs)]

use mec_model::{ConditionEntry, EligibilityChart, MethodRatings};
use mec_session::{SelectionSet, filter_conditions};
use proptest::prelude::*;

fn chart_of(names: &[String]) -> EligibilityChart {
    let mut chart = EligibilityChart::new();
    for name in names {
        let mut entry = ConditionEntry::new();
        entry.insert(
            "CHC",
            MethodRatings::new(Some("1".to_string()), Some("1".to_string())),
        );
        chart.insert(name.clone(), entry);
    }
    chart
}

fn condition_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,24}"
}

proptest! {
    #[test]
    fn short_queries_always_return_empty(
        names in prop::collection::vec(condition_name(), 0..20),
        excluded in prop::collection::vec(condition_name(), 0..5),
        query in "[A-Za-z]{0,2}",
    ) {
        let chart = chart_of(&names);
        let excluded: SelectionSet = excluded.into_iter().collect();
        prop_assert!(filter_conditions(&query, &chart, &excluded).is_empty());
    }

    #[test]
    fn excluded_names_never_appear(
        names in prop::collection::vec(condition_name(), 1..20),
        query in "[A-Za-z]{3,6}",
    ) {
        let chart = chart_of(&names);
        // Exclude every other chart entry, uppercased to exercise the
        // case-insensitive rule.
        let excluded: SelectionSet = names
            .iter()
            .step_by(2)
            .map(|name| name.to_uppercase())
            .collect();
        for result in filter_conditions(&query, &chart, &excluded) {
            prop_assert!(!excluded.contains_ignore_case(result));
        }
    }

    #[test]
    fn query_case_does_not_change_results(
        names in prop::collection::vec(condition_name(), 0..20),
        query in "[A-Za-z]{3,6}",
    ) {
        let chart = chart_of(&names);
        let none = SelectionSet::new();
        let lower = filter_conditions(&query.to_lowercase(), &chart, &none);
        let upper = filter_conditions(&query.to_uppercase(), &chart, &none);
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn results_preserve_chart_order(
        names in prop::collection::vec(condition_name(), 0..20),
        query in "[A-Za-z]{3,4}",
    ) {
        let chart = chart_of(&names);
        let none = SelectionSet::new();
        let results = filter_conditions(&query, &chart, &none);
        let order: Vec<&str> = chart
            .condition_names()
            .filter(|name| results.contains(name))
            .collect();
        prop_assert_eq!(results, order);
    }

    #[test]
    fn add_then_remove_restores_the_set(
        existing in prop::collection::vec(condition_name(), 0..10),
        name in condition_name(),
    ) {
        let mut set: SelectionSet = existing.into_iter().collect();
        prop_assume!(!set.contains(&name));
        let before = set.clone();

        set.add(name.clone());
        set.add(name.clone());
        prop_assert_eq!(set.len(), before.len() + 1);

        set.remove(&name);
        prop_assert_eq!(set, before);
    }
}

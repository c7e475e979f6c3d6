//! The eligibility chart: condition -> method -> {Initiation, Continuation}.
//!
//! The chart is loaded once at startup and never mutated afterwards. Keys
//! are case-sensitive strings matched case-insensitively; iteration order is
//! the source order of the chart document, which the UI preserves.

use serde::{Deserialize, Serialize};

use crate::lookup::CaseInsensitiveIndex;
use crate::rating::RatingCode;

/// Initiation and Continuation ratings for one method under one condition.
///
/// Raw cell values are kept as strings so unrecognized data can still be
/// displayed (with the neutral color) instead of being rejected at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRatings {
    /// Rating for starting the method (`I` column). A method with no
    /// Initiation value is inapplicable under the condition.
    #[serde(rename = "I", default, skip_serializing_if = "Option::is_none")]
    pub initiation: Option<String>,

    /// Rating for continuing a method already in use (`C` column).
    #[serde(rename = "C", default, skip_serializing_if = "Option::is_none")]
    pub continuation: Option<String>,
}

impl MethodRatings {
    pub fn new(initiation: Option<String>, continuation: Option<String>) -> Self {
        Self {
            initiation: normalize(initiation),
            continuation: normalize(continuation),
        }
    }

    /// True when the method carries an Initiation rating. Only applicable
    /// methods are shown in detail views.
    pub fn is_applicable(&self) -> bool {
        self.initiation.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Typed Initiation category; `None` for absent or malformed cells.
    pub fn initiation_code(&self) -> Option<RatingCode> {
        self.initiation.as_deref().and_then(RatingCode::parse)
    }

    /// Typed Continuation category; `None` for absent or malformed cells.
    pub fn continuation_code(&self) -> Option<RatingCode> {
        self.continuation.as_deref().and_then(RatingCode::parse)
    }
}

/// Empty cells come through as empty strings in the source data.
fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Ratings for every method evaluated under one condition, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionEntry {
    methods: Vec<(String, MethodRatings)>,
}

impl ConditionEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the ratings for `method`. Method names are unique per
    /// condition; a repeated name overwrites the earlier ratings in place.
    pub fn insert(&mut self, method: impl Into<String>, ratings: MethodRatings) {
        let method = method.into();
        if let Some(slot) = self.methods.iter_mut().find(|(name, _)| *name == method) {
            slot.1 = ratings;
        } else {
            self.methods.push((method, ratings));
        }
    }

    /// All methods in source order.
    pub fn methods(&self) -> impl Iterator<Item = (&str, &MethodRatings)> {
        self.methods
            .iter()
            .map(|(name, ratings)| (name.as_str(), ratings))
    }

    /// Methods that carry an Initiation rating, in source order.
    pub fn applicable_methods(&self) -> impl Iterator<Item = (&str, &MethodRatings)> {
        self.methods().filter(|(_, ratings)| ratings.is_applicable())
    }

    pub fn get(&self, method: &str) -> Option<&MethodRatings> {
        self.methods
            .iter()
            .find(|(name, _)| name == method)
            .map(|(_, ratings)| ratings)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

/// The full US MEC summary chart held in memory.
#[derive(Debug, Clone, Default)]
pub struct EligibilityChart {
    conditions: Vec<(String, ConditionEntry)>,
    index: CaseInsensitiveIndex,
}

impl EligibilityChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition, preserving source order. A name already present
    /// (case-insensitively) has its entry replaced rather than duplicated.
    pub fn insert(&mut self, name: impl Into<String>, entry: ConditionEntry) {
        let name = name.into();
        match self.index.insert(&name, self.conditions.len()) {
            Some(existing) => self.conditions[existing].1 = entry,
            None => self.conditions.push((name, entry)),
        }
    }

    /// Look up a condition case-insensitively.
    pub fn get(&self, name: &str) -> Option<&ConditionEntry> {
        self.index
            .get(name)
            .map(|position| &self.conditions[position].1)
    }

    /// The chart's own spelling of `name`, matched case-insensitively.
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|position| self.conditions[position].0.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// All conditions in source order.
    pub fn conditions(&self) -> impl Iterator<Item = (&str, &ConditionEntry)> {
        self.conditions
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    /// Condition names in source order.
    pub fn condition_names(&self) -> impl Iterator<Item = &str> {
        self.conditions.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratings(i: &str, c: &str) -> MethodRatings {
        MethodRatings::new(Some(i.to_string()), Some(c.to_string()))
    }

    #[test]
    fn empty_cells_normalize_to_none() {
        let blank = MethodRatings::new(Some(String::new()), Some(" ".to_string()));
        assert_eq!(blank.initiation, None);
        assert_eq!(blank.continuation, None);
        assert!(!blank.is_applicable());
    }

    #[test]
    fn applicability_requires_initiation() {
        let mut entry = ConditionEntry::new();
        entry.insert("Cu-IUD", ratings("4", "2"));
        entry.insert("CHC", MethodRatings::new(None, Some("2".to_string())));
        let applicable: Vec<&str> = entry.applicable_methods().map(|(name, _)| name).collect();
        assert_eq!(applicable, vec!["Cu-IUD"]);
    }

    #[test]
    fn chart_lookup_is_case_insensitive_and_ordered() {
        let mut chart = EligibilityChart::new();
        let mut entry = ConditionEntry::new();
        entry.insert("POP", ratings("1", "1"));
        chart.insert("Uterine fibroids", entry.clone());
        chart.insert("Asthma", entry);

        assert!(chart.contains("ASTHMA"));
        assert_eq!(chart.canonical_name("uterine FIBROIDS"), Some("Uterine fibroids"));
        let names: Vec<&str> = chart.condition_names().collect();
        assert_eq!(names, vec!["Uterine fibroids", "Asthma"]);
    }

    #[test]
    fn reinserting_a_condition_replaces_in_place() {
        let mut chart = EligibilityChart::new();
        let mut first = ConditionEntry::new();
        first.insert("CHC", ratings("2", "2"));
        let mut second = ConditionEntry::new();
        second.insert("CHC", ratings("3", "3"));

        chart.insert("Asthma", first);
        chart.insert("ASTHMA", second);

        assert_eq!(chart.len(), 1);
        let entry = chart.get("asthma").unwrap();
        assert_eq!(entry.get("CHC").unwrap().initiation.as_deref(), Some("3"));
    }
}

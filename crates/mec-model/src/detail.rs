//! Detail projection: what the detail renderer shows for a selected
//! condition. Methods without an Initiation rating are excluded.

use serde::Serialize;

use crate::chart::{ConditionEntry, EligibilityChart};
use crate::rating::{ColorToken, RatingCode};

/// One method row in a condition's detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDetail {
    pub method: String,
    pub initiation: Option<String>,
    pub continuation: Option<String>,
}

impl MethodDetail {
    pub fn initiation_code(&self) -> Option<RatingCode> {
        self.initiation.as_deref().and_then(RatingCode::parse)
    }

    pub fn continuation_code(&self) -> Option<RatingCode> {
        self.continuation.as_deref().and_then(RatingCode::parse)
    }

    pub fn initiation_color(&self) -> ColorToken {
        ColorToken::for_code(self.initiation.as_deref())
    }

    pub fn continuation_color(&self) -> ColorToken {
        ColorToken::for_code(self.continuation.as_deref())
    }
}

/// Detail view of one selected condition: its applicable methods in chart
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionDetail {
    pub condition: String,
    pub methods: Vec<MethodDetail>,
}

impl ConditionDetail {
    /// Project a chart entry into its detail view, dropping inapplicable
    /// methods.
    pub fn project(condition: &str, entry: &ConditionEntry) -> Self {
        let methods = entry
            .applicable_methods()
            .map(|(method, ratings)| MethodDetail {
                method: method.to_string(),
                initiation: ratings.initiation.clone(),
                continuation: ratings.continuation.clone(),
            })
            .collect();
        Self {
            condition: condition.to_string(),
            methods,
        }
    }

    /// Resolve `name` against the chart case-insensitively and project it.
    /// Names absent from the chart yield `None` rather than an error.
    pub fn lookup(chart: &EligibilityChart, name: &str) -> Option<Self> {
        let canonical = chart.canonical_name(name)?;
        let entry = chart.get(name)?;
        Some(Self::project(canonical, entry))
    }
}

//! Chart loading.
//!
//! The summary chart ships with the crate as a bundled JSON document shaped
//! `{ condition: { method: {"I": "1".."4"|"", "C": ...} } }`. An external
//! file can take its place via `USMEC_CHART_PATH` or an explicit path.
//!
//! Loading is deliberately forgiving: malformed cells degrade to absent
//! ratings (rendered neutral downstream) and only a structurally unusable
//! document is an error.

use std::path::Path;

use serde_json::Value;
use tracing::warn;

use mec_model::{ConditionEntry, EligibilityChart, MethodRatings};

use crate::error::ChartError;

/// Environment variable overriding the bundled chart.
pub const CHART_ENV_VAR: &str = "USMEC_CHART_PATH";

/// Canonical source PDF for the summary chart.
pub const SUMMARY_CHART_PDF_URL: &str =
    "https://raw.githubusercontent.com/Atomic-Lemur/us-medical-eligibility-criteria-for-contraceptive-use/main/assets/summary_chart.pdf";

const BUNDLED_CHART: &str = include_str!("../assets/summary_chart.json");
const BUNDLED_ORIGIN: &str = "bundled summary chart";

/// Load the chart from `USMEC_CHART_PATH` when set, otherwise the bundled
/// asset.
pub fn load_default_chart() -> Result<EligibilityChart, ChartError> {
    if let Ok(path) = std::env::var(CHART_ENV_VAR) {
        return load_chart(Path::new(&path));
    }
    parse_chart(BUNDLED_CHART, BUNDLED_ORIGIN)
}

/// Load a chart JSON document from disk.
pub fn load_chart(path: &Path) -> Result<EligibilityChart, ChartError> {
    let text = std::fs::read_to_string(path).map_err(|source| ChartError::io(path, source))?;
    parse_chart(&text, &path.display().to_string())
}

/// Parse a chart document, preserving the source order of conditions and
/// methods. `origin` labels the document in errors and warnings.
pub fn parse_chart(text: &str, origin: &str) -> Result<EligibilityChart, ChartError> {
    let root: Value = serde_json::from_str(text).map_err(|source| ChartError::Json {
        origin: origin.to_string(),
        source,
    })?;
    let Value::Object(conditions) = root else {
        return Err(ChartError::InvalidShape {
            origin: origin.to_string(),
            message: "top level must be an object keyed by condition name".to_string(),
        });
    };

    let mut chart = EligibilityChart::new();
    for (condition, methods) in conditions {
        let Value::Object(methods) = methods else {
            warn!(condition = %condition, origin, "skipping condition without a method map");
            continue;
        };
        let mut entry = ConditionEntry::new();
        for (method, cell) in methods {
            entry.insert(method, parse_cell(&cell));
        }
        chart.insert(condition, entry);
    }
    Ok(chart)
}

/// A rating cell. Non-object cells and non-string rating values degrade to
/// absent ratings rather than failing the load.
fn parse_cell(cell: &Value) -> MethodRatings {
    let Value::Object(fields) = cell else {
        return MethodRatings::default();
    };
    MethodRatings::new(string_field(fields.get("I")), string_field(fields.get("C")))
}

fn string_field(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => Some(text.clone()),
        _ => None,
    }
}

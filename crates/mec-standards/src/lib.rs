#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod summary;

pub use crate::error::ChartError;
pub use crate::loader::{
    CHART_ENV_VAR, SUMMARY_CHART_PDF_URL, load_chart, load_default_chart, parse_chart,
};
pub use crate::summary::{ChartSummary, summarize};

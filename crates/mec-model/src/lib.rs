#![deny(unsafe_code)]

pub mod chart;
pub mod detail;
mod lookup;
pub mod rating;

pub use chart::{ConditionEntry, EligibilityChart, MethodRatings};
pub use detail::{ConditionDetail, MethodDetail};
pub use rating::{ColorToken, RatingCode};

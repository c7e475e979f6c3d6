#![deny(unsafe_code)]

pub mod debounce;
pub mod search;
pub mod selection;
pub mod session;

pub use crate::debounce::{DEBOUNCE_WINDOW, QueryDebouncer};
pub use crate::search::{MIN_QUERY_LEN, filter_conditions};
pub use crate::selection::SelectionSet;
pub use crate::session::{SearchSession, SearchState};

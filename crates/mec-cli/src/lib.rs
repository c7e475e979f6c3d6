//! Library components for the US MEC viewer CLI.

pub mod logging;
pub mod render;

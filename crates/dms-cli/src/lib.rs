//! CLI library components for Data Module Studio.

pub mod logging;

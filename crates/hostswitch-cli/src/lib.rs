//! CLI library components for the hosts switcher.

pub mod logging;

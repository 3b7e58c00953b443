//! Library components of the `gosnomer` command-line tool.

pub mod batch;
pub mod config;
pub mod logging;

//! Hive CLI
//!
//! Command-line tools for submitting jobs to the hive and waiting for
//! them to finish: `copy-database` and `load-metadata`. Each invocation
//! handles exactly one job, synchronously.

pub mod copy;
pub mod logging;
pub mod metadata;
pub mod report;

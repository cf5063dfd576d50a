//! Data Transfer Objects for the hive REST API
//!
//! This module contains the request and response bodies exchanged with
//! the hive endpoints. Job-input records serialize only the fields that
//! were explicitly provided; the hive fills its own defaults for the rest.

pub mod job;

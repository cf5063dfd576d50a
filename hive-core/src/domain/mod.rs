//! Core domain types
//!
//! This module contains the domain structures shared between the hive
//! client and the command-line tools.

pub mod job;

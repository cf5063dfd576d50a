//! Hive Core
//!
//! Core types for the hive job submission tools.
//!
//! This crate contains:
//! - Domain types: job identifiers, statuses, and result records
//! - DTOs: request and response bodies exchanged with the hive REST API

pub mod domain;
pub mod dto;

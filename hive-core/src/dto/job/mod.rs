//! Job DTOs for the hive REST API

use serde::{Deserialize, Serialize};

use crate::domain::job::{JobId, JobType};

/// Request to create a new job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitJob {
    pub job_type: JobType,
    pub input: serde_json::Value,
}

/// Handle returned by the hive on submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobHandle {
    pub job_id: JobId,
}

/// Failure payload the hive stores for a failed job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureMessage {
    pub msg: String,
}

/// Input record for a database copy job
///
/// A key is on the wire if and only if the caller set it: omitting `drop`
/// means no `drop` key, not `drop: false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseCopyInput {
    pub source_db_uri: String,
    pub target_db_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_tables: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_tables: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop: Option<bool>,
}

/// Input record for a metadata load job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataUpdateInput {
    pub metadata_uri: String,
    pub database_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e_release: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eg_release: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_release: Option<u32>,
}

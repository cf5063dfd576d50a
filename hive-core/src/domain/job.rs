//! Job domain types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier the hive hands out for a submitted job
///
/// Valid for status and failure-message lookups for as long as the hive
/// retains the job. Never persisted locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub i64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of job the hive knows how to execute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    /// Copy a database between servers
    #[serde(rename = "copy_database")]
    CopyDatabase,
    /// Load a database into the metadata store
    #[serde(rename = "metadata_updater_processdb")]
    MetadataUpdate,
}

impl JobType {
    /// Wire name of the job type, as the hive expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::CopyDatabase => "copy_database",
            JobType::MetadataUpdate => "metadata_updater_processdb",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job status as reported by the hive
///
/// `Incomplete` is the only non-terminal status. `Failed` has a failure
/// message stored on the hive side. Any status string this client does not
/// recognize is carried verbatim and treated as terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Incomplete,
    Failed,
    Complete,
    Other(String),
}

impl JobStatus {
    /// Whether this status ends the polling loop
    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobStatus::Incomplete)
    }

    /// The raw status string
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Incomplete => "incomplete",
            JobStatus::Failed => "failed",
            JobStatus::Complete => "complete",
            JobStatus::Other(s) => s,
        }
    }
}

impl From<String> for JobStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "incomplete" => JobStatus::Incomplete,
            "failed" => JobStatus::Failed,
            "complete" => JobStatus::Complete,
            _ => JobStatus::Other(s),
        }
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result record the hive reports for a job
///
/// The hive may attach fields beyond the status (worker info, timings);
/// they are kept as-is but not interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResult {
    pub status: JobStatus,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

//! Terminal outcome reporting
//!
//! A failed job gets its stored failure message fetched and logged at
//! error level; any other terminal status is printed as a single line on
//! standard output. The process exit code stays zero either way — callers
//! that care about the job outcome parse the status line.

use anyhow::Result;
use tracing::error;

use hive_client::HiveClient;
use hive_core::domain::job::{JobId, JobResult, JobStatus};

/// Report a terminal job result
///
/// # Arguments
/// * `client` - Client used for the failure-message lookup
/// * `id` - The job the result belongs to
/// * `result` - A terminal result record
pub async fn outcome(client: &HiveClient, id: JobId, result: &JobResult) -> Result<()> {
    if result.status == JobStatus::Failed {
        let msg = client.job_failure_message(id).await?;
        error!("Job {} failed with error {}", id, msg);
    } else {
        println!("Status: {}", result.status);
    }
    Ok(())
}

//! Job endpoints of the hive REST API

use serde::Serialize;

use crate::HiveClient;
use crate::error::Result;
use hive_core::domain::job::{JobId, JobResult, JobType};
use hive_core::dto::job::{FailureMessage, JobHandle, SubmitJob};

impl HiveClient {
    /// Submit a new job to the hive
    ///
    /// The input record is serialized as-is: only fields the caller set
    /// end up on the wire. A connection failure is propagated, not
    /// retried; retry responsibility sits with the hive.
    ///
    /// # Arguments
    /// * `job_type` - The kind of job to run
    /// * `input` - The job-input record
    ///
    /// # Returns
    /// The id under which the hive queued the job
    pub async fn create_job<T: Serialize>(&self, job_type: JobType, input: &T) -> Result<JobId> {
        let url = format!("{}/api/jobs", self.base_url);
        let body = SubmitJob {
            job_type,
            input: serde_json::to_value(input)?,
        };
        let response = self.client.post(&url).json(&body).send().await?;

        let handle: JobHandle = self.handle_response(response).await?;
        Ok(handle.job_id)
    }

    /// Fetch the current result record for a job
    ///
    /// # Arguments
    /// * `id` - The job id returned by submission
    ///
    /// # Returns
    /// The result record, terminal or not
    pub async fn job_result(&self, id: JobId) -> Result<JobResult> {
        let url = format!("{}/api/jobs/{}/result", self.base_url, id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Fetch the failure message the hive stored for a failed job
    ///
    /// # Arguments
    /// * `id` - The job id returned by submission
    ///
    /// # Returns
    /// The stored failure message
    pub async fn job_failure_message(&self, id: JobId) -> Result<String> {
        let url = format!("{}/api/jobs/{}/failure", self.base_url, id);
        let response = self.client.get(&url).send().await?;

        let failure: FailureMessage = self.handle_response(response).await?;
        Ok(failure.msg)
    }
}

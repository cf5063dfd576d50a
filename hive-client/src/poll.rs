//! Fixed-interval polling for job completion
//!
//! The hive's intended usage pattern: sleep, then ask for the result,
//! until the status is anything other than `incomplete`. The loop is
//! unbounded unless a maximum attempt count is configured; there is no
//! backoff and no cancellation path.

use std::time::Duration;

use tracing::{debug, info};

use crate::HiveClient;
use crate::error::{ClientError, Result};
use hive_core::domain::job::{JobId, JobResult};

/// Polling configuration
#[derive(Debug, Clone)]
pub struct PollOptions {
    /// Time to wait before each status fetch
    pub interval: Duration,
    /// Optional bound on the number of status fetches. `None` polls until
    /// the job resolves or the process is killed.
    pub max_attempts: Option<u64>,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30),
            max_attempts: None,
        }
    }
}

/// Poll the hive until a job reaches a terminal status
///
/// Sleeps for the configured interval before every fetch, including the
/// first one. Returns the terminal result record, or
/// [`ClientError::PollLimitReached`] if the attempt bound runs out first.
///
/// # Arguments
/// * `client` - The hive client to poll through
/// * `id` - The job id returned by submission
/// * `options` - Interval and optional attempt bound
pub async fn wait_for_result(
    client: &HiveClient,
    id: JobId,
    options: &PollOptions,
) -> Result<JobResult> {
    let mut attempts: u64 = 0;

    loop {
        if let Some(max) = options.max_attempts {
            if attempts >= max {
                return Err(ClientError::PollLimitReached { attempts });
            }
        }

        info!("Sleeping for {}s", options.interval.as_secs());
        tokio::time::sleep(options.interval).await;
        attempts += 1;

        let result = client.job_result(id).await?;
        if result.status.is_terminal() {
            debug!("Job {} finished with status {}", id, result.status);
            return Ok(result);
        }

        debug!("Job {} still incomplete after {} poll(s)", id, attempts);
    }
}

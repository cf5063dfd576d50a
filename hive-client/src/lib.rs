//! Hive HTTP Client
//!
//! A simple, type-safe HTTP client for the hive job-scheduling service.
//!
//! Submission hands back a job id; everything else about the job lives on
//! the hive side and is read back through status and failure-message
//! lookups. The [`poll`] module implements the hive's intended usage
//! pattern of fixed-interval polling until a terminal status.
//!
//! # Example
//!
//! ```no_run
//! use hive_client::HiveClient;
//! use hive_core::domain::job::JobType;
//! use hive_core::dto::job::DatabaseCopyInput;
//!
//! #[tokio::main]
//! async fn main() -> hive_client::Result<()> {
//!     let client = HiveClient::new("http://localhost:8080");
//!
//!     let input = DatabaseCopyInput {
//!         source_db_uri: "mysql://a/db1".to_string(),
//!         target_db_uri: "mysql://b/db1".to_string(),
//!         only_tables: None,
//!         skip_tables: None,
//!         update: None,
//!         drop: None,
//!     };
//!     let job_id = client.create_job(JobType::CopyDatabase, &input).await?;
//!
//!     println!("Submitted job {}", job_id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;
pub mod poll;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use poll::{PollOptions, wait_for_result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the hive REST API
///
/// This client provides methods for the three calls the submission tools
/// need:
/// - Job submission (`create_job`)
/// - Result lookup (`job_result`)
/// - Failure-message lookup (`job_failure_message`)
#[derive(Debug, Clone)]
pub struct HiveClient {
    /// Base URL of the hive endpoint (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl HiveClient {
    /// Create a new hive client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the hive endpoint (e.g., "http://localhost:8080")
    ///
    /// # Example
    /// ```
    /// use hive_client::HiveClient;
    ///
    /// let client = HiveClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new hive client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the hive endpoint
    /// * `client` - A configured reqwest Client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the hive endpoint
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error
    /// if the request failed, or deserializes the response body if
    /// successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

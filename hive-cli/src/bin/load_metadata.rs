//! Submit a metadata load job to the hive and poll until it resolves

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use hive_cli::metadata::MetadataArgs;
use hive_cli::{logging, report};
use hive_client::{HiveClient, PollOptions};
use hive_core::domain::job::JobType;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init("load_metadata=info,hive_cli=info,hive_client=info");

    let args = MetadataArgs::parse();
    let client = HiveClient::new(&args.hive_uri);

    let input = args.input();
    info!("Submitting job with arguments {:?}", input);
    let job_id = client.create_job(JobType::MetadataUpdate, &input).await?;
    info!("Job submitted with id {}", job_id);

    let options = PollOptions {
        interval: Duration::from_secs(args.sleep),
        max_attempts: args.max_attempts,
    };
    let result = hive_client::wait_for_result(&client, job_id, &options).await?;

    report::outcome(&client, job_id, &result).await
}

//! Database copy arguments
//!
//! Flag surface of the `copy-database` tool. Long flags keep the
//! underscore spelling the hive tooling has always used.

use clap::Parser;

use hive_core::dto::job::DatabaseCopyInput;

/// Submit a database copy job to the hive and wait for it to finish
#[derive(Debug, Parser)]
#[command(name = "copy-database", version, about = "Copy a database")]
pub struct CopyArgs {
    /// URI of the hive endpoint
    #[arg(long = "hive_uri", env = "HIVE_URI")]
    pub hive_uri: String,

    /// URI of database to copy from
    #[arg(long = "source_db_uri")]
    pub source_db_uri: String,

    /// URI of database to copy to
    #[arg(long = "target_db_uri")]
    pub target_db_uri: String,

    /// Comma-separated list of tables to copy
    #[arg(long = "only_tables")]
    pub only_tables: Option<String>,

    /// Comma-separated list of tables to skip
    #[arg(long = "skip_tables")]
    pub skip_tables: Option<String>,

    /// Incremental update using rsync checksums
    #[arg(long)]
    pub update: bool,

    /// Drop the database on the target server before copying
    #[arg(long)]
    pub drop: bool,

    /// Seconds to wait between polling for results
    #[arg(long, default_value_t = 30)]
    pub sleep: u64,

    /// Give up after this many polls (default: poll until the job resolves)
    #[arg(long = "max_attempts")]
    pub max_attempts: Option<u64>,
}

impl CopyArgs {
    /// Build the job-input record
    ///
    /// Boolean toggles are sent only when the flag was supplied; an
    /// omitted flag means no key at all, not `false`.
    pub fn input(&self) -> DatabaseCopyInput {
        DatabaseCopyInput {
            source_db_uri: self.source_db_uri.clone(),
            target_db_uri: self.target_db_uri.clone(),
            only_tables: self.only_tables.clone(),
            skip_tables: self.skip_tables.clone(),
            update: self.update.then_some(true),
            drop: self.drop.then_some(true),
        }
    }
}

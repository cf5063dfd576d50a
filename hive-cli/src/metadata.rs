//! Metadata load arguments
//!
//! Flag surface of the `load-metadata` tool.

use clap::Parser;

use hive_core::dto::job::MetadataUpdateInput;

/// Submit a metadata load job to the hive and wait for it to finish
#[derive(Debug, Parser)]
#[command(name = "load-metadata", version, about = "Load a database into metadata")]
pub struct MetadataArgs {
    /// URI of the hive endpoint
    #[arg(long = "hive_uri", env = "HIVE_URI")]
    pub hive_uri: String,

    /// URI of the metadata database
    #[arg(long = "metadata_uri")]
    pub metadata_uri: String,

    /// URI of the database to load
    #[arg(long = "database_uri")]
    pub database_uri: String,

    /// Release number
    #[arg(long = "e_release")]
    pub e_release: Option<u32>,

    /// Release date
    #[arg(long = "release_date")]
    pub release_date: Option<String>,

    /// Genomes release number
    #[arg(long = "eg_release")]
    pub eg_release: Option<u32>,

    /// Whether this is the current release
    #[arg(long = "current_release")]
    pub current_release: Option<u32>,

    /// Seconds to wait between polling for results
    #[arg(long, default_value_t = 30)]
    pub sleep: u64,

    /// Give up after this many polls (default: poll until the job resolves)
    #[arg(long = "max_attempts")]
    pub max_attempts: Option<u64>,
}

impl MetadataArgs {
    /// Build the job-input record; unset fields produce no keys
    pub fn input(&self) -> MetadataUpdateInput {
        MetadataUpdateInput {
            metadata_uri: self.metadata_uri.clone(),
            database_uri: self.database_uri.clone(),
            e_release: self.e_release,
            release_date: self.release_date.clone(),
            eg_release: self.eg_release,
            current_release: self.current_release,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [&str; 7] = [
        "load-metadata",
        "--metadata_uri",
        "mysql://m/meta",
        "--database_uri",
        "mysql://a/db1",
        "--hive_uri",
        "http://hive:8080",
    ];

    #[test]
    fn test_required_flags_only() {
        let args = MetadataArgs::try_parse_from(REQUIRED).unwrap();
        assert_eq!(args.metadata_uri, "mysql://m/meta");
        assert_eq!(args.database_uri, "mysql://a/db1");
        assert_eq!(args.sleep, 30);
    }

    #[test]
    fn test_missing_required_flag_is_an_error() {
        let result = MetadataArgs::try_parse_from([
            "load-metadata",
            "--metadata_uri",
            "mysql://m/meta",
            "--hive_uri",
            "http://hive:8080",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_release_fields_are_optional() {
        let mut argv: Vec<&str> = REQUIRED.to_vec();
        argv.extend(["--e_release", "110", "--release_date", "2026-08-01"]);
        let input = MetadataArgs::try_parse_from(argv).unwrap().input();

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["e_release"], 110);
        assert_eq!(value["release_date"], "2026-08-01");
        assert!(value.get("eg_release").is_none());
        assert!(value.get("current_release").is_none());
    }
}

//! Configuration for the pipeline handlers, read from the environment.

use crate::domain::jobs::InputRotate;
use crate::domain::template::TemplateTable;
use crate::error::ConfigError;
use std::env;

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or(ConfigError::Missing { name })
}

fn flag<F>(lookup: &F, name: &'static str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(false),
        Some(value) => match value.trim() {
            "true" => Ok(true),
            "false" | "" => Ok(false),
            _ => Err(ConfigError::InvalidBool { name, value }),
        },
    }
}

fn input_rotate(value: Option<String>) -> Option<InputRotate> {
    value.and_then(|v| serde_json::from_value(serde_json::Value::String(v)).ok())
}

impl TemplateTable {
    /// Read `Landscape_Template_<tier>p` / `Portrait_Template_<tier>p`.
    pub fn from_vars<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            landscape_2160p: lookup("Landscape_Template_2160p"),
            landscape_1080p: lookup("Landscape_Template_1080p"),
            landscape_720p: lookup("Landscape_Template_720p"),
            landscape_480p: lookup("Landscape_Template_480p"),
            landscape_360p: lookup("Landscape_Template_360p"),
            landscape_240p: lookup("Landscape_Template_240p"),
            portrait_2160p: lookup("Portrait_Template_2160p"),
            portrait_1080p: lookup("Portrait_Template_1080p"),
            portrait_720p: lookup("Portrait_Template_720p"),
            portrait_480p: lookup("Portrait_Template_480p"),
            portrait_360p: lookup("Portrait_Template_360p"),
            portrait_240p: lookup("Portrait_Template_240p"),
        }
    }
}

/// Defaults for every new job, used by the ingest handler.
#[derive(Clone, Debug, Default)]
pub struct WorkflowConfig {
    pub workflow_name: String,
    /// Bucket the source uploads land in
    pub source_bucket: String,
    /// Bucket transcoded outputs are written to
    pub destination_bucket: String,
    pub cloud_front: Option<String>,
    pub frame_capture: bool,
    pub archive_source: Option<String>,
    pub templates: TemplateTable,
    pub input_rotate: Option<InputRotate>,
    pub accelerated_transcoding: Option<String>,
    pub enable_sns: bool,
    pub enable_sqs: bool,
    /// Stack-level setting; metadata files cannot change it.
    pub enable_media_package: bool,
}

impl WorkflowConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_vars(&|name: &str| env::var(name).ok())
    }

    pub fn from_vars<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            workflow_name: required(lookup, "WorkflowName")?,
            source_bucket: required(lookup, "Source")?,
            destination_bucket: required(lookup, "Destination")?,
            cloud_front: lookup("CloudFront"),
            frame_capture: flag(lookup, "FrameCapture")?,
            archive_source: lookup("ArchiveSource"),
            templates: TemplateTable::from_vars(lookup),
            input_rotate: input_rotate(lookup("InputRotate")),
            accelerated_transcoding: lookup("AcceleratedTranscoding"),
            enable_sns: flag(lookup, "EnableSns")?,
            enable_sqs: flag(lookup, "EnableSqs")?,
            enable_media_package: flag(lookup, "EnableMediaPackage")?,
        })
    }
}

/// Configuration for the profiler handler.
#[derive(Clone, Debug)]
pub struct ProfilerConfig {
    /// DynamoDB table holding job records, keyed by guid
    pub dynamodb_table: String,
}

impl ProfilerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_vars(&|name: &str| env::var(name).ok())
    }

    pub fn from_vars<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            dynamodb_table: required(lookup, "DynamoDBTable")?,
        })
    }
}

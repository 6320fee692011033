//! Storage event payloads delivered to the handlers.

use percent_encoding::percent_decode_str;
use serde::Deserialize;

/// S3 notification, optionally tagged with the workflow trigger by the
/// event rule that forwards it.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<StorageEventRecord>,
    #[serde(rename = "workflowTrigger", default)]
    pub workflow_trigger: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageEventRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Object {
    /// URL-encoded object key, as S3 delivers it.
    pub key: String,
}

impl StorageEvent {
    pub fn first_record(&self) -> Option<&StorageEventRecord> {
        self.records.first()
    }
}

/// Decode an S3 notification key: `+` is a space, the rest is
/// percent-encoded UTF-8.
pub fn decode_object_key(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .ok()
        .map(|key| key.into_owned())
}

/// The job guid is the last path segment of the object key.
pub fn guid_from_key(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

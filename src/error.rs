//! Error types for the pipeline handlers.

use thiserror::Error;

/// Boxed collaborator error, as returned by every port.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Failures while evaluating a profile for a single job record.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// No media-info report, or a report without any video track.
    #[error("source media info has no video track")]
    MissingMetadata,

    #[error("source media info is not a valid report: {0}")]
    InvalidMediaInfo(#[from] serde_json::Error),
}

/// Failures of the profiler handler. Every variant carries the job guid.
#[derive(Debug, Error)]
pub enum ProfilerError {
    #[error("no job record stored for guid {guid}")]
    JobNotFound { guid: String },

    #[error("failed to fetch job record {guid}: {source}")]
    Lookup {
        guid: String,
        #[source]
        source: PortError,
    },

    #[error("failed to profile job {guid}: {source}")]
    Profile {
        guid: String,
        #[source]
        source: ProfileError,
    },
}

/// Failures of the ingest (input validation) handler.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("storage event has no records")]
    MissingRecord,

    #[error("object key {key:?} is not valid UTF-8 once decoded")]
    InvalidKey { key: String },

    #[error("workflow trigger {0:?} is not defined")]
    UnknownTrigger(Option<String>),

    #[error("srcVideo is not defined in metadata file {key}")]
    MissingSourceVideo { key: String },

    #[error("metadata file {key} is not a valid JSON object: {source}")]
    InvalidMetadata {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage request for {key} failed: {source}")]
    Storage {
        key: String,
        #[source]
        source: PortError,
    },
}

/// Failures of the first-frame (poster promotion) handler.
#[derive(Debug, Error)]
pub enum FirstFrameError {
    #[error("storage event has no records")]
    MissingRecord,

    #[error("failed to copy {source_key} to {dest_key}: {source}")]
    Storage {
        source_key: String,
        dest_key: String,
        #[source]
        source: PortError,
    },
}

/// Invalid or incomplete environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} env var required")]
    Missing { name: &'static str },

    #[error("{name} must be true or false, got {value:?}")]
    InvalidBool { name: &'static str, value: String },
}

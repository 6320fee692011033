//! VOD Profiler - transcoding pipeline handlers
//!
//! Hexagonal Architecture:
//! - domain/: Pure business logic (profile resolution, job records, storage events)
//! - ports/: Trait definitions
//! - adapters/: Concrete implementations
//! - application/: Handler services
//! - config: Environment configuration
//!
//! # Features
//! - `aws`: DynamoDB/S3 adapters and the Lambda binaries (default)

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for convenience
pub use config::{ProfilerConfig, WorkflowConfig};
pub use domain::jobs::JobRecord;
pub use domain::profile::{resolve_profile, JobTemplateSelection, ProfileRequest};
pub use error::{FirstFrameError, IngestError, ProfileError, ProfilerError};

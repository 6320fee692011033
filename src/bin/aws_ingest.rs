//! AWS Ingest Lambda
//!
//! Triggered by S3 uploads (videos or metadata JSON files) tagged with a
//! `workflowTrigger`. Validates the upload and returns a fresh job record.
//!
//! Environment Variables:
//! - AWS_REGION: AWS region
//! - WorkflowName, Source, Destination: required
//! - CloudFront, FrameCapture, ArchiveSource, InputRotate,
//!   AcceleratedTranscoding, EnableSns, EnableSqs, EnableMediaPackage
//! - Landscape_Template_<tier>p, Portrait_Template_<tier>p

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing_subscriber::EnvFilter;
use vod_profiler::adapters::aws::s3::S3Adapter;
use vod_profiler::application::ingest::IngestService;
use vod_profiler::domain::events::StorageEvent;
use vod_profiler::{JobRecord, WorkflowConfig};

async fn function_handler(
    service: &IngestService<S3Adapter>,
    event: LambdaEvent<StorageEvent>,
) -> Result<JobRecord, Error> {
    Ok(service.handle(&event.payload).await?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let config = WorkflowConfig::from_env()?;

    let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let storage = S3Adapter::new(aws_sdk_s3::Client::new(&aws));

    let service = IngestService::new(storage, config);
    let service = &service;

    run(service_fn(move |event| async move {
        function_handler(service, event).await
    }))
    .await
}

//! AWS Profiler Lambda
//!
//! Invoked by the workflow with `{ "guid": ... }`. Loads the job record from
//! DynamoDB, picks the encoding profile and job template, and returns the
//! updated record to the workflow.
//!
//! Environment Variables:
//! - AWS_REGION: AWS region
//! - DynamoDBTable: DynamoDB table holding job records

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing_subscriber::EnvFilter;
use vod_profiler::adapters::aws::dynamodb::DynamoAdapter;
use vod_profiler::application::profiler::{ProfilerEvent, ProfilerService};
use vod_profiler::{JobRecord, ProfilerConfig};

async fn function_handler(
    service: &ProfilerService<DynamoAdapter>,
    event: LambdaEvent<ProfilerEvent>,
) -> Result<JobRecord, Error> {
    Ok(service.handle(&event.payload).await?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let config = ProfilerConfig::from_env()?;

    // Load AWS config
    let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let repo = DynamoAdapter::new(aws_sdk_dynamodb::Client::new(&aws), config.dynamodb_table);

    let service = ProfilerService::new(repo);
    let service = &service;

    run(service_fn(move |event| async move {
        function_handler(service, event).await
    }))
    .await
}

//! AWS First-Frame Lambda
//!
//! Triggered by S3 when frame capture writes a thumbnail. Copies the frame
//! to `<job prefix>/mobile.jpg` so players have a poster image.
//!
//! Environment Variables:
//! - AWS_REGION: AWS region

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing_subscriber::EnvFilter;
use vod_profiler::adapters::aws::s3::S3Adapter;
use vod_profiler::application::first_frame::FirstFrameService;
use vod_profiler::domain::events::StorageEvent;

async fn function_handler(
    service: &FirstFrameService<S3Adapter>,
    event: LambdaEvent<StorageEvent>,
) -> Result<(), Error> {
    service.handle(&event.payload).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let service = FirstFrameService::new(S3Adapter::new(aws_sdk_s3::Client::new(&aws)));
    let service = &service;

    run(service_fn(move |event| async move {
        function_handler(service, event).await
    }))
    .await
}

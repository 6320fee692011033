//! AWS adapters (DynamoDB job records, S3 objects).

pub mod dynamodb;
pub mod s3;

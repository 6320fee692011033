use crate::error::PortError;
use crate::ports::storage::ObjectStore;
use async_trait::async_trait;
use aws_sdk_s3::Client;

/// S3Adapter implements ObjectStore for AWS S3.
#[derive(Clone)]
pub struct S3Adapter {
    client: Client,
}

impl S3Adapter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// `CopySource` value for an object: `bucket/key`.
pub fn copy_source(bucket: &str, key: &str) -> String {
    format!("{}/{}", bucket, key)
}

#[async_trait]
impl ObjectStore for S3Adapter {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, PortError> {
        let resp = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await?;

        let body = resp.body.collect().await?;
        Ok(body.into_bytes().to_vec())
    }

    async fn head_object(&self, bucket: &str, key: &str) -> Result<(), PortError> {
        self.client
            .head_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await?;
        Ok(())
    }

    async fn copy_object(
        &self,
        bucket: &str,
        source_key: &str,
        dest_key: &str,
    ) -> Result<(), PortError> {
        self.client
            .copy_object()
            .bucket(bucket)
            .copy_source(copy_source(bucket, source_key))
            .key(dest_key)
            .send()
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_source_keeps_key_as_delivered() {
        assert_eq!(
            copy_source("vod-destination", "abc/thumbnails/clip.0000002.jpg"),
            "vod-destination/abc/thumbnails/clip.0000002.jpg"
        );
    }
}

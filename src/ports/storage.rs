use crate::error::PortError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Read a whole object into memory
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, PortError>;

    /// Fail unless the object exists and is readable
    async fn head_object(&self, bucket: &str, key: &str) -> Result<(), PortError>;

    /// Copy an object to a new key within the same bucket
    async fn copy_object(
        &self,
        bucket: &str,
        source_key: &str,
        dest_key: &str,
    ) -> Result<(), PortError>;
}

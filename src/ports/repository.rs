use crate::domain::jobs::JobRecord;
use crate::error::PortError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRecordRepository: Send + Sync {
    /// Fetch the stored job record for a guid
    async fn get_job_record(&self, guid: &str) -> Result<Option<JobRecord>, PortError>;
}

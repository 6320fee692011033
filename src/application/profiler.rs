use crate::domain::jobs::JobRecord;
use crate::domain::profile::JobTemplateSelection;
use crate::error::ProfilerError;
use crate::ports::repository::JobRecordRepository;
use serde::Deserialize;
use tracing::{error, info};

/// Payload the workflow hands to the profiler step.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfilerEvent {
    pub guid: String,
}

pub struct ProfilerService<R> {
    repo: R,
}

impl<R> ProfilerService<R>
where
    R: JobRecordRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Load the job record, decide its encoding profile and template, and
    /// return the updated record. Failures are logged with the guid and
    /// returned to the caller untouched.
    pub async fn handle(&self, event: &ProfilerEvent) -> Result<JobRecord, ProfilerError> {
        match self.profile(&event.guid).await {
            Ok(record) => Ok(record),
            Err(e) => {
                error!(guid = %event.guid, error = %e, "profiling failed");
                Err(e)
            }
        }
    }

    async fn profile(&self, guid: &str) -> Result<JobRecord, ProfilerError> {
        let mut record = self
            .repo
            .get_job_record(guid)
            .await
            .map_err(|source| ProfilerError::Lookup {
                guid: guid.to_string(),
                source,
            })?
            .ok_or_else(|| ProfilerError::JobNotFound {
                guid: guid.to_string(),
            })?;

        let selection =
            JobTemplateSelection::for_record(&record).map_err(|source| ProfilerError::Profile {
                guid: guid.to_string(),
                source,
            })?;

        info!(
            guid,
            width = selection.src_width,
            height = selection.src_height,
            orientation = ?selection.dimensions.orientation,
            encoding_profile = %selection.encoding_profile,
            job_template = selection.template.name().unwrap_or_default(),
            custom = selection.template.is_custom(),
            "chosen template"
        );

        record.apply_profile(selection);
        Ok(record)
    }
}

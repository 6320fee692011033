use crate::config::WorkflowConfig;
use crate::domain::events::{decode_object_key, guid_from_key, StorageEvent};
use crate::domain::jobs::{InputRotate, JobRecord, WorkflowTrigger};
use crate::domain::template::TemplateTable;
use crate::error::IngestError;
use crate::ports::storage::ObjectStore;
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{error, info};

pub const INGEST_STATUS: &str = "Ingest";

/// Fields a metadata upload may override. Keys are matched after their
/// first character is lower-cased.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetadataFile {
    src_video: Option<String>,
    src_bucket: Option<String>,
    dest_bucket: Option<String>,
    cloud_front: Option<String>,
    frame_capture: Option<bool>,
    archive_source: Option<String>,
    job_template: Option<String>,
    #[serde(flatten)]
    templates: TemplateTable,
    input_rotate: Option<InputRotate>,
    accelerated_transcoding: Option<String>,
    enable_sns: Option<bool>,
    enable_sqs: Option<bool>,
}

fn lower_first(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn parse_metadata(key: &str, body: &[u8]) -> Result<MetadataFile, IngestError> {
    let invalid = |source| IngestError::InvalidMetadata {
        key: key.to_string(),
        source,
    };

    let raw: Map<String, Value> = serde_json::from_slice(body).map_err(invalid)?;
    let normalized: Map<String, Value> = raw
        .into_iter()
        .map(|(k, v)| (lower_first(&k), v))
        .collect();
    serde_json::from_value(Value::Object(normalized)).map_err(invalid)
}

pub struct IngestService<S> {
    storage: S,
    config: WorkflowConfig,
}

impl<S> IngestService<S>
where
    S: ObjectStore,
{
    pub fn new(storage: S, config: WorkflowConfig) -> Self {
        Self { storage, config }
    }

    pub async fn handle(&self, event: &StorageEvent) -> Result<JobRecord, IngestError> {
        let result = self.ingest(event).await;
        if let Err(e) = &result {
            error!(error = %e, trigger = ?event.workflow_trigger, "ingest failed");
        }
        result
    }

    fn default_record(&self, guid: &str, trigger: WorkflowTrigger) -> JobRecord {
        let config = &self.config;
        JobRecord {
            guid: guid.to_string(),
            start_time: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            workflow_trigger: Some(trigger),
            workflow_status: Some(INGEST_STATUS.to_string()),
            workflow_name: Some(config.workflow_name.clone()),
            src_bucket: Some(config.source_bucket.clone()),
            dest_bucket: Some(config.destination_bucket.clone()),
            cloud_front: config.cloud_front.clone(),
            frame_capture: config.frame_capture,
            archive_source: config.archive_source.clone(),
            templates: config.templates.clone(),
            input_rotate: config.input_rotate,
            accelerated_transcoding: config.accelerated_transcoding.clone(),
            enable_sns: config.enable_sns,
            enable_sqs: config.enable_sqs,
            ..Default::default()
        }
    }

    async fn ingest(&self, event: &StorageEvent) -> Result<JobRecord, IngestError> {
        let object = &event.first_record().ok_or(IngestError::MissingRecord)?.s3.object;
        let key = decode_object_key(&object.key).ok_or_else(|| IngestError::InvalidKey {
            key: object.key.clone(),
        })?;
        let guid = guid_from_key(&key);

        let trigger = event
            .workflow_trigger
            .as_deref()
            .and_then(WorkflowTrigger::parse)
            .ok_or_else(|| IngestError::UnknownTrigger(event.workflow_trigger.clone()))?;

        let mut record = self.default_record(guid, trigger);

        match trigger {
            WorkflowTrigger::Video => {
                record.src_video = Some(key.clone());
            }
            WorkflowTrigger::Metadata => {
                info!(key = %key, "validating metadata file");
                record.src_metadata_file = Some(key.clone());
                self.apply_metadata(&mut record, &key).await?;
            }
        }

        // Stack-level setting, applied after any metadata overrides.
        record.enable_media_package = self.config.enable_media_package;

        info!(guid = %record.guid, src_video = ?record.src_video, "job ingested");
        Ok(record)
    }

    async fn apply_metadata(&self, record: &mut JobRecord, key: &str) -> Result<(), IngestError> {
        let bucket = self.config.source_bucket.as_str();
        let body = self
            .storage
            .get_object(bucket, key)
            .await
            .map_err(|source| IngestError::Storage {
                key: key.to_string(),
                source,
            })?;

        let metadata = parse_metadata(key, &body)?;
        let src_video = metadata
            .src_video
            .ok_or_else(|| IngestError::MissingSourceVideo {
                key: key.to_string(),
            })?;

        record.src_video = Some(src_video.clone());
        if let Some(src_bucket) = metadata.src_bucket {
            record.src_bucket = Some(src_bucket);
        }
        if let Some(dest_bucket) = metadata.dest_bucket {
            record.dest_bucket = Some(dest_bucket);
        }
        if metadata.cloud_front.is_some() {
            record.cloud_front = metadata.cloud_front;
        }
        if let Some(frame_capture) = metadata.frame_capture {
            record.frame_capture = frame_capture;
        }
        if metadata.archive_source.is_some() {
            record.archive_source = metadata.archive_source;
        }
        if metadata.job_template.is_some() {
            record.job_template = metadata.job_template;
        }
        record.templates.merge(metadata.templates);
        if metadata.input_rotate.is_some() {
            record.input_rotate = metadata.input_rotate;
        }
        if metadata.accelerated_transcoding.is_some() {
            record.accelerated_transcoding = metadata.accelerated_transcoding;
        }
        if let Some(enable_sns) = metadata.enable_sns {
            record.enable_sns = enable_sns;
        }
        if let Some(enable_sqs) = metadata.enable_sqs {
            record.enable_sqs = enable_sqs;
        }

        // The source video must exist in the (possibly overridden) bucket.
        let src_bucket = record.src_bucket.as_deref().unwrap_or(bucket);
        self.storage
            .head_object(src_bucket, &src_video)
            .await
            .map_err(|source| IngestError::Storage {
                key: src_video.clone(),
                source,
            })?;

        Ok(())
    }
}

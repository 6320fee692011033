use super::profile::JobTemplateSelection;
use super::template::TemplateTable;
use super::tier::ResolutionTier;
use serde::{Deserialize, Serialize};

/// Input rotation setting forwarded to the transcoding service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputRotate {
    Auto,
    #[serde(rename = "DEGREE_0")]
    Degree0,
    #[serde(rename = "DEGREES_90")]
    Degrees90,
    #[serde(rename = "DEGREES_180")]
    Degrees180,
    #[serde(rename = "DEGREES_270")]
    Degrees270,
}

/// What kind of upload started the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowTrigger {
    Video,
    Metadata,
}

impl WorkflowTrigger {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Video" => Some(WorkflowTrigger::Video),
            "Metadata" => Some(WorkflowTrigger::Metadata),
            _ => None,
        }
    }
}

/// The job record accumulated by the handler chain and stored per guid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub guid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_trigger: Option<WorkflowTrigger>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_bucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_bucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_front: Option<String>,
    #[serde(default)]
    pub frame_capture: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_source: Option<String>,
    #[serde(flatten)]
    pub templates: TemplateTable,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_rotate: Option<InputRotate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accelerated_transcoding: Option<String>,
    #[serde(default)]
    pub enable_sns: bool,
    #[serde(default)]
    pub enable_sqs: bool,
    #[serde(default)]
    pub enable_media_package: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_metadata_file: Option<String>,
    /// JSON analysis report written by the media-info step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_mediainfo: Option<String>,
    /// Caller-supplied template override, or the resolved template once
    /// the profiler has run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_template: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding_profile: Option<ResolutionTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_custom_template: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_capture_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_capture_width: Option<u32>,
}

impl JobRecord {
    /// Merge a profile decision into the record in one step.
    pub fn apply_profile(&mut self, selection: JobTemplateSelection) {
        self.src_height = Some(selection.src_height);
        self.src_width = Some(selection.src_width);
        self.encoding_profile = Some(selection.encoding_profile);
        self.is_custom_template = Some(selection.template.is_custom());
        self.input_rotate = Some(selection.input_rotate);
        self.frame_capture_height = selection.frame_capture.map(|size| size.height);
        self.frame_capture_width = selection.frame_capture.map(|size| size.width);
        self.job_template = selection.template.into_name();
    }
}

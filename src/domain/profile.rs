//! Profile resolution: from source media info to the encoding tier and
//! job template for one job record.

use super::frame_capture::FrameCaptureSize;
use super::jobs::{InputRotate, JobRecord};
use super::mediainfo::SourceMediaInfo;
use super::orientation::NormalizedDimensions;
use super::template::{resolve_template, TemplateChoice, TemplateTable};
use super::tier::{select_tier, ResolutionTier};
use crate::error::ProfileError;

/// The profiler's decision for a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTemplateSelection {
    pub src_height: u32,
    pub src_width: u32,
    pub dimensions: NormalizedDimensions,
    pub encoding_profile: ResolutionTier,
    pub template: TemplateChoice,
    pub input_rotate: InputRotate,
    pub frame_capture: Option<FrameCaptureSize>,
}

/// Everything the engine reads from a job record.
#[derive(Debug, Clone, Copy)]
pub struct ProfileRequest<'a> {
    pub source: &'a SourceMediaInfo,
    pub frame_capture: bool,
    pub job_template: Option<&'a str>,
    pub templates: &'a TemplateTable,
}

pub fn resolve_profile(request: ProfileRequest<'_>) -> JobTemplateSelection {
    let dims = NormalizedDimensions::from_source(request.source);
    let tier = select_tier(dims.comparison_dimension(), dims.orientation);

    let frame_capture = request
        .frame_capture
        .then(|| FrameCaptureSize::for_tier(tier, &dims));
    let template = resolve_template(request.job_template, &dims, tier, request.templates);

    JobTemplateSelection {
        src_height: dims.effective_height,
        src_width: dims.effective_width,
        dimensions: dims,
        encoding_profile: tier,
        template,
        // Rotation is already folded into the dimensions; the transcoder
        // is always told to auto-rotate.
        input_rotate: InputRotate::Auto,
        frame_capture,
    }
}

impl JobTemplateSelection {
    /// Parse the record's media-info report and resolve its profile.
    pub fn for_record(record: &JobRecord) -> Result<Self, ProfileError> {
        let report = record
            .src_mediainfo
            .as_deref()
            .ok_or(ProfileError::MissingMetadata)?;
        let source = SourceMediaInfo::from_report(report)?;

        Ok(resolve_profile(ProfileRequest {
            source: &source,
            frame_capture: record.frame_capture,
            job_template: record.job_template.as_deref(),
            templates: &record.templates,
        }))
    }
}

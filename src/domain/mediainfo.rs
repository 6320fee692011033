//! Source media info as read from the stored analysis report.

use crate::error::ProfileError;
use serde::Deserialize;

/// Raw dimensions of the source video, as reported by the analysis step.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceMediaInfo {
    pub height: u32,
    pub width: u32,
    pub rotation_degrees: Option<i32>,
    /// Decimal aspect ratio as text (e.g. `"1.778"`), kept unparsed.
    pub aspect_ratio: Option<String>,
}

/// Report values show up either as JSON numbers or as numeric strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => n.as_f64(),
            Scalar::Text(t) => t.trim().parse().ok(),
        }
    }

    fn into_text(self) -> String {
        match self {
            Scalar::Number(n) => n.to_string(),
            Scalar::Text(t) => t,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MediaInfoReport {
    #[serde(default)]
    video: Option<Vec<VideoTrack>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoTrack {
    height: Scalar,
    width: Scalar,
    #[serde(default)]
    rotation: Option<Scalar>,
    #[serde(default, alias = "displayAspectRatio")]
    aspect_ratio: Option<Scalar>,
}

fn dimension(value: &Scalar, name: &str) -> Result<u32, ProfileError> {
    value
        .as_f64()
        .filter(|v| v.is_finite() && *v >= 1.0 && *v <= u32::MAX as f64)
        .map(|v| v.round() as u32)
        .ok_or_else(|| {
            ProfileError::InvalidMediaInfo(serde::de::Error::custom(format!(
                "video {} must be a positive number",
                name
            )))
        })
}

impl SourceMediaInfo {
    /// Parse the JSON analysis report, using the first video track.
    pub fn from_report(report: &str) -> Result<Self, ProfileError> {
        let report: MediaInfoReport = serde_json::from_str(report)?;
        let track = report
            .video
            .and_then(|tracks| tracks.into_iter().next())
            .ok_or(ProfileError::MissingMetadata)?;

        Ok(Self {
            height: dimension(&track.height, "height")?,
            width: dimension(&track.width, "width")?,
            rotation_degrees: track
                .rotation
                .and_then(|r| r.as_f64())
                .filter(|r| r.is_finite())
                .map(|r| r.round() as i32),
            aspect_ratio: track.aspect_ratio.map(Scalar::into_text),
        })
    }
}

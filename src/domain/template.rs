//! Job template naming.

use super::orientation::{NormalizedDimensions, Orientation};
use super::tier::ResolutionTier;
use serde::{Deserialize, Serialize};

pub const SQUARE_SUFFIX: &str = "_SQUARE";
pub const FULLSCREEN_SUFFIX: &str = "_FULL";

/// Configured job template names, one slot per orientation and tier.
///
/// The 2160p slots are carried through the job record for downstream use;
/// tier selection never produces them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landscape_2160p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landscape_1080p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landscape_720p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landscape_480p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landscape_360p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landscape_240p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait_2160p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait_1080p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait_720p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait_480p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait_360p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait_240p: Option<String>,
}

impl TemplateTable {
    pub fn lookup(&self, orientation: Orientation, tier: ResolutionTier) -> Option<&str> {
        let slot = match (orientation, tier) {
            (Orientation::Landscape, ResolutionTier::P1080) => &self.landscape_1080p,
            (Orientation::Landscape, ResolutionTier::P720) => &self.landscape_720p,
            (Orientation::Landscape, ResolutionTier::P480) => &self.landscape_480p,
            (Orientation::Landscape, ResolutionTier::P360) => &self.landscape_360p,
            (Orientation::Landscape, ResolutionTier::P240) => &self.landscape_240p,
            (Orientation::Portrait, ResolutionTier::P1080) => &self.portrait_1080p,
            (Orientation::Portrait, ResolutionTier::P720) => &self.portrait_720p,
            (Orientation::Portrait, ResolutionTier::P480) => &self.portrait_480p,
            (Orientation::Portrait, ResolutionTier::P360) => &self.portrait_360p,
            (Orientation::Portrait, ResolutionTier::P240) => &self.portrait_240p,
        };
        slot.as_deref()
    }

    /// Overwrite every slot that `other` sets.
    pub fn merge(&mut self, other: TemplateTable) {
        let slots = [
            (&mut self.landscape_2160p, other.landscape_2160p),
            (&mut self.landscape_1080p, other.landscape_1080p),
            (&mut self.landscape_720p, other.landscape_720p),
            (&mut self.landscape_480p, other.landscape_480p),
            (&mut self.landscape_360p, other.landscape_360p),
            (&mut self.landscape_240p, other.landscape_240p),
            (&mut self.portrait_2160p, other.portrait_2160p),
            (&mut self.portrait_1080p, other.portrait_1080p),
            (&mut self.portrait_720p, other.portrait_720p),
            (&mut self.portrait_480p, other.portrait_480p),
            (&mut self.portrait_360p, other.portrait_360p),
            (&mut self.portrait_240p, other.portrait_240p),
        ];
        for (slot, value) in slots {
            if value.is_some() {
                *slot = value;
            }
        }
    }
}

/// Outcome of template resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateChoice {
    /// Caller-supplied template, used verbatim.
    Custom(String),
    /// Name derived from the table. `None` when the slot is not configured;
    /// the dispatch step is the one that rejects it.
    Resolved(Option<String>),
}

impl TemplateChoice {
    pub fn is_custom(&self) -> bool {
        matches!(self, TemplateChoice::Custom(_))
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            TemplateChoice::Custom(name) => Some(name.as_str()),
            TemplateChoice::Resolved(name) => name.as_deref(),
        }
    }

    pub fn into_name(self) -> Option<String> {
        match self {
            TemplateChoice::Custom(name) => Some(name),
            TemplateChoice::Resolved(name) => name,
        }
    }
}

/// Suffix for the source shape. Square wins over fullscreen.
pub fn shape_suffix(dims: &NormalizedDimensions) -> &'static str {
    if dims.is_square {
        SQUARE_SUFFIX
    } else if dims.is_fullscreen {
        FULLSCREEN_SUFFIX
    } else {
        ""
    }
}

pub fn resolve_template(
    override_template: Option<&str>,
    dims: &NormalizedDimensions,
    tier: ResolutionTier,
    table: &TemplateTable,
) -> TemplateChoice {
    if let Some(custom) = override_template {
        return TemplateChoice::Custom(custom.to_string());
    }

    let name = table
        .lookup(dims.orientation, tier)
        .map(|base| format!("{}{}", base, shape_suffix(dims)));
    TemplateChoice::Resolved(name)
}

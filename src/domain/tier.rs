//! Resolution tier ladder and nearest-tier selection.

use super::orientation::Orientation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical encoding resolution class, labelled by its landscape height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum ResolutionTier {
    P240,
    P360,
    P480,
    P720,
    P1080,
}

/// Tiers in descending order, positionally aligned with the ladders below.
pub const TIERS: [ResolutionTier; 5] = [
    ResolutionTier::P1080,
    ResolutionTier::P720,
    ResolutionTier::P480,
    ResolutionTier::P360,
    ResolutionTier::P240,
];

pub const LANDSCAPE_LADDER: [u32; 5] = [1080, 720, 480, 360, 240];
pub const PORTRAIT_LADDER: [u32; 5] = [1920, 1280, 854, 640, 426];

impl ResolutionTier {
    /// Vertical resolution of the tier in landscape.
    pub fn height(self) -> u32 {
        match self {
            ResolutionTier::P1080 => 1080,
            ResolutionTier::P720 => 720,
            ResolutionTier::P480 => 480,
            ResolutionTier::P360 => 360,
            ResolutionTier::P240 => 240,
        }
    }

    /// Long side of the tier at 16:9.
    pub fn wide_width(self) -> u32 {
        match self {
            ResolutionTier::P1080 => 1920,
            ResolutionTier::P720 => 1280,
            ResolutionTier::P480 => 854,
            ResolutionTier::P360 => 640,
            ResolutionTier::P240 => 426,
        }
    }

    /// Long side of the tier at 4:3.
    pub fn full_width(self) -> u32 {
        match self {
            ResolutionTier::P1080 => 1440,
            ResolutionTier::P720 => 960,
            ResolutionTier::P480 => 640,
            ResolutionTier::P360 => 480,
            ResolutionTier::P240 => 320,
        }
    }

    pub fn from_height(height: u32) -> Option<Self> {
        TIERS.into_iter().find(|tier| tier.height() == height)
    }
}

impl From<ResolutionTier> for u32 {
    fn from(tier: ResolutionTier) -> Self {
        tier.height()
    }
}

impl TryFrom<u32> for ResolutionTier {
    type Error = String;

    fn try_from(height: u32) -> Result<Self, Self::Error> {
        ResolutionTier::from_height(height)
            .ok_or_else(|| format!("{} is not a supported resolution tier", height))
    }
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}p", self.height())
    }
}

/// Walks `ladder` from the top, stopping once the distance to `dimension`
/// starts growing. The first visited position whose *landscape* height is
/// at or below `dimension` wins, for portrait ladders too.
pub fn nearest_tier(dimension: u32, ladder: &[u32; 5]) -> Option<ResolutionTier> {
    let mut last_distance: Option<u32> = None;

    for (index, &candidate) in ladder.iter().enumerate() {
        let distance = dimension.abs_diff(candidate);
        if last_distance.is_some_and(|last| distance > last) {
            break;
        }

        if dimension >= LANDSCAPE_LADDER[index] {
            return Some(TIERS[index]);
        }
        last_distance = Some(distance);
    }

    None
}

/// Select the encoding tier for a comparison dimension, falling back to
/// the smallest tier when the scan finds nothing.
pub fn select_tier(dimension: u32, orientation: Orientation) -> ResolutionTier {
    let ladder = match orientation {
        Orientation::Landscape => &LANDSCAPE_LADDER,
        Orientation::Portrait => &PORTRAIT_LADDER,
    };

    nearest_tier(dimension, ladder).unwrap_or(ResolutionTier::P240)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladders_are_aligned() {
        for (index, tier) in TIERS.iter().enumerate() {
            assert_eq!(tier.height(), LANDSCAPE_LADDER[index]);
            assert_eq!(tier.wide_width(), PORTRAIT_LADDER[index]);
        }
        assert!(LANDSCAPE_LADDER.windows(2).all(|w| w[0] > w[1]));
        assert!(PORTRAIT_LADDER.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_landscape_exact_boundaries() {
        for tier in TIERS {
            assert_eq!(select_tier(tier.height(), Orientation::Landscape), tier);
        }
    }

    #[test]
    fn test_landscape_above_largest_tier() {
        assert_eq!(select_tier(2160, Orientation::Landscape), ResolutionTier::P1080);
        assert_eq!(select_tier(1200, Orientation::Landscape), ResolutionTier::P1080);
    }

    #[test]
    fn test_landscape_between_tiers() {
        assert_eq!(select_tier(500, Orientation::Landscape), ResolutionTier::P480);
        assert_eq!(select_tier(576, Orientation::Landscape), ResolutionTier::P480);
        assert_eq!(select_tier(400, Orientation::Landscape), ResolutionTier::P360);
    }

    #[test]
    fn test_scan_stops_before_reaching_a_smaller_tier() {
        // 1000 is nearest to 1080 but below it; the scan stops at 720
        // without accepting anything.
        assert_eq!(nearest_tier(1000, &LANDSCAPE_LADDER), None);
        assert_eq!(select_tier(1000, Orientation::Landscape), ResolutionTier::P240);

        assert_eq!(nearest_tier(700, &LANDSCAPE_LADDER), None);
        assert_eq!(select_tier(700, Orientation::Landscape), ResolutionTier::P240);
    }

    #[test]
    fn test_below_smallest_tier_falls_back() {
        assert_eq!(nearest_tier(100, &LANDSCAPE_LADDER), None);
        assert_eq!(select_tier(100, Orientation::Landscape), ResolutionTier::P240);
        assert_eq!(select_tier(144, Orientation::Portrait), ResolutionTier::P240);
    }

    #[test]
    fn test_portrait_standard_widths() {
        assert_eq!(select_tier(1080, Orientation::Portrait), ResolutionTier::P1080);
        assert_eq!(select_tier(720, Orientation::Portrait), ResolutionTier::P720);
        assert_eq!(select_tier(480, Orientation::Portrait), ResolutionTier::P480);
        assert_eq!(select_tier(360, Orientation::Portrait), ResolutionTier::P360);
        assert_eq!(select_tier(240, Orientation::Portrait), ResolutionTier::P240);
    }

    #[test]
    fn test_portrait_and_landscape_diverge_for_same_dimension() {
        // Portrait distances are measured against the portrait ladder, but
        // acceptance checks the landscape height at the same position.
        assert_eq!(select_tier(1000, Orientation::Portrait), ResolutionTier::P720);
        assert_eq!(select_tier(1000, Orientation::Landscape), ResolutionTier::P240);
    }

    #[test]
    fn test_tier_serializes_as_height() {
        assert_eq!(serde_json::to_string(&ResolutionTier::P720).unwrap(), "720");
        let tier: ResolutionTier = serde_json::from_str("480").unwrap();
        assert_eq!(tier, ResolutionTier::P480);
        assert!(serde_json::from_str::<ResolutionTier>("2160").is_err());
    }
}

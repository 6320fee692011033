use super::mediainfo::SourceMediaInfo;

/// Display orientation of the source once rotation is corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Landscape,
    Portrait,
}

/// Source dimensions after rotation correction, plus the shape flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedDimensions {
    pub effective_height: u32,
    pub effective_width: u32,
    pub orientation: Orientation,
    /// Raw `height == width`, before any rotation swap.
    pub is_square: bool,
    /// Legacy 4:3 source (aspect ratio rounds to 1.33).
    pub is_fullscreen: bool,
}

impl NormalizedDimensions {
    pub fn from_source(info: &SourceMediaInfo) -> Self {
        let (effective_height, effective_width) = if info.rotation_degrees == Some(90) {
            (info.width, info.height)
        } else {
            (info.height, info.width)
        };

        let orientation = if effective_height > effective_width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        };

        Self {
            effective_height,
            effective_width,
            orientation,
            // Squareness is judged on the raw values on purpose; only
            // orientation sees the rotation swap.
            is_square: info.height == info.width,
            is_fullscreen: is_fullscreen(info.aspect_ratio.as_deref()),
        }
    }

    pub fn is_portrait(&self) -> bool {
        self.orientation == Orientation::Portrait
    }

    /// The dimension compared against the tier ladder: width for portrait
    /// sources, height for landscape ones.
    pub fn comparison_dimension(&self) -> u32 {
        match self.orientation {
            Orientation::Portrait => self.effective_width,
            Orientation::Landscape => self.effective_height,
        }
    }
}

/// `true` when the aspect ratio rounds to `1.33`. Missing or unparsable
/// ratios count as widescreen.
pub fn is_fullscreen(aspect_ratio: Option<&str>) -> bool {
    aspect_ratio
        .and_then(|ratio| ratio.trim().parse::<f64>().ok())
        .filter(|ratio| ratio.is_finite())
        .map(|ratio| format!("{:.2}", ratio) == "1.33")
        .unwrap_or(false)
}

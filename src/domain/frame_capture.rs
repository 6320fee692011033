use super::orientation::{NormalizedDimensions, Orientation};
use super::tier::ResolutionTier;

/// Still-frame dimensions matched to the encoding tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCaptureSize {
    pub width: u32,
    pub height: u32,
}

impl FrameCaptureSize {
    /// The tier gives the short side; the long side comes from the 16:9 or
    /// 4:3 ratio table depending on `is_fullscreen` only.
    pub fn for_tier(tier: ResolutionTier, dims: &NormalizedDimensions) -> Self {
        let long_side = if dims.is_fullscreen {
            tier.full_width()
        } else {
            tier.wide_width()
        };

        match dims.orientation {
            Orientation::Landscape => Self {
                width: long_side,
                height: tier.height(),
            },
            Orientation::Portrait => Self {
                width: tier.height(),
                height: long_side,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(orientation: Orientation, is_square: bool, is_fullscreen: bool) -> NormalizedDimensions {
        NormalizedDimensions {
            effective_height: 0,
            effective_width: 0,
            orientation,
            is_square,
            is_fullscreen,
        }
    }

    #[test]
    fn test_landscape_wide() {
        let size = FrameCaptureSize::for_tier(
            ResolutionTier::P1080,
            &dims(Orientation::Landscape, false, false),
        );
        assert_eq!(size, FrameCaptureSize { width: 1920, height: 1080 });
    }

    #[test]
    fn test_landscape_full() {
        let size = FrameCaptureSize::for_tier(
            ResolutionTier::P480,
            &dims(Orientation::Landscape, false, true),
        );
        assert_eq!(size, FrameCaptureSize { width: 640, height: 480 });
    }

    #[test]
    fn test_portrait_swaps_sides() {
        let size = FrameCaptureSize::for_tier(
            ResolutionTier::P720,
            &dims(Orientation::Portrait, false, false),
        );
        assert_eq!(size, FrameCaptureSize { width: 720, height: 1280 });

        let size = FrameCaptureSize::for_tier(
            ResolutionTier::P360,
            &dims(Orientation::Portrait, false, true),
        );
        assert_eq!(size, FrameCaptureSize { width: 360, height: 480 });
    }

    #[test]
    fn test_square_does_not_change_ratio_table() {
        let size = FrameCaptureSize::for_tier(
            ResolutionTier::P240,
            &dims(Orientation::Landscape, true, false),
        );
        assert_eq!(size, FrameCaptureSize { width: 426, height: 240 });
    }
}

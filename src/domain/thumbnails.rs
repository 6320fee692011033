/// Frame names the frame-capture output uses for its opening images.
const OPENING_FRAMES: [&str; 2] = ["0000000.jpg", "0000001.jpg"];

pub const POSTER_SEPARATOR: &str = "thumbnails";
pub const POSTER_NAME: &str = "mobile.jpg";

/// Where a captured frame should be promoted to, or `None` when the key
/// is one of the opening frames of an un-suffixed capture.
pub fn poster_key(key: &str) -> Option<String> {
    if !key.contains('-') && OPENING_FRAMES.iter().any(|frame| key.contains(frame)) {
        return None;
    }

    let prefix = key.split(POSTER_SEPARATOR).next().unwrap_or_default();
    Some(format!("{}{}", prefix, POSTER_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_frames_are_skipped() {
        assert_eq!(poster_key("abc/thumbnails/clip_thumb.0000000.jpg"), None);
        assert_eq!(poster_key("abc/thumbnails/clip_thumb.0000001.jpg"), None);
    }

    #[test]
    fn test_hyphenated_keys_are_promoted() {
        assert_eq!(
            poster_key("a1b2-c3d4/thumbnails/clip_thumb.0000001.jpg").as_deref(),
            Some("a1b2-c3d4/mobile.jpg")
        );
    }

    #[test]
    fn test_later_frames_are_promoted() {
        assert_eq!(
            poster_key("abc/thumbnails/clip_thumb.0000002.jpg").as_deref(),
            Some("abc/mobile.jpg")
        );
    }

    #[test]
    fn test_key_without_separator_keeps_whole_key_as_prefix() {
        assert_eq!(
            poster_key("abc/frame.0000005.jpg").as_deref(),
            Some("abc/frame.0000005.jpgmobile.jpg")
        );
    }
}

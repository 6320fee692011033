use crate::domain::events::StorageEvent;
use crate::domain::thumbnails::poster_key;
use crate::error::FirstFrameError;
use crate::ports::storage::ObjectStore;
use tracing::{error, info};

/// Promotes a captured frame to the job's `mobile.jpg` poster.
pub struct FirstFrameService<S> {
    storage: S,
}

impl<S> FirstFrameService<S>
where
    S: ObjectStore,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the poster key written, or `None` when the frame is skipped.
    pub async fn handle(&self, event: &StorageEvent) -> Result<Option<String>, FirstFrameError> {
        let record = event.first_record().ok_or(FirstFrameError::MissingRecord)?;
        let bucket = record.s3.bucket.name.as_str();
        let key = record.s3.object.key.as_str();

        let Some(dest_key) = poster_key(key) else {
            info!(key, "skipping opening frame");
            return Ok(None);
        };

        if let Err(source) = self.storage.copy_object(bucket, key, &dest_key).await {
            error!(bucket, key, dest_key = %dest_key, error = %source, "poster copy failed");
            return Err(FirstFrameError::Storage {
                source_key: key.to_string(),
                dest_key,
                source,
            });
        }

        info!(bucket, key, dest_key = %dest_key, "poster promoted");
        Ok(Some(dest_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::storage::MockObjectStore;
    use serde_json::json;

    fn event(key: &str) -> StorageEvent {
        serde_json::from_value(json!({
            "Records": [{
                "s3": { "bucket": { "name": "vod-destination" }, "object": { "key": key } }
            }]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_frame_is_copied_to_poster() {
        let mut storage = MockObjectStore::new();
        storage
            .expect_copy_object()
            .withf(|bucket, source, dest| {
                bucket == "vod-destination"
                    && source == "abc/thumbnails/clip_thumb.0000002.jpg"
                    && dest == "abc/mobile.jpg"
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = FirstFrameService::new(storage);
        let written = service
            .handle(&event("abc/thumbnails/clip_thumb.0000002.jpg"))
            .await
            .unwrap();
        assert_eq!(written.as_deref(), Some("abc/mobile.jpg"));
    }

    #[tokio::test]
    async fn test_opening_frame_is_skipped() {
        let mut storage = MockObjectStore::new();
        storage.expect_copy_object().never();

        let service = FirstFrameService::new(storage);
        let written = service
            .handle(&event("abc/thumbnails/clip_thumb.0000000.jpg"))
            .await
            .unwrap();
        assert_eq!(written, None);
    }

    #[tokio::test]
    async fn test_copy_failure_is_returned() {
        let mut storage = MockObjectStore::new();
        storage
            .expect_copy_object()
            .returning(|_, _, _| Err("AccessDenied".into()));

        let err = FirstFrameService::new(storage)
            .handle(&event("a-b/thumbnails/clip_thumb.0000001.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FirstFrameError::Storage { ref dest_key, .. } if dest_key == "a-b/mobile.jpg"
        ));
    }

    #[tokio::test]
    async fn test_event_without_records() {
        let service = FirstFrameService::new(MockObjectStore::new());
        let event: StorageEvent = serde_json::from_value(json!({ "Records": [] })).unwrap();
        assert!(matches!(
            service.handle(&event).await,
            Err(FirstFrameError::MissingRecord)
        ));
    }
}

//! Domain layer - Pure business logic.

pub mod events;
pub mod frame_capture;
pub mod jobs;
pub mod mediainfo;
pub mod orientation;
pub mod profile;
pub mod template;
pub mod thumbnails;
pub mod tier;

//! Application layer - Handler services that use ports.

pub mod first_frame;
pub mod ingest;
pub mod profiler;

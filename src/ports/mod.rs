//! Ports - Traits for the collaborators the handlers depend on.

pub mod repository;
pub mod storage;

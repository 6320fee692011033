//! Adapters - Concrete implementations of ports.

#[cfg(feature = "aws")]
pub mod aws;

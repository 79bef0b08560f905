//! poster-studio library root.
//!
//! The editing session behind the headless binary: configuration, AWS
//! credentials, the document store and generation/export orchestration.
//! Exposed as a library so integration tests can drive it directly.

pub mod aws;
pub mod config;
pub mod error;
pub mod preview;
pub mod session;
pub mod store;

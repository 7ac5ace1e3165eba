//! Core data types

pub mod config;
pub mod errors;
pub mod manifest;

pub use config::{CoverageConfig, Granularity};
pub use errors::{CoverError, EncodeError};
pub use manifest::Manifest;

//! Coverprep - coverage instrumentation inputs for a compile step
//!
//! Generates the two files a source coverage tool needs alongside the
//! sources: the package config (`-pkgcfg`) and the list of instrumented
//! outputs it should produce (`-outfilelist`).

pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::{
    config::CoverageConfig, errors::CoverError, errors::EncodeError, manifest::Manifest,
};

pub use ops::{generate_config, generate_manifest, prepare, CoverInputs};
pub use util::encode::{Encoder, EncodingFormat};

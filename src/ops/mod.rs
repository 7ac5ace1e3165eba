//! High-level operations

pub mod outfilelist;
pub mod pkgcfg;
pub mod prepare;

pub use outfilelist::generate_manifest;
pub use pkgcfg::generate_config;
pub use prepare::{prepare, CoverInputs};

//! Shared utilities

pub mod config;
pub mod encode;
pub mod fs;

pub use config::Config;
pub use encode::{Encoder, EncodingFormat, JsonEncoder, TomlEncoder};

//! Pluggable encoders for [`CoverageConfig`].
//!
//! The generator only needs "write this record into a byte buffer". Any
//! closure with the right shape is an [`Encoder`], which is how tests inject
//! failures.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::config::CoverageConfig;
use crate::core::errors::EncodeError;

/// Encodes a coverage config into a byte buffer.
pub trait Encoder {
    fn encode(&self, buf: &mut Vec<u8>, config: &CoverageConfig) -> Result<(), EncodeError>;
}

impl<F> Encoder for F
where
    F: Fn(&mut Vec<u8>, &CoverageConfig) -> Result<(), EncodeError>,
{
    fn encode(&self, buf: &mut Vec<u8>, config: &CoverageConfig) -> Result<(), EncodeError> {
        self(buf, config)
    }
}

/// Compact JSON terminated by a newline. This is what the coverage tool reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn encode(&self, buf: &mut Vec<u8>, config: &CoverageConfig) -> Result<(), EncodeError> {
        serde_json::to_writer(&mut *buf, config)?;
        buf.push(b'\n');
        Ok(())
    }
}

/// TOML rendering of the same record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlEncoder;

impl Encoder for TomlEncoder {
    fn encode(&self, buf: &mut Vec<u8>, config: &CoverageConfig) -> Result<(), EncodeError> {
        let text = toml::to_string(config)?;
        buf.extend_from_slice(text.as_bytes());
        Ok(())
    }
}

/// Encoding format selectable from the CLI or config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EncodingFormat {
    #[default]
    Json,
    Toml,
}

impl Encoder for EncodingFormat {
    fn encode(&self, buf: &mut Vec<u8>, config: &CoverageConfig) -> Result<(), EncodeError> {
        match self {
            EncodingFormat::Json => JsonEncoder.encode(buf, config),
            EncodingFormat::Toml => TomlEncoder.encode(buf, config),
        }
    }
}

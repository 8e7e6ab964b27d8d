//! Configured record decoder.

use tracing::debug;

use crate::config::{ConfigError, DecoderConfig};
use crate::error::{DecodeError, Result};
use crate::event::{self, Event};

/// Decodes monitor records according to a [`DecoderConfig`]
///
/// Holds no state besides its configuration, so one decoder can be shared
/// between threads and used for any number of records.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder, rejecting invalid configurations
    pub fn new(config: DecoderConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode one monitor record
    pub fn decode(&self, record: &str) -> Result<Event> {
        self.decode_slice(record.as_bytes())
    }

    /// Decode one monitor record from raw bytes
    pub fn decode_slice(&self, record: &[u8]) -> Result<Event> {
        if let Some(limit) = self.config.max_record_len {
            if record.len() > limit {
                return Err(DecodeError::RecordTooLarge {
                    len: record.len(),
                    limit,
                });
            }
        }

        let mut event = event::decode_slice(record)?;

        if self.config.stamp_captured_at {
            event.mark_captured();
        }

        if self.config.log_removals && event.is_removal() {
            debug!(id = event.id, "object removed");
        }

        Ok(event)
    }
}

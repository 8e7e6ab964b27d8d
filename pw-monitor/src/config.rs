//! Configuration types for the pw-monitor crate
//!
//! This module defines the settings of a [`Decoder`](crate::Decoder). The free
//! functions ([`decode`](crate::decode) and friends) always behave like a
//! decoder built from [`DecoderConfig::default`].

use thiserror::Error;

/// Configuration for the [`Decoder`](crate::Decoder)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Largest record accepted, in bytes
    /// Default: unlimited
    pub max_record_len: Option<usize>,

    /// Stamp decoded events with the time they were decoded
    /// Default: false
    pub stamp_captured_at: bool,

    /// Emit a debug event for every removal record
    /// Default: true
    pub log_removals: bool,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_record_len: None,
            stamp_captured_at: false,
            log_removals: true,
        }
    }
}

impl DecoderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for consuming a live monitor stream
    ///
    /// Stamps every event with its receipt time and bounds records at 1 MiB,
    /// well above the largest node dumps seen in practice.
    pub fn live() -> Self {
        Self {
            max_record_len: Some(1024 * 1024),
            stamp_captured_at: true,
            log_removals: true,
        }
    }

    /// Configuration for replaying recorded monitor output
    ///
    /// Receipt times of a recording are meaningless, so events are not stamped.
    pub fn replay() -> Self {
        Self {
            max_record_len: None,
            stamp_captured_at: false,
            log_removals: false,
        }
    }

    /// Set the largest record accepted, in bytes
    pub fn with_max_record_len(mut self, limit: usize) -> Self {
        self.max_record_len = Some(limit);
        self
    }

    /// Accept records of any size
    pub fn without_record_limit(mut self) -> Self {
        self.max_record_len = None;
        self
    }

    pub fn with_captured_at(mut self, stamp: bool) -> Self {
        self.stamp_captured_at = stamp;
        self
    }

    pub fn with_removal_logging(mut self, enabled: bool) -> Self {
        self.log_removals = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_record_len == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "max_record_len",
                reason: "must be greater than 0",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DecoderConfig::default();
        assert_eq!(config.max_record_len, None);
        assert!(!config.stamp_captured_at);
        assert!(config.log_removals);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(DecoderConfig::live().validate().is_ok());
        assert!(DecoderConfig::replay().validate().is_ok());
        assert!(DecoderConfig::live().stamp_captured_at);
        assert!(!DecoderConfig::replay().stamp_captured_at);
    }

    #[test]
    fn test_builder_pattern() {
        let config = DecoderConfig::new()
            .with_max_record_len(4096)
            .with_captured_at(true)
            .with_removal_logging(false);

        assert_eq!(config.max_record_len, Some(4096));
        assert!(config.stamp_captured_at);
        assert!(!config.log_removals);
        assert_eq!(config.without_record_limit().max_record_len, None);
    }

    #[test]
    fn test_zero_record_limit_is_rejected() {
        let config = DecoderConfig::new().with_max_record_len(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "max_record_len",
                reason: "must be greater than 0",
            })
        );
    }
}

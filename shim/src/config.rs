//! Host-side configuration for chaincode transactions.
//!
//! `StubConfig` bundles the channel name and the state size limits the
//! stub enforces on every `put_state`. It deserializes from JSON with
//! every field optional.

use chaincode_primitives::{MAX_KEY_LEN, MAX_VALUE_LEN, MAX_WRITE_BYTES};
use serde::Deserialize;

/// Channel name used when none is configured.
pub const DEFAULT_CHANNEL: &str = "testchannel";

/// Configuration for the transactions a stub runs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StubConfig {
    /// Channel the chaincode is instantiated on.
    pub channel_id: String,
    /// Maximum length of a state key in bytes.
    pub max_key_len: usize,
    /// Maximum length of a state value in bytes.
    pub max_value_len: usize,
    /// Maximum total bytes (keys + values) one transaction may write.
    pub max_write_bytes: u64,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            channel_id: DEFAULT_CHANNEL.to_string(),
            max_key_len: MAX_KEY_LEN,
            max_value_len: MAX_VALUE_LEN,
            max_write_bytes: MAX_WRITE_BYTES,
        }
    }
}

impl StubConfig {
    /// Default limits on the given channel.
    pub fn with_channel(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = StubConfig::default();
        assert_eq!(config.channel_id, "testchannel");
        assert_eq!(config.max_key_len, 256);
        assert_eq!(config.max_value_len, 64 * 1024);
        assert_eq!(config.max_write_bytes, 4 * 1024 * 1024);
    }

    #[test]
    fn test_with_channel() {
        let config = StubConfig::with_channel("mychannel");
        assert_eq!(config.channel_id, "mychannel");
        assert_eq!(config.max_key_len, MAX_KEY_LEN);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: StubConfig =
            serde_json::from_str(r#"{"channel_id": "ch1", "max_value_len": 16}"#).unwrap();
        assert_eq!(config.channel_id, "ch1");
        assert_eq!(config.max_value_len, 16);
        // Other fields should use defaults
        assert_eq!(config.max_key_len, MAX_KEY_LEN);
        assert_eq!(config.max_write_bytes, MAX_WRITE_BYTES);
    }

    #[test]
    fn test_deserialize_empty() {
        let config: StubConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StubConfig::default());
    }
}

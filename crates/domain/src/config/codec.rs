use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;

const DEFAULT_CONFIG_PATH: &str = "dnswire.toml";

/// How a message is delimited on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Framing {
    /// Stream transports: the body is preceded by a 2-byte big-endian length.
    #[default]
    Stream,

    /// Datagram transports: the buffer is the message body itself.
    Datagram,
}

impl Framing {
    pub fn prefix_len(&self) -> usize {
        match self {
            Framing::Stream => 2,
            Framing::Datagram => 0,
        }
    }
}

/// Codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Length-prefix convention for encode and decode
    #[serde(default)]
    pub framing: Framing,

    /// Upper bound on compression pointers followed while reading one name.
    /// Unset means "the length of the buffer being decoded".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pointer_hops: Option<usize>,
}

impl CodecConfig {
    pub fn stream() -> Self {
        Self::default()
    }

    pub fn datagram() -> Self {
        Self {
            framing: Framing::Datagram,
            ..Self::default()
        }
    }

    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnswire.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_pointer_hops == Some(0) {
            return Err(ConfigError::Validation(
                "max_pointer_hops must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string).map_err(|source| ConfigError::FileWrite {
            path: path.to_string(),
            source,
        })
    }

    /// Hop limit to apply to a buffer of `buffer_len` bytes.
    pub fn pointer_hop_limit(&self, buffer_len: usize) -> usize {
        self.max_pointer_hops.unwrap_or(buffer_len)
    }
}

use crate::decoder::{decode_framed_with_limit, decode_with_limit, Framed};
use crate::encoder::{encode, encode_body};
use dnswire_domain::{CodecConfig, CodecError, ConfigError, Framing, Message};

/// Encoder and decoder bound to one [`CodecConfig`].
///
/// Holds no state besides the configuration, so a single instance can be
/// shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Fails if `config` does not pass [`CodecConfig::validate`].
    pub fn new(config: CodecConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn decode(&self, buf: &[u8]) -> Result<Message, CodecError> {
        match self.config.framing {
            Framing::Stream => self.decode_framed(buf).map(|framed| framed.message),
            Framing::Datagram => {
                decode_with_limit(buf, self.config.pointer_hop_limit(buf.len()))
            }
        }
    }

    /// Stream decode that also returns the consumed length prefix.
    pub fn decode_framed(&self, buf: &[u8]) -> Result<Framed, CodecError> {
        decode_framed_with_limit(buf, self.config.max_pointer_hops)
    }

    pub fn encode(&self, message: &Message) -> Result<Vec<u8>, CodecError> {
        match self.config.framing {
            Framing::Stream => encode(message),
            Framing::Datagram => encode_body(message),
        }
    }
}

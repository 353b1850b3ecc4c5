pub mod codec;
pub mod errors;

pub use codec::{CodecConfig, Framing};
pub use errors::ConfigError;

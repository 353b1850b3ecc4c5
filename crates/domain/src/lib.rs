//! dnswire domain layer: the DNS message model shared by the codec.
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod flags;
pub mod message;
pub mod name;
pub mod question;

pub use config::{CodecConfig, ConfigError, Framing};
pub use dns_record::{RecordClass, RecordType, ResourceRecord};
pub use errors::CodecError;
pub use message::Message;
pub use name::{Name, MAX_LABEL_LEN, MAX_NAME_LEN};
pub use question::Question;

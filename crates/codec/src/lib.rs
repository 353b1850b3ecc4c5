//! RFC 1035 wire codec for [`dnswire_domain::Message`].
//!
//! Decoding takes a complete buffer handed over by a transport and never
//! performs I/O. Compression pointers are followed on decode; encoding always
//! writes names uncompressed.
//!
//! ```
//! use dnswire_codec::{decode_framed, encode};
//! use dnswire_domain::{Message, Name, RecordType};
//!
//! let name: Name = "google.com".parse().unwrap();
//! let query = Message::query(42, name, RecordType::A);
//!
//! let wire = encode(&query).unwrap();
//! let framed = decode_framed(&wire).unwrap();
//! assert_eq!(usize::from(framed.length), wire.len() - 2);
//! assert_eq!(framed.message, query);
//! ```
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod int;
pub mod name;

pub use codec::Codec;
pub use decoder::{
    decode, decode_framed, decode_framed_with_limit, decode_with_limit, Framed, HEADER_LEN,
    LENGTH_PREFIX_LEN,
};
pub use encoder::{encode, encode_body};

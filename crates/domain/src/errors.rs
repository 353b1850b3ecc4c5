use thiserror::Error;

use crate::dns_record::{RecordClass, RecordType};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Truncated message: needed {needed} bytes at offset {offset}, buffer has {len}")]
    Truncated {
        offset: usize,
        needed: usize,
        len: usize,
    },

    #[error("Read of {size} bytes at offset {offset} is out of bounds (buffer length {len})")]
    OutOfBounds {
        offset: usize,
        size: usize,
        len: usize,
    },

    #[error("Compression pointer at offset {offset} targets {target}, beyond buffer length {len}")]
    MalformedPointer {
        offset: usize,
        target: usize,
        len: usize,
    },

    #[error("Compression pointer at offset {offset} cannot terminate (target {target}, {hops} hops)")]
    PointerLoop {
        offset: usize,
        target: usize,
        hops: usize,
    },

    #[error("Unsupported answer record: type {record_type}, class {record_class}")]
    UnsupportedRecord {
        record_type: RecordType,
        record_class: RecordClass,
    },

    #[error("Unsupported label type 0x{byte:02X} at offset {offset}")]
    UnsupportedLabelType { offset: usize, byte: u8 },

    #[error("Label of {0} bytes exceeds the 63 byte limit")]
    LabelTooLong(usize),

    #[error("Name of {0} encoded bytes exceeds the 255 byte limit")]
    NameTooLong(usize),

    #[error("Empty label in domain name: {0}")]
    EmptyLabel(String),

    #[error("Record data of {0} bytes exceeds the 65535 byte limit")]
    RdataTooLong(usize),

    #[error("Message body of {0} bytes does not fit a 16-bit length prefix")]
    MessageTooLong(usize),
}

impl CodecError {
    /// True for the error kinds a short or cut-off buffer can produce.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            CodecError::Truncated { .. } | CodecError::OutOfBounds { .. }
        )
    }
}

//! Domain name reading with compression pointer resolution (RFC 1035 §4.1.4)
//! and uncompressed name writing.

use crate::int::{read_bytes, read_u16, read_u8};
use dnswire_domain::{CodecError, Name};
use tracing::trace;

const LABEL_TYPE_MASK: u8 = 0xC0;
const POINTER_TAG: u8 = 0xC0;
const POINTER_OFFSET_MASK: u16 = 0x3FFF;

/// Reads the name starting at `offset`, following compression pointers.
///
/// Returns the name and the offset just past its inline part, which is where
/// the caller resumes. A pointer always ends the inline part, so the resume
/// offset is never inside a pointer target.
///
/// Every pointer must target an offset before the start of the inline segment
/// it ends, which is `offset` for the first segment and the previous target
/// after that. Segment starts therefore strictly decrease and no cycle can
/// form. At most `max_hops` pointers are followed for one name.
pub fn read_name(buf: &[u8], offset: usize, max_hops: usize) -> Result<(Name, usize), CodecError> {
    let mut name = Name::root();
    let mut pos = offset;
    let mut segment_start = offset;
    let mut resume: Option<usize> = None;
    let mut hops = 0usize;

    loop {
        let len_byte = read_u8(buf, pos)?;

        match len_byte & LABEL_TYPE_MASK {
            POINTER_TAG => {
                let target = usize::from(read_u16(buf, pos)? & POINTER_OFFSET_MASK);
                if target >= buf.len() {
                    return Err(CodecError::MalformedPointer {
                        offset: pos,
                        target,
                        len: buf.len(),
                    });
                }

                hops += 1;
                if target >= segment_start || hops > max_hops {
                    return Err(CodecError::PointerLoop {
                        offset: pos,
                        target,
                        hops,
                    });
                }

                trace!(offset = pos, target = target, hops = hops, "Following compression pointer");
                resume.get_or_insert(pos + 2);
                pos = target;
                segment_start = target;
            }
            0x00 => {
                let len = usize::from(len_byte);
                if len == 0 {
                    return Ok((name, resume.unwrap_or(pos + 1)));
                }

                let label = read_bytes(buf, pos + 1, len)?;
                name.push_label(label)?;
                pos += 1 + len;
            }
            _ => {
                return Err(CodecError::UnsupportedLabelType {
                    offset: pos,
                    byte: len_byte,
                });
            }
        }
    }
}

/// Appends `name` uncompressed: each label behind its length byte, then the
/// zero root byte.
///
/// `Name` holds only non-empty labels of at most 63 bytes, so every length
/// fits the byte below the pointer tag.
pub fn write_name(out: &mut Vec<u8>, name: &Name) {
    for label in name.labels() {
        out.push(label.len() as u8);
        out.extend_from_slice(label);
    }
    out.push(0);
}

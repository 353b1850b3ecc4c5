//! Wire bytes to [`Message`].
//!
//! Every reader takes the message body and an offset and hands back the value
//! together with the offset to continue from. Offsets are relative to the
//! start of the body, which is also what compression pointers are relative to.

use crate::int::{read_bytes, read_u16, read_u32};
use crate::name::read_name;
use dnswire_domain::{
    CodecError, Message, Question, RecordClass, RecordType, ResourceRecord,
};
use tracing::{debug, trace, warn};

pub const HEADER_LEN: usize = 12;
pub const LENGTH_PREFIX_LEN: usize = 2;

/// A message read from a stream transport along with its length prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framed {
    pub length: u16,
    pub message: Message,
}

#[derive(Debug, Clone, Copy)]
struct Header {
    id: u16,
    flags: u16,
    qd_count: u16,
    an_count: u16,
    ns_count: u16,
    ar_count: u16,
}

/// Fixed-size fields running off the end of the buffer are reported as a
/// truncated message rather than a bad offset.
fn truncated(err: CodecError) -> CodecError {
    match err {
        CodecError::OutOfBounds { offset, size, len } => CodecError::Truncated {
            offset,
            needed: size,
            len,
        },
        other => other,
    }
}

fn read_header(buf: &[u8]) -> Result<Header, CodecError> {
    if buf.len() < HEADER_LEN {
        return Err(CodecError::Truncated {
            offset: 0,
            needed: HEADER_LEN,
            len: buf.len(),
        });
    }

    Ok(Header {
        id: read_u16(buf, 0)?,
        flags: read_u16(buf, 2)?,
        qd_count: read_u16(buf, 4)?,
        an_count: read_u16(buf, 6)?,
        ns_count: read_u16(buf, 8)?,
        ar_count: read_u16(buf, 10)?,
    })
}

pub fn read_question(
    buf: &[u8],
    offset: usize,
    max_hops: usize,
) -> Result<(Question, usize), CodecError> {
    let (name, pos) = read_name(buf, offset, max_hops)?;
    let record_type = RecordType::from_u16(read_u16(buf, pos).map_err(truncated)?);
    let record_class = RecordClass::from_u16(read_u16(buf, pos + 2).map_err(truncated)?);

    Ok((Question::new(name, record_type, record_class), pos + 4))
}

pub fn read_record(
    buf: &[u8],
    offset: usize,
    max_hops: usize,
) -> Result<(ResourceRecord, usize), CodecError> {
    let (name, pos) = read_name(buf, offset, max_hops)?;
    let record_type = RecordType::from_u16(read_u16(buf, pos).map_err(truncated)?);
    let record_class = RecordClass::from_u16(read_u16(buf, pos + 2).map_err(truncated)?);
    let ttl = read_u32(buf, pos + 4).map_err(truncated)?;
    let rdlength = usize::from(read_u16(buf, pos + 8).map_err(truncated)?);
    let data = read_bytes(buf, pos + 10, rdlength).map_err(truncated)?;

    trace!(
        name = %name,
        record_type = %record_type,
        record_class = %record_class,
        ttl = ttl,
        rdlength = rdlength,
        "Resource record parsed"
    );

    Ok((
        ResourceRecord::new(name, record_type, record_class, ttl, data.to_vec()),
        pos + 10 + rdlength,
    ))
}

fn read_records(
    buf: &[u8],
    mut pos: usize,
    count: u16,
    max_hops: usize,
) -> Result<(Vec<ResourceRecord>, usize), CodecError> {
    let mut records = Vec::with_capacity(usize::from(count).min(buf.len()));
    for _ in 0..count {
        let (record, next) = read_record(buf, pos, max_hops)?;
        records.push(record);
        pos = next;
    }
    Ok((records, pos))
}

/// Decodes a message body with at most `max_hops` compression pointers
/// followed per name.
///
/// Only A/IN records are accepted in the answer section; anything else there
/// fails with [`CodecError::UnsupportedRecord`]. Authority and additional
/// records of any type are kept with their raw RDATA. Bytes after the last
/// declared record are ignored.
pub fn decode_with_limit(buf: &[u8], max_hops: usize) -> Result<Message, CodecError> {
    let header = read_header(buf)?;
    let mut pos = HEADER_LEN;

    let mut questions = Vec::with_capacity(usize::from(header.qd_count).min(buf.len()));
    for _ in 0..header.qd_count {
        let (question, next) = read_question(buf, pos, max_hops)?;
        questions.push(question);
        pos = next;
    }

    let mut answers = Vec::with_capacity(usize::from(header.an_count).min(buf.len()));
    for _ in 0..header.an_count {
        let (answer, next) = read_record(buf, pos, max_hops)?;
        if !answer.is_host_address() {
            warn!(
                record_type = %answer.record_type,
                record_class = %answer.record_class,
                name = %answer.name,
                offset = pos,
                "Unsupported record in answer section"
            );
            return Err(CodecError::UnsupportedRecord {
                record_type: answer.record_type,
                record_class: answer.record_class,
            });
        }
        answers.push(answer);
        pos = next;
    }

    let (authorities, next) = read_records(buf, pos, header.ns_count, max_hops)?;
    pos = next;
    let (additionals, next) = read_records(buf, pos, header.ar_count, max_hops)?;
    pos = next;

    debug!(
        id = header.id,
        questions = questions.len(),
        answers = answers.len(),
        authorities = authorities.len(),
        additionals = additionals.len(),
        trailing = buf.len() - pos,
        "DNS message decoded"
    );

    Ok(Message {
        transaction_id: header.id,
        flags: header.flags,
        question_count: header.qd_count,
        answer_count: header.an_count,
        authority_count: header.ns_count,
        additional_count: header.ar_count,
        questions,
        answers,
        authorities,
        additionals,
    })
}

/// Decodes a message body (no length prefix).
pub fn decode(buf: &[u8]) -> Result<Message, CodecError> {
    decode_with_limit(buf, buf.len())
}

/// Decodes a stream-framed message: a 2-byte big-endian body length followed
/// by the body. Bytes after the declared body are ignored.
pub fn decode_framed_with_limit(
    buf: &[u8],
    max_hops: Option<usize>,
) -> Result<Framed, CodecError> {
    let length = read_u16(buf, 0).map_err(truncated)?;
    let body = read_bytes(buf, LENGTH_PREFIX_LEN, usize::from(length)).map_err(truncated)?;
    let message = decode_with_limit(body, max_hops.unwrap_or(body.len()))?;

    Ok(Framed { length, message })
}

pub fn decode_framed(buf: &[u8]) -> Result<Framed, CodecError> {
    decode_framed_with_limit(buf, None)
}

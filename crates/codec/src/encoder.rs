//! [`Message`] to wire bytes.
//!
//! All four sections are written, and the header counts are taken from the
//! section lengths, not from the message's `*_count` fields. Names are always
//! written inline.

use crate::decoder::LENGTH_PREFIX_LEN;
use crate::int::{write_u16, write_u32};
use crate::name::write_name;
use dnswire_domain::{CodecError, Message, Question, ResourceRecord};
use tracing::debug;

const MAX_BODY_LEN: usize = u16::MAX as usize;

fn len_u16(len: usize) -> Result<u16, CodecError> {
    u16::try_from(len).map_err(|_| CodecError::MessageTooLong(len))
}

fn write_question(out: &mut Vec<u8>, question: &Question) {
    write_name(out, &question.name);
    write_u16(out, question.record_type.to_u16());
    write_u16(out, question.record_class.to_u16());
}

fn write_record(out: &mut Vec<u8>, record: &ResourceRecord) -> Result<(), CodecError> {
    let rdlength =
        u16::try_from(record.data.len()).map_err(|_| CodecError::RdataTooLong(record.data.len()))?;

    write_name(out, &record.name);
    write_u16(out, record.record_type.to_u16());
    write_u16(out, record.record_class.to_u16());
    write_u32(out, record.ttl);
    write_u16(out, rdlength);
    out.extend_from_slice(&record.data);
    Ok(())
}

fn write_body(out: &mut Vec<u8>, message: &Message) -> Result<(), CodecError> {
    let start = out.len();

    write_u16(out, message.transaction_id);
    write_u16(out, message.flags);
    write_u16(out, len_u16(message.questions.len())?);
    write_u16(out, len_u16(message.answers.len())?);
    write_u16(out, len_u16(message.authorities.len())?);
    write_u16(out, len_u16(message.additionals.len())?);

    for question in &message.questions {
        write_question(out, question);
    }
    for record in message
        .answers
        .iter()
        .chain(&message.authorities)
        .chain(&message.additionals)
    {
        write_record(out, record)?;
    }

    let body_len = out.len() - start;
    if body_len > MAX_BODY_LEN {
        return Err(CodecError::MessageTooLong(body_len));
    }

    if !message.counts_match() {
        debug!(
            id = message.transaction_id,
            "Header counts differ from section lengths, writing section lengths"
        );
    }
    Ok(())
}

/// Encodes a message body without a length prefix, for datagram transports.
pub fn encode_body(message: &Message) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(512);
    write_body(&mut out, message)?;

    debug!(id = message.transaction_id, bytes = out.len(), "DNS message encoded");
    Ok(out)
}

/// Encodes a message for stream transports: a 2-byte big-endian body length,
/// then the body.
pub fn encode(message: &Message) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(512);
    write_u16(&mut out, 0);
    write_body(&mut out, message)?;

    let body_len = out.len() - LENGTH_PREFIX_LEN;
    let prefix = len_u16(body_len)?;
    out[..LENGTH_PREFIX_LEN].copy_from_slice(&prefix.to_be_bytes());

    debug!(
        id = message.transaction_id,
        bytes = out.len(),
        body_length = body_len,
        "DNS message encoded"
    );
    Ok(out)
}

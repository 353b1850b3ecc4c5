//! Fixed-width big-endian integers. Every bounds check on the read side of
//! the codec funnels through [`read_bytes`].

use dnswire_domain::CodecError;

pub fn read_bytes(buf: &[u8], offset: usize, size: usize) -> Result<&[u8], CodecError> {
    offset
        .checked_add(size)
        .filter(|&end| end <= buf.len())
        .map(|end| &buf[offset..end])
        .ok_or(CodecError::OutOfBounds {
            offset,
            size,
            len: buf.len(),
        })
}

pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8, CodecError> {
    read_bytes(buf, offset, 1).map(|b| b[0])
}

pub fn read_u16(buf: &[u8], offset: usize) -> Result<u16, CodecError> {
    read_bytes(buf, offset, 2).map(|b| u16::from_be_bytes([b[0], b[1]]))
}

pub fn read_u32(buf: &[u8], offset: usize) -> Result<u32, CodecError> {
    read_bytes(buf, offset, 4).map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
}

pub fn write_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

pub fn write_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

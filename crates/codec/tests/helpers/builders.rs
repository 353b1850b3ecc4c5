#![allow(dead_code)]

/// Assembles raw message bodies byte by byte, so tests can lay out
/// compression pointers at known offsets.
pub struct WireBuilder {
    buf: Vec<u8>,
}

impl WireBuilder {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn header(mut self, id: u16, flags: u16, qd: u16, an: u16, ns: u16, ar: u16) -> Self {
        for field in [id, flags, qd, an, ns, ar] {
            self.buf.extend_from_slice(&field.to_be_bytes());
        }
        self
    }

    /// Inline labels followed by the root byte.
    pub fn name(mut self, labels: &[&str]) -> Self {
        for label in labels {
            self.buf.push(label.len() as u8);
            self.buf.extend_from_slice(label.as_bytes());
        }
        self.buf.push(0x00);
        self
    }

    /// Inline labels ending in a pointer instead of the root byte.
    pub fn name_then_pointer(mut self, labels: &[&str], target: u16) -> Self {
        for label in labels {
            self.buf.push(label.len() as u8);
            self.buf.extend_from_slice(label.as_bytes());
        }
        self.pointer(target)
    }

    pub fn pointer(mut self, target: u16) -> Self {
        self.buf.extend_from_slice(&(0xC000 | target).to_be_bytes());
        self
    }

    pub fn u16(mut self, value: u16) -> Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn u32(mut self, value: u32) -> Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// TYPE, CLASS, TTL, RDLENGTH and RDATA of a record whose name was just
    /// written.
    pub fn record_tail(self, rtype: u16, rclass: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.u16(rtype)
            .u16(rclass)
            .u32(ttl)
            .u16(rdata.len() as u16)
            .bytes(rdata)
    }

    pub fn offset(&self) -> u16 {
        self.buf.len() as u16
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }

    /// Prepends the 2-byte stream length prefix.
    pub fn build_framed(self) -> Vec<u8> {
        let mut framed = (self.buf.len() as u16).to_be_bytes().to_vec();
        framed.extend_from_slice(&self.buf);
        framed
    }
}

pub const TYPE_A: u16 = 1;
pub const TYPE_NS: u16 = 2;
pub const CLASS_IN: u16 = 1;

/// A response to `google.com A IN` with one answer whose name is a pointer
/// back to the question name at offset 12.
pub fn google_response() -> Vec<u8> {
    WireBuilder::new()
        .header(0x002A, 0x8180, 1, 1, 0, 0)
        .name(&["google", "com"])
        .u16(TYPE_A)
        .u16(CLASS_IN)
        .pointer(12)
        .record_tail(TYPE_A, CLASS_IN, 300, &[142, 250, 180, 14])
        .build()
}

//! Bit layout of the 16-bit header flags word (RFC 1035 §4.1.1).

pub const FLAG_QR: u16 = 1 << 15;
pub const OPCODE_MASK: u16 = 0x7800; // Bits 11-14
pub const OPCODE_SHIFT: u8 = 11;
pub const FLAG_AA: u16 = 1 << 10;
pub const FLAG_TC: u16 = 1 << 9;
pub const FLAG_RD: u16 = 1 << 8;
pub const FLAG_RA: u16 = 1 << 7;
pub const Z_MASK: u16 = 0x0070; // Bits 4-6
pub const Z_SHIFT: u8 = 4;
pub const RCODE_MASK: u16 = 0x000F; // Bits 0-3

pub const OPCODE_QUERY: u8 = 0;
pub const RCODE_NO_ERROR: u8 = 0;

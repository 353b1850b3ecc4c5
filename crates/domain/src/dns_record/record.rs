use super::{RecordClass, RecordType};
use crate::name::Name;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// A resource record with its RDATA kept as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub name: Name,

    pub record_type: RecordType,

    pub record_class: RecordClass,

    /// Seconds the record may be cached.
    pub ttl: u32,

    pub data: Vec<u8>,
}

impl ResourceRecord {
    pub fn new(
        name: Name,
        record_type: RecordType,
        record_class: RecordClass,
        ttl: u32,
        data: Vec<u8>,
    ) -> Self {
        Self {
            name,
            record_type,
            record_class,
            ttl,
            data,
        }
    }

    /// Builds an A/IN record for `address`.
    pub fn host_address(name: Name, ttl: u32, address: Ipv4Addr) -> Self {
        Self::new(
            name,
            RecordType::A,
            RecordClass::IN,
            ttl,
            address.octets().to_vec(),
        )
    }

    pub fn is_host_address(&self) -> bool {
        self.record_type == RecordType::A && self.record_class == RecordClass::IN
    }

    /// The address carried by an A/IN record, if the payload is 4 bytes.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        if !self.is_host_address() {
            return None;
        }
        let octets: [u8; 4] = self.data.as_slice().try_into().ok()?;
        Some(Ipv4Addr::from(octets))
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}-", self.record_class, self.record_type, self.name)?;
        for (i, b) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", b)?;
        }
        Ok(())
    }
}

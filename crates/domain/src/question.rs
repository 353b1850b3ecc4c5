use crate::dns_record::{RecordClass, RecordType};
use crate::name::Name;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    pub name: Name,

    pub record_type: RecordType,

    pub record_class: RecordClass,
}

impl Question {
    pub fn new(name: Name, record_type: RecordType, record_class: RecordClass) -> Self {
        Self {
            name,
            record_type,
            record_class,
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.record_class, self.record_type)
    }
}

#![allow(dead_code)]
use dnswire_domain::{Message, Name, Question, RecordClass, RecordType, ResourceRecord};
use std::net::Ipv4Addr;

pub fn name(s: &str) -> Name {
    s.parse().unwrap()
}

pub struct MessageBuilder {
    message: Message,
}

impl MessageBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            message: Message::new(id),
        }
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.message.flags = flags;
        self
    }

    pub fn question(mut self, domain: &str, record_type: RecordType) -> Self {
        self.message
            .add_question(Question::new(name(domain), record_type, RecordClass::IN));
        self
    }

    pub fn answer(mut self, domain: &str, ttl: u32, address: Ipv4Addr) -> Self {
        self.message
            .add_answer(ResourceRecord::host_address(name(domain), ttl, address));
        self
    }

    pub fn authority(mut self, record: ResourceRecord) -> Self {
        self.message.add_authority(record);
        self
    }

    pub fn additional(mut self, record: ResourceRecord) -> Self {
        self.message.add_additional(record);
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}

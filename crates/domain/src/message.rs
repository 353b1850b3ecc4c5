use crate::dns_record::{RecordClass, RecordType, ResourceRecord};
use crate::flags::{
    FLAG_AA, FLAG_QR, FLAG_RA, FLAG_RD, FLAG_TC, OPCODE_MASK, OPCODE_SHIFT, RCODE_MASK, Z_MASK,
    Z_SHIFT,
};
use crate::name::Name;
use crate::question::Question;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A DNS message: the fixed header fields plus the four record sections.
///
/// The `*_count` fields mirror the header as read from the wire. After a
/// successful decode each count equals the length of its section. Callers
/// building a message should use the `add_*` methods, which keep the two in
/// step; the encoder always writes the real section lengths regardless.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    pub transaction_id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    pub fn new(transaction_id: u16) -> Self {
        Self {
            transaction_id,
            ..Self::default()
        }
    }

    /// Standard recursive IN query with a single question.
    pub fn query(transaction_id: u16, name: Name, record_type: RecordType) -> Self {
        let mut message = Self::new(transaction_id);
        message.set_recursion_desired(true);
        message.add_question(Question::new(name, record_type, RecordClass::IN));
        message
    }

    /// Same as [`Message::query`] with a random transaction id.
    pub fn random_query(name: Name, record_type: RecordType) -> Self {
        Self::query(fastrand::u16(..), name, record_type)
    }

    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
        self.question_count = self.question_count.saturating_add(1);
    }

    pub fn add_answer(&mut self, record: ResourceRecord) {
        self.answers.push(record);
        self.answer_count = self.answer_count.saturating_add(1);
    }

    pub fn add_authority(&mut self, record: ResourceRecord) {
        self.authorities.push(record);
        self.authority_count = self.authority_count.saturating_add(1);
    }

    pub fn add_additional(&mut self, record: ResourceRecord) {
        self.additionals.push(record);
        self.additional_count = self.additional_count.saturating_add(1);
    }

    /// True when every header count matches the length of its section.
    pub fn counts_match(&self) -> bool {
        usize::from(self.question_count) == self.questions.len()
            && usize::from(self.answer_count) == self.answers.len()
            && usize::from(self.authority_count) == self.authorities.len()
            && usize::from(self.additional_count) == self.additionals.len()
    }

    pub fn is_response(&self) -> bool {
        self.flags & FLAG_QR != 0
    }

    pub fn set_response(&mut self, response: bool) {
        self.set_flag(FLAG_QR, response);
    }

    pub fn opcode(&self) -> u8 {
        ((self.flags & OPCODE_MASK) >> OPCODE_SHIFT) as u8
    }

    pub fn authoritative(&self) -> bool {
        self.flags & FLAG_AA != 0
    }

    pub fn truncated(&self) -> bool {
        self.flags & FLAG_TC != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & FLAG_RD != 0
    }

    pub fn set_recursion_desired(&mut self, desired: bool) {
        self.set_flag(FLAG_RD, desired);
    }

    pub fn recursion_available(&self) -> bool {
        self.flags & FLAG_RA != 0
    }

    /// The three reserved Z bits. RFC 1035 requires senders to zero them.
    pub fn reserved_bits(&self) -> u8 {
        ((self.flags & Z_MASK) >> Z_SHIFT) as u8
    }

    pub fn response_code(&self) -> u8 {
        (self.flags & RCODE_MASK) as u8
    }

    fn set_flag(&mut self, bit: u16, on: bool) {
        if on {
            self.flags |= bit;
        } else {
            self.flags &= !bit;
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Message {{ id: {}, qdcount: {}, ancount: {}, nscount: {}, arcount: {}, questions: ",
            self.transaction_id,
            self.question_count,
            self.answer_count,
            self.authority_count,
            self.additional_count
        )?;
        write_list(f, &self.questions)?;
        f.write_str(", answers: ")?;
        write_list(f, &self.answers)?;
        f.write_str(" }")
    }
}

use crate::errors::CodecError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest label allowed by RFC 1035 §2.3.4.
pub const MAX_LABEL_LEN: usize = 63;

/// Longest name allowed by RFC 1035 §2.3.4, counting length bytes and the
/// terminating root byte.
pub const MAX_NAME_LEN: usize = 255;

/// A domain name as an ordered list of labels. The empty list is the root.
///
/// Labels are opaque bytes. Every constructor, deserialization included,
/// goes through [`Name::push_label`], which keeps each label non-empty and
/// within [`MAX_LABEL_LEN`] and the whole encoded name within
/// [`MAX_NAME_LEN`]. A `Name` that exists can always be written to the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Name {
    labels: Vec<Vec<u8>>,
}

impl Name {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_labels<I, L>(labels: I) -> Result<Self, CodecError>
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let mut name = Self::root();
        for label in labels {
            name.push_label(label)?;
        }
        Ok(name)
    }

    /// Appends a label, rejecting it if it is empty or if the label or the
    /// resulting name would exceed the RFC limits.
    pub fn push_label(&mut self, label: impl Into<Vec<u8>>) -> Result<(), CodecError> {
        let label = label.into();
        if label.is_empty() {
            return Err(CodecError::EmptyLabel(self.to_string()));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(CodecError::LabelTooLong(label.len()));
        }

        let new_len = self.encoded_len() + 1 + label.len();
        if new_len > MAX_NAME_LEN {
            return Err(CodecError::NameTooLong(new_len));
        }

        self.labels.push(label);
        Ok(())
    }

    pub fn labels(&self) -> &[Vec<u8>] {
        &self.labels
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Size of the uncompressed wire form: one length byte per label, the
    /// label bytes, and the zero terminator.
    pub fn encoded_len(&self) -> usize {
        self.labels.iter().map(|l| 1 + l.len()).sum::<usize>() + 1
    }
}

impl TryFrom<Vec<Vec<u8>>> for Name {
    type Error = CodecError;

    fn try_from(labels: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_labels(labels)
    }
}

impl From<Name> for Vec<Vec<u8>> {
    fn from(name: Name) -> Self {
        name.labels
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }

        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            for &b in label {
                match b {
                    b'.' | b'\\' => write!(f, "\\{}", b as char)?,
                    0x21..=0x7E => write!(f, "{}", b as char)?,
                    _ => write!(f, "\\{:03}", b)?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Name {
    type Err = CodecError;

    /// Parses a dotted name such as `google.com` or `google.com.`. Both `""`
    /// and `"."` give the root. No escape sequences are recognised.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_suffix('.').unwrap_or(s);
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        let mut name = Self::root();
        for label in trimmed.split('.') {
            if label.is_empty() {
                return Err(CodecError::EmptyLabel(s.to_string()));
            }
            name.push_label(label.as_bytes())?;
        }
        Ok(name)
    }
}

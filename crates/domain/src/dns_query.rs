use crate::dns_record::{RecordType, CLASS_IN};
use crate::errors::CodecError;
use std::fmt;

/// A single mDNS question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub name: String,
    pub qtype: RecordType,
    /// Class with the unicast-response bit masked off.
    pub qclass: u16,
    /// Top bit of the class field: the asker accepts a unicast reply.
    pub unicast_response: bool,
    pub valid: bool,
    /// Why decoding marked this query invalid.
    pub error: Option<CodecError>,
    /// Where the query starts in the packet it was decoded from; zero when built locally.
    pub offset: usize,
}

impl Query {
    pub fn new(name: impl Into<String>, qtype: RecordType) -> Self {
        Self {
            name: name.into(),
            qtype,
            qclass: CLASS_IN,
            unicast_response: false,
            valid: true,
            error: None,
            offset: 0,
        }
    }

    pub fn with_class(mut self, qclass: u16) -> Self {
        self.qclass = qclass & 0x7FFF;
        self
    }

    pub fn with_unicast_response(mut self, unicast_response: bool) -> Self {
        self.unicast_response = unicast_response;
        self
    }

    /// Marks the query invalid, keeping the first reason recorded.
    pub fn invalidate(&mut self, error: CodecError) {
        self.valid = false;
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} class=0x{:X}{}",
            self.name,
            self.qtype,
            self.qclass,
            if self.unicast_response { " QU" } else { "" }
        )?;
        if let Some(error) = &self.error {
            write!(f, " [invalid: {}]", error)?;
        }
        Ok(())
    }
}

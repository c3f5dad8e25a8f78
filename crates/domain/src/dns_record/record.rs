use super::{RData, RecordType, CLASS_IN};
use crate::errors::CodecError;
use std::fmt;

/// A resource record from the answer, authority or additional section.
/// All three share one wire layout, so one type covers them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub name: String,
    pub rrtype: RecordType,
    /// Class with the cache-flush bit masked off.
    pub rrclass: u16,
    /// Top bit of the class field: receivers should flush cached copies.
    pub cache_flush: bool,
    pub ttl: u32,
    pub rdata: RData,
    pub valid: bool,
    /// Why decoding marked this record invalid.
    pub error: Option<CodecError>,
    /// Where the record starts in the packet it was decoded from; zero when built locally.
    pub offset: usize,
}

impl Answer {
    /// Builds an IN-class record whose type follows the payload.
    /// Raw payloads need [`Answer::with_type`].
    pub fn new(name: impl Into<String>, rdata: RData, ttl: u32) -> Self {
        Self {
            name: name.into(),
            rrtype: rdata.record_type().unwrap_or(RecordType::Other(0)),
            rrclass: CLASS_IN,
            cache_flush: false,
            ttl,
            rdata,
            valid: true,
            error: None,
            offset: 0,
        }
    }

    pub fn with_type(mut self, rrtype: RecordType) -> Self {
        self.rrtype = rrtype;
        self
    }

    pub fn with_class(mut self, rrclass: u16) -> Self {
        self.rrclass = rrclass & 0x7FFF;
        self
    }

    pub fn with_cache_flush(mut self, cache_flush: bool) -> Self {
        self.cache_flush = cache_flush;
        self
    }

    /// Marks the record invalid, keeping the first reason recorded.
    pub fn invalidate(&mut self, error: CodecError) {
        self.valid = false;
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// A TTL of zero announces that the record is going away.
    pub fn is_goodbye(&self) -> bool {
        self.ttl == 0
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} class=0x{:X} ttl={}{} {}",
            self.name,
            self.rrtype,
            self.rrclass,
            self.ttl,
            if self.cache_flush { " flush" } else { "" },
            self.rdata
        )?;
        if let Some(error) = &self.error {
            write!(f, " [invalid: {}]", error)?;
        }
        Ok(())
    }
}

#![allow(dead_code)]
use mdns_wire_domain::{Answer, RData, RecordType};
use std::net::Ipv4Addr;

pub struct AnswerBuilder {
    name: String,
    rdata: RData,
    rrtype: Option<RecordType>,
    ttl: u32,
    cache_flush: bool,
}

impl AnswerBuilder {
    pub fn new() -> Self {
        Self {
            name: "printer.local".to_string(),
            rdata: RData::A(Ipv4Addr::new(192, 168, 1, 20)),
            rrtype: None,
            ttl: 120,
            cache_flush: false,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn rdata(mut self, rdata: RData) -> Self {
        self.rdata = rdata;
        self
    }

    pub fn rrtype(mut self, rrtype: RecordType) -> Self {
        self.rrtype = Some(rrtype);
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn cache_flush(mut self, cache_flush: bool) -> Self {
        self.cache_flush = cache_flush;
        self
    }

    pub fn build(self) -> Answer {
        let answer = Answer::new(self.name, self.rdata, self.ttl).with_cache_flush(self.cache_flush);
        match self.rrtype {
            Some(rrtype) => answer.with_type(rrtype),
            None => answer,
        }
    }
}

impl Default for AnswerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

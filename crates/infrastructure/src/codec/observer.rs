use mdns_wire_domain::{Answer, Query};

/// Receives every query and resource record as [`PacketCodec::parse`] decodes
/// them, in packet order. Items are delivered whether or not they decoded
/// cleanly; check `valid` before acting on one.
///
/// Calls happen synchronously inside `parse`, so implementations must not block.
///
/// [`PacketCodec::parse`]: super::PacketCodec::parse
pub trait PacketObserver {
    fn on_query(&mut self, _query: Query) {}

    fn on_answer(&mut self, _answer: Answer) {}
}

impl<O: PacketObserver + ?Sized> PacketObserver for &mut O {
    fn on_query(&mut self, query: Query) {
        (**self).on_query(query)
    }

    fn on_answer(&mut self, answer: Answer) {
        (**self).on_answer(answer)
    }
}

impl<O: PacketObserver + ?Sized> PacketObserver for Box<O> {
    fn on_query(&mut self, query: Query) {
        (**self).on_query(query)
    }

    fn on_answer(&mut self, answer: Answer) {
        (**self).on_answer(answer)
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl PacketObserver for NullObserver {}

/// Keeps every delivered item.
#[derive(Debug, Default, Clone)]
pub struct CollectingObserver {
    pub queries: Vec<Query>,
    pub answers: Vec<Answer>,
}

impl CollectingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.queries.clear();
        self.answers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty() && self.answers.is_empty()
    }
}

impl PacketObserver for CollectingObserver {
    fn on_query(&mut self, query: Query) {
        self.queries.push(query);
    }

    fn on_answer(&mut self, answer: Answer) {
        self.answers.push(answer);
    }
}

pub mod announce;
pub mod listen;
pub mod query;

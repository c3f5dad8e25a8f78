use crate::{MAX_NAME_LEN, MAX_PACKET_SIZE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Capacity of the packet buffer in bytes. Larger datagrams are dropped.
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,

    /// Output capacity for decoded names and text, counting the terminator slot,
    /// so decoded strings hold at most `max_name_len - 1` bytes.
    #[serde(default = "default_max_name_len")]
    pub max_name_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
            max_name_len: default_max_name_len(),
        }
    }
}

fn default_buffer_capacity() -> usize {
    MAX_PACKET_SIZE
}

fn default_max_name_len() -> usize {
    MAX_NAME_LEN
}

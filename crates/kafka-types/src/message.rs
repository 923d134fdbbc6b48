//! Kafka message types.
//!
//! Plain owned copies of what the consumer hands back. Keys and values stay
//! raw bytes; nothing here decodes or validates the payload.

/// A consumed Kafka message with metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Kafka topic name
    pub topic: String,
    /// Kafka partition number
    pub partition: i32,
    /// Kafka offset within the partition
    pub offset: i64,
    /// Message key (if any)
    pub key: Option<Vec<u8>>,
    /// Message value (if any)
    pub payload: Option<Vec<u8>>,
    /// Message timestamp in milliseconds since epoch (if available)
    pub timestamp: Option<i64>,
}

impl Message {
    /// Value bytes, empty for a message without a value (tombstone).
    pub fn payload_bytes(&self) -> &[u8] {
        self.payload.as_deref().unwrap_or_default()
    }

    /// Key rendered for log output. Non UTF-8 bytes are replaced.
    pub fn key_lossy(&self) -> Option<String> {
        self.key
            .as_deref()
            .map(|k| String::from_utf8_lossy(k).into_owned())
    }
}

/// Outcome of a single poll on the currently assigned partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Polled {
    /// A message was received
    Message(Message),
    /// The consumer reached the end of the partition
    PartitionEof {
        /// Partition that reached its end
        partition: i32,
    },
    /// Nothing arrived before the poll timeout elapsed
    Empty,
}

use crate::error::Result;
use async_trait::async_trait;
use kafka_types::Polled;

/// A partition-at-a-time message source.
///
/// The importer only needs three things from Kafka: the partition list of a
/// topic, the ability to point the consumer at one partition from its first
/// offset, and a poll that reports messages and end-of-partition.
/// [`crate::Consumer`] implements this against a broker.
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// Partition ids of `topic`, in ascending order
    async fn partitions(&self, topic: &str) -> Result<Vec<i32>>;

    /// Replace the current assignment with `partition` of `topic`, starting
    /// at the earliest available offset
    fn assign(&self, topic: &str, partition: i32) -> Result<()>;

    /// Wait for the next poll result on the assigned partition
    async fn poll(&self) -> Result<Polled>;
}

use crate::error::{Error, Result};
use crate::source::MessageSource;
use async_trait::async_trait;
use kafka_types::{Message, Polled};
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer as RdkafkaConsumer, StreamConsumer as RdkafkaStreamConsumer};
use rdkafka::error::{KafkaError, RDKafkaErrorCode};
use rdkafka::message::{BorrowedMessage as RdkafkaBorrowedMessage, Message as RdkafkaMessage};
use rdkafka::{Offset, TopicPartitionList};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Consumer group used for every import run. Offsets are never committed
/// under it, so the group carries no progress between runs.
pub const IMPORT_GROUP_ID: &str = "import-consumer";

/// Configuration for Kafka consumer
#[derive(Debug, Clone)]
pub struct ConsumerConfig {
    /// Kafka brokers (comma-separated list)
    pub brokers: String,
    /// Consumer group ID
    pub group_id: String,
    /// Emit an end-of-partition event when the consumer catches up
    ///
    /// The importer relies on this to know when a partition is drained.
    pub enable_partition_eof: bool,
    /// Enable auto commit
    ///
    /// False by default: an import always re-reads every partition from the
    /// beginning and never records how far it got.
    pub enable_auto_commit: bool,
    /// Timeout for fetching topic metadata from the brokers
    pub metadata_timeout: Duration,
    /// Maximum wait for a single poll. `None` waits until a message,
    /// end-of-partition or error arrives.
    pub poll_timeout: Option<Duration>,
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            brokers: "localhost:9092".to_string(),
            group_id: IMPORT_GROUP_ID.to_string(),
            enable_partition_eof: true,
            enable_auto_commit: false,
            metadata_timeout: Duration::from_secs(10),
            poll_timeout: None,
        }
    }
}

/// Kafka consumer reading one manually assigned partition at a time
///
/// Dropping the consumer releases its assignment and closes the underlying
/// client, on success and error paths alike.
pub struct Consumer {
    consumer: Arc<RdkafkaStreamConsumer>,
    config: ConsumerConfig,
}

impl Consumer {
    /// Create a new Kafka consumer
    ///
    /// No broker connection is made until metadata is requested or a
    /// partition is assigned.
    pub fn new(config: ConsumerConfig) -> Result<Self> {
        let consumer: RdkafkaStreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("group.id", &config.group_id)
            .set("enable.auto.commit", config.enable_auto_commit.to_string())
            .set(
                "enable.partition.eof",
                config.enable_partition_eof.to_string(),
            )
            .create()
            .map_err(|e| Error::Consumer(format!("Failed to create consumer: {e}")))?;

        debug!(
            "Created Kafka consumer: brokers={}, group_id={}",
            config.brokers, config.group_id
        );

        Ok(Self {
            consumer: Arc::new(consumer),
            config,
        })
    }

    fn to_message(msg: &RdkafkaBorrowedMessage) -> Message {
        Message {
            topic: msg.topic().to_string(),
            partition: msg.partition(),
            offset: msg.offset(),
            key: msg.key().map(|k| k.to_vec()),
            payload: msg.payload().map(|p| p.to_vec()),
            timestamp: msg.timestamp().to_millis(),
        }
    }

    /// The rdkafka consumer, so tests can inspect the current assignment
    pub fn inner(&self) -> &RdkafkaStreamConsumer {
        &self.consumer
    }
}

#[async_trait]
impl MessageSource for Consumer {
    async fn partitions(&self, topic: &str) -> Result<Vec<i32>> {
        let consumer = Arc::clone(&self.consumer);
        let requested = topic.to_string();
        let timeout = self.config.metadata_timeout;

        // fetch_metadata blocks the calling thread
        let found = tokio::task::spawn_blocking(move || {
            let metadata = consumer.fetch_metadata(Some(requested.as_str()), timeout)?;
            let found = metadata
                .topics()
                .iter()
                .find(|t| t.name() == requested)
                .map(|t| {
                    let ids: Vec<i32> = t.partitions().iter().map(|p| p.id()).collect();
                    (t.error().map(RDKafkaErrorCode::from), ids)
                });
            Ok::<_, KafkaError>(found)
        })
        .await
        .map_err(|e| Error::Task(format!("Metadata fetch task failed: {e}")))??;

        let (topic_error, mut partitions) =
            found.ok_or_else(|| Error::TopicNotFound(topic.to_string()))?;

        match topic_error {
            None => {}
            Some(RDKafkaErrorCode::UnknownTopicOrPartition) => {
                return Err(Error::TopicNotFound(topic.to_string()));
            }
            Some(code) => {
                return Err(Error::Metadata(format!(
                    "Broker reported an error for topic '{topic}': {code}"
                )));
            }
        }

        partitions.sort_unstable();
        debug!("Topic {topic} has partitions {partitions:?}");
        Ok(partitions)
    }

    fn assign(&self, topic: &str, partition: i32) -> Result<()> {
        let mut tpl = TopicPartitionList::with_capacity(1);
        tpl.add_partition_offset(topic, partition, Offset::Beginning)
            .map_err(|e| Error::Consumer(format!("Failed to add partition offset: {e}")))?;

        self.consumer
            .assign(&tpl)
            .map_err(|e| Error::Consumer(format!("Failed to assign partition: {e}")))?;

        debug!("Assigned {topic}[{partition}] from the beginning");
        Ok(())
    }

    async fn poll(&self) -> Result<Polled> {
        let received = match self.config.poll_timeout {
            Some(timeout) => match tokio::time::timeout(timeout, self.consumer.recv()).await {
                Ok(received) => received,
                Err(_) => return Ok(Polled::Empty),
            },
            None => self.consumer.recv().await,
        };

        match received {
            Ok(msg) => Ok(Polled::Message(Self::to_message(&msg))),
            Err(KafkaError::PartitionEOF(partition)) => Ok(Polled::PartitionEof { partition }),
            Err(e) => Err(Error::Consumer(format!("Error receiving message: {e}"))),
        }
    }
}

impl Drop for Consumer {
    fn drop(&mut self) {
        if let Err(e) = self.consumer.unassign() {
            warn!("Failed to release partition assignment: {e}");
        }
        info!("Kafka consumer closed");
    }
}

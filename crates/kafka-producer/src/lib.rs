//! Kafka producer library for testing kafka-importer
//!
//! This library publishes JSON-encoded test messages so that imports can be
//! verified against a real broker.
//!
//! ## Features
//!
//! - **Kafka producer**: Helper struct for publishing keyed messages, optionally
//!   to an explicit partition
//! - **Topic management**: Utilities for creating Kafka topics
//! - **Test data**: Deterministic JSON events spread over partitions
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kafka_importer_kafka_producer::{publish_test_events, KafkaTestProducer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let producer = KafkaTestProducer::new("localhost:9092").await?;
//!
//!     // Create topic
//!     producer.create_topic_if_not_exists("user-events", 3).await?;
//!
//!     // Publish the sample events round-robin over the 3 partitions
//!     let published = publish_test_events(&producer, "user-events", 3).await?;
//!     println!("published {} events", published.len());
//!     Ok(())
//! }
//! ```

use anyhow::{Context, Result};
use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::ClientConfig;
use serde::Serialize;
use std::time::Duration;

// Test data helpers module
pub mod testdata;

pub use testdata::{publish_test_events, test_events, PublishedEvent, TestEvent};

/// Kafka producer wrapper for testing
pub struct KafkaTestProducer {
    producer: FutureProducer,
    broker: String,
}

impl KafkaTestProducer {
    /// Create a new Kafka test producer
    pub async fn new(broker: &str) -> Result<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", broker)
            .set("message.timeout.ms", "5000")
            .create()
            .context("Failed to create Kafka producer")?;

        Ok(Self {
            producer,
            broker: broker.to_string(),
        })
    }

    /// Create Kafka topic if it doesn't exist
    pub async fn create_topic_if_not_exists(&self, topic: &str, partitions: i32) -> Result<()> {
        let admin_client: AdminClient<DefaultClientContext> = ClientConfig::new()
            .set("bootstrap.servers", &self.broker)
            .create()
            .context("Failed to create admin client")?;

        let new_topic = NewTopic::new(topic, partitions, TopicReplication::Fixed(1));
        let opts = AdminOptions::new().operation_timeout(Some(Duration::from_secs(5)));

        match admin_client.create_topics(&[new_topic], &opts).await {
            Ok(results) => {
                for result in results {
                    match result {
                        Ok(topic_name) => {
                            tracing::info!("Topic '{topic_name}' created successfully");
                        }
                        Err((topic_name, err)) => {
                            if err.to_string().contains("already exists") {
                                tracing::info!("Topic '{topic_name}' already exists");
                            } else {
                                return Err(anyhow::anyhow!("Failed to create topic: {err}"));
                            }
                        }
                    }
                }
            }
            Err(e) => return Err(anyhow::anyhow!("Failed to create topics: {e}")),
        }

        Ok(())
    }

    /// Publish raw bytes, optionally keyed and pinned to a partition
    pub async fn publish(
        &self,
        topic: &str,
        partition: Option<i32>,
        key: Option<&str>,
        payload: &[u8],
    ) -> Result<()> {
        let mut record: FutureRecord<'_, str, [u8]> = FutureRecord::to(topic).payload(payload);
        if let Some(key) = key {
            record = record.key(key);
        }
        if let Some(partition) = partition {
            record = record.partition(partition);
        }

        self.producer
            .send(record, Duration::from_secs(5))
            .await
            .map_err(|(err, _)| err)
            .context("Failed to send message to Kafka")?;

        tracing::debug!("Published message to {topic} (partition={partition:?}, key={key:?})");
        Ok(())
    }

    /// Publish `value` serialized as JSON
    pub async fn publish_json<T: Serialize>(
        &self,
        topic: &str,
        partition: Option<i32>,
        key: Option<&str>,
        value: &T,
    ) -> Result<Vec<u8>> {
        let payload = serde_json::to_vec(value).context("Failed to encode message as JSON")?;
        self.publish(topic, partition, key, &payload).await?;
        Ok(payload)
    }
}

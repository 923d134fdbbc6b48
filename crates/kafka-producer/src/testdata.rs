//! Test data publishing helpers for Kafka integration tests
//!
//! The events are deterministic so that tests can predict the exact content
//! and order of the files an import produces.

use crate::KafkaTestProducer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sample user event, published as JSON with `user_id` as the message key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestEvent {
    pub id: u32,
    pub user_id: String,
    pub event_type: String,
    pub data: String,
    pub created_at: DateTime<Utc>,
}

/// Where and how a test event ended up in the topic
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedEvent {
    pub partition: i32,
    pub key: String,
    pub payload: Vec<u8>,
}

/// The ten sample events, one minute apart starting 2024-01-01T00:00:00Z
pub fn test_events() -> Vec<TestEvent> {
    let events = [
        ("user_001", "login", "User logged in from browser"),
        ("user_002", "signup", "New user registration"),
        ("user_001", "purchase", "Bought premium subscription"),
        ("user_003", "login", "User logged in from mobile app"),
        ("user_002", "profile_update", "Updated profile picture"),
        ("user_004", "signup", "New user registration"),
        ("user_003", "logout", "User logged out"),
        ("user_001", "view", "Viewed product page"),
        ("user_005", "login", "User logged in from browser"),
        ("user_002", "purchase", "Bought basic plan"),
    ];

    events
        .iter()
        .enumerate()
        .map(|(i, (user_id, event_type, data))| TestEvent {
            id: i as u32 + 1,
            user_id: user_id.to_string(),
            event_type: event_type.to_string(),
            data: data.to_string(),
            created_at: DateTime::from_timestamp(1_704_067_200 + 60 * i as i64, 0)
                .unwrap_or_default(),
        })
        .collect()
}

/// Publish [`test_events`] round-robin over `partitions` partitions
///
/// Event `i` goes to partition `i % partitions`, so within a partition the
/// events keep their relative order.
pub async fn publish_test_events(
    producer: &KafkaTestProducer,
    topic: &str,
    partitions: i32,
) -> anyhow::Result<Vec<PublishedEvent>> {
    anyhow::ensure!(partitions > 0, "partitions must be positive");

    let mut published = Vec::new();
    for (i, event) in test_events().iter().enumerate() {
        let partition = i as i32 % partitions;
        let payload = producer
            .publish_json(topic, Some(partition), Some(&event.user_id), event)
            .await?;
        tracing::debug!("Published event {} to partition {partition}", event.id);

        published.push(PublishedEvent {
            partition,
            key: event.user_id.clone(),
            payload,
        });
    }

    Ok(published)
}

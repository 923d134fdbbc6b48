use rdkafka::error::KafkaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Kafka error: {0}")]
    Kafka(#[from] KafkaError),

    #[error("Topic not found: {0}")]
    TopicNotFound(String),

    #[error("Metadata error: {0}")]
    Metadata(String),

    #[error("Consumer error: {0}")]
    Consumer(String),

    #[error("Background task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, Error>;

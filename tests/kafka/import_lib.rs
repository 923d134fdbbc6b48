//! Kafka import E2E test through the library entry point
//!
//! Test flow:
//! 1. Create a topic with several partitions
//! 2. Publish JSON test events round-robin over the partitions
//! 3. Run the import into a temporary folder
//! 4. Verify file numbering, order and contents against what was published

use crate::common::{expected_contents, import_config, init_tracing, KAFKA_BROKER, PARTITIONS};
use kafka_importer::testing::{generate_test_id, read_exported_files};
use kafka_importer::{run_import, ImportReport};
use kafka_importer_kafka_producer::{publish_test_events, KafkaTestProducer, PublishedEvent};
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::sleep;

type SeededTopic = (String, Vec<PublishedEvent>);

/// Create a fresh topic and publish the test events to it
async fn seeded_topic(prefix: &str) -> Result<SeededTopic, Box<dyn std::error::Error>> {
    let topic = format!("{prefix}-{}", generate_test_id());
    let producer = KafkaTestProducer::new(KAFKA_BROKER).await?;
    producer.create_topic_if_not_exists(&topic, PARTITIONS).await?;

    // Give Kafka a moment to propagate topic metadata
    sleep(Duration::from_millis(500)).await;

    let published = publish_test_events(&producer, &topic, PARTITIONS).await?;
    Ok((topic, published))
}

#[tokio::test]
#[ignore = "Requires a Kafka broker at kafka:9092"]
async fn test_kafka_import_all_messages() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let (topic, published) = seeded_topic("test-import-all").await?;
    let dest = TempDir::new()?;

    let report = run_import(import_config(&topic, None, dest.path())).await?;

    let files = read_exported_files(dest.path())?;
    let numbers: Vec<u64> = files.iter().map(|f| f.number).collect();
    assert_eq!(numbers, (1..=published.len() as u64).collect::<Vec<_>>());

    let contents: Vec<Vec<u8>> = files.into_iter().map(|f| f.contents).collect();
    assert_eq!(contents, expected_contents(&published, None));

    assert_eq!(
        report,
        ImportReport {
            partitions: PARTITIONS as usize,
            processed: published.len() as u64 + PARTITIONS as u64,
            written: published.len() as u64,
            message_number: published.len() as u64 + 1,
        }
    );

    // Every file is the raw JSON that was produced
    for content in &contents {
        let value: serde_json::Value = serde_json::from_slice(content)?;
        assert!(value.get("user_id").is_some());
    }

    Ok(())
}

#[tokio::test]
#[ignore = "Requires a Kafka broker at kafka:9092"]
async fn test_kafka_import_with_key_filter() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let (topic, published) = seeded_topic("test-import-key").await?;
    let dest = TempDir::new()?;

    let report = run_import(import_config(&topic, Some("user_001"), dest.path())).await?;

    let expected = expected_contents(&published, Some("user_001"));
    let contents: Vec<Vec<u8>> = read_exported_files(dest.path())?
        .into_iter()
        .map(|f| f.contents)
        .collect();
    assert_eq!(contents, expected);
    assert_eq!(report.written, expected.len() as u64);
    assert_eq!(report.processed, published.len() as u64 + PARTITIONS as u64);

    for content in &contents {
        let value: serde_json::Value = serde_json::from_slice(content)?;
        assert_eq!(value["user_id"], "user_001");
    }

    Ok(())
}

#[tokio::test]
#[ignore = "Requires a Kafka broker at kafka:9092"]
async fn test_kafka_import_rerun_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let (topic, _published) = seeded_topic("test-import-rerun").await?;
    let dest = TempDir::new()?;
    std::fs::write(dest.path().join("unrelated.txt"), "keep")?;

    run_import(import_config(&topic, None, dest.path())).await?;
    let first = read_exported_files(dest.path())?;

    run_import(import_config(&topic, None, dest.path())).await?;
    let second = read_exported_files(dest.path())?;

    assert_eq!(first, second);
    assert_eq!(
        std::fs::read_to_string(dest.path().join("unrelated.txt"))?,
        "keep"
    );
    Ok(())
}

#[tokio::test]
#[ignore = "Requires a Kafka broker at kafka:9092"]
async fn test_kafka_import_empty_topic() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let topic = format!("test-import-empty-{}", generate_test_id());
    let producer = KafkaTestProducer::new(KAFKA_BROKER).await?;
    producer.create_topic_if_not_exists(&topic, PARTITIONS).await?;
    sleep(Duration::from_millis(500)).await;

    let dest = TempDir::new()?;
    let report = run_import(import_config(&topic, None, dest.path())).await?;

    assert!(read_exported_files(dest.path())?.is_empty());
    assert_eq!(report.written, 0);
    assert_eq!(report.message_number, 1);
    Ok(())
}

#[tokio::test]
#[ignore = "Requires a Kafka broker at kafka:9092"]
async fn test_kafka_import_unknown_topic() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let topic = format!("test-import-missing-{}", generate_test_id());
    let dest = TempDir::new()?;

    let result = run_import(import_config(&topic, None, dest.path())).await;

    let err = result.expect_err("import of a missing topic must fail");
    assert!(format!("{err:#}").contains("Failed to fetch metadata"));
    assert!(read_exported_files(dest.path())?.is_empty());
    Ok(())
}

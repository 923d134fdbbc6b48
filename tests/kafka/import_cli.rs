//! Kafka import through the `kafka-importer` binary

use crate::common::{expected_contents, KAFKA_BROKER, PARTITIONS};
use kafka_importer::testing::cli::{
    assert_cli_failure, assert_cli_success, execute_kafka_importer,
};
use kafka_importer::testing::{generate_test_id, read_exported_files};
use kafka_importer_kafka_producer::{publish_test_events, KafkaTestProducer};
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

fn binary() -> &'static Path {
    Path::new(env!("CARGO_BIN_EXE_kafka-importer"))
}

#[test]
fn test_cli_requires_topic() -> Result<(), Box<dyn std::error::Error>> {
    let output = execute_kafka_importer(binary(), &["--bootstrap-servers", "127.0.0.1:1"])?;
    assert_cli_failure(&output, "kafka-importer without --topic");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--topic"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn test_cli_unreachable_broker_fails_without_writing() -> Result<(), Box<dyn std::error::Error>> {
    let dest = TempDir::new()?;
    let dest_folder = dest.path().join("export");
    let dest_arg = dest_folder.to_string_lossy().into_owned();

    let output = execute_kafka_importer(
        binary(),
        &[
            "--bootstrap-servers",
            "127.0.0.1:1",
            "--topic",
            "orders",
            "--destFolder",
            &dest_arg,
            "--metadata-timeout",
            "500ms",
        ],
    )?;
    assert_cli_failure(&output, "kafka-importer against an unreachable broker");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: "), "stderr: {stderr}");
    assert_eq!(output.status.code(), Some(1));

    // The folder is prepared before the broker is contacted
    assert!(dest_folder.is_dir());
    assert!(read_exported_files(&dest_folder)?.is_empty());
    Ok(())
}

#[tokio::test]
#[ignore = "Requires a Kafka broker at kafka:9092"]
async fn test_cli_import_defaults_to_topic_folder() -> Result<(), Box<dyn std::error::Error>> {
    let topic = format!("test-import-cli-{}", generate_test_id());
    let producer = KafkaTestProducer::new(KAFKA_BROKER).await?;
    producer.create_topic_if_not_exists(&topic, PARTITIONS).await?;
    tokio::time::sleep(Duration::from_millis(500)).await;
    let published = publish_test_events(&producer, &topic, PARTITIONS).await?;

    // Without --destFolder the export lands in ./<topic>, relative to the
    // working directory of the process
    let work_dir = TempDir::new()?;
    let output = tokio::process::Command::new(binary())
        .current_dir(work_dir.path())
        .args(["--bootstrap-servers", KAFKA_BROKER, "--topic", &topic])
        .output()
        .await?;
    assert_cli_success(&output, "kafka-importer default destination");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected_final = format!("Count messages: '{}'", published.len() + 1);
    assert!(stdout.contains(&expected_final), "stdout: {stdout}");

    let contents: Vec<Vec<u8>> = read_exported_files(&work_dir.path().join(&topic))?
        .into_iter()
        .map(|f| f.contents)
        .collect();
    assert_eq!(contents, expected_contents(&published, None));
    Ok(())
}

//! Kafka topic export to numbered files.
//!
//! Reads every partition of a topic from its first offset, one partition at a
//! time in partition-id order, and writes the value of each retained message
//! to `<destination>/<n>.json`.

use anyhow::{Context, Result};
use clap::Parser;
use kafka_importer_file::MessageFileWriter;
use kafka_types::{KeyFilter, Polled};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::consumer::{ConsumerConfig, IMPORT_GROUP_ID};
use crate::duration::parse_duration;
use crate::source::MessageSource;
use crate::Consumer;

/// Number of polls between two progress lines
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 500;

/// Configuration for a Kafka import.
#[derive(Debug, Clone, Parser)]
pub struct Config {
    /// Kafka bootstrap servers (comma-separated broker list)
    #[clap(long, env = "KAFKA_BOOTSTRAP_SERVERS")]
    pub bootstrap_servers: String,
    /// Kafka topic to read data from
    #[clap(long)]
    pub topic: String,
    /// Key to filter messages (optional, exact match)
    #[clap(long)]
    pub key: Option<String>,
    /// Destination folder to save messages (defaults to the topic name)
    #[clap(long = "destFolder", visible_alias = "dest-folder")]
    pub dest_folder: Option<PathBuf>,
    /// Timeout for fetching topic metadata, e.g. "10s" or "500ms"
    #[clap(long, default_value = "10s", value_parser = parse_duration)]
    pub metadata_timeout: Duration,
    /// Treat a poll that waits longer than this as the end of the partition.
    /// Without it a poll waits until a message or end-of-partition arrives.
    #[clap(long, value_parser = parse_duration)]
    pub poll_timeout: Option<Duration>,
    /// Log a progress line every N polled messages
    #[clap(long, default_value_t = DEFAULT_PROGRESS_INTERVAL, value_parser = clap::value_parser!(u64).range(1..))]
    pub progress_interval: u64,
}

impl Config {
    /// Output folder: the configured destination or, if unset, the topic name
    pub fn destination(&self) -> PathBuf {
        self.dest_folder
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.topic))
    }

    pub fn key_filter(&self) -> KeyFilter {
        KeyFilter::new(self.key.clone())
    }

    pub fn consumer_config(&self) -> ConsumerConfig {
        ConsumerConfig {
            brokers: self.bootstrap_servers.clone(),
            group_id: IMPORT_GROUP_ID.to_string(),
            metadata_timeout: self.metadata_timeout,
            poll_timeout: self.poll_timeout,
            ..Default::default()
        }
    }
}

/// Outcome of a completed import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    /// Number of partitions drained
    pub partitions: usize,
    /// Poll results seen, including end-of-partition and filtered messages
    pub processed: u64,
    /// Files written
    pub written: u64,
    /// Number the next file would have received (`written + 1`).
    /// This is the figure printed at the end of a run.
    pub message_number: u64,
}

/// Run-scoped state of one import: the source being drained, the file
/// writer and both counters.
pub struct Importer<'a, S: MessageSource + ?Sized> {
    source: &'a S,
    writer: MessageFileWriter,
    filter: KeyFilter,
    progress_interval: u64,
    message_number: u64,
    processed: u64,
}

impl<'a, S: MessageSource + ?Sized> Importer<'a, S> {
    pub fn new(source: &'a S, writer: MessageFileWriter, filter: KeyFilter) -> Self {
        Self {
            source,
            writer,
            filter,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            message_number: 1,
            processed: 0,
        }
    }

    pub fn with_progress_interval(mut self, progress_interval: u64) -> Self {
        self.progress_interval = progress_interval.max(1);
        self
    }

    /// Drain every partition of `topic` in ascending partition order.
    pub async fn run(mut self, topic: &str) -> Result<ImportReport> {
        let partitions = self
            .source
            .partitions(topic)
            .await
            .with_context(|| format!("Failed to fetch metadata for topic '{topic}'"))?;
        info!(
            "Topic {topic} has {} partitions, writing to {}",
            partitions.len(),
            self.writer.dir().display()
        );

        for &partition in &partitions {
            self.drain_partition(topic, partition).await?;
        }

        Ok(ImportReport {
            partitions: partitions.len(),
            processed: self.processed,
            written: self.message_number - 1,
            message_number: self.message_number,
        })
    }

    async fn drain_partition(&mut self, topic: &str, partition: i32) -> Result<()> {
        self.source
            .assign(topic, partition)
            .with_context(|| format!("Failed to assign {topic}[{partition}]"))?;
        let first_number = self.message_number;

        loop {
            let polled = self
                .source
                .poll()
                .await
                .with_context(|| format!("Failed to consume from {topic}[{partition}]"))?;

            self.processed += 1;
            if self.processed % self.progress_interval == 0 {
                info!("Processed {} messages", self.processed);
            }

            let message = match polled {
                Polled::Message(message) => message,
                Polled::PartitionEof { .. } | Polled::Empty => break,
            };

            if !self.filter.matches(&message) {
                continue;
            }

            let path = self
                .writer
                .write(self.message_number, message.payload_bytes())
                .await?;
            debug!(
                "Wrote {topic}[{}]@{} (key={:?}) to {}",
                message.partition,
                message.offset,
                message.key_lossy(),
                path.display()
            );
            self.message_number += 1;
        }

        debug!(
            "Finished {topic}[{partition}]: {} files written",
            self.message_number - first_number
        );
        Ok(())
    }
}

/// Run a complete import against the configured brokers.
///
/// The destination folder is prepared first, then a consumer is created and
/// every partition is drained. The consumer is released before this function
/// returns, whether the import succeeded or failed.
pub async fn run_import(config: Config) -> Result<ImportReport> {
    let destination = config.destination();
    info!(
        "Starting Kafka import from topic {} into {}",
        config.topic,
        destination.display()
    );
    if let Some(key) = config.key.as_deref().filter(|k| !k.is_empty()) {
        info!("Only messages with key '{key}' will be written");
    }

    let writer = MessageFileWriter::create(&destination).await?;
    let consumer = Consumer::new(config.consumer_config())?;

    let result = import_with(&consumer, writer, &config).await;
    drop(consumer);

    let report = result?;
    info!(
        "Finish importing data. Count messages: '{}'",
        report.message_number
    );
    Ok(report)
}

/// Import `config.topic` from an already constructed source.
///
/// Failures are logged here before they are handed back to the caller.
pub async fn import_with<S: MessageSource + ?Sized>(
    source: &S,
    writer: MessageFileWriter,
    config: &Config,
) -> Result<ImportReport> {
    let result = Importer::new(source, writer, config.key_filter())
        .with_progress_interval(config.progress_interval)
        .run(&config.topic)
        .await;

    if let Err(e) = &result {
        error!("Kafka import from topic {} failed: {e:?}", config.topic);
    }
    result
}

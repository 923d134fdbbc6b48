//! Command-line interface for kafka-importer
//!
//! # Usage Examples
//!
//! ```bash
//! # Export every message of a topic into ./user-events/1.json, 2.json, ...
//! kafka-importer \
//!   --bootstrap-servers localhost:9092 \
//!   --topic user-events
//!
//! # Only messages keyed "user_001", into a custom folder
//! kafka-importer \
//!   --bootstrap-servers localhost:9092 \
//!   --topic user-events \
//!   --key user_001 \
//!   --destFolder ./exports/user_001
//!
//! # Stop waiting on a partition after 5 idle seconds
//! kafka-importer \
//!   --bootstrap-servers localhost:9092 \
//!   --topic user-events \
//!   --poll-timeout 5s
//! ```

use clap::Parser;
use kafka_importer::kafka;

#[derive(Parser)]
#[command(name = "kafka-importer")]
#[command(about = "Import messages from Kafka topic")]
#[command(long_about = None)]
struct Cli {
    /// Kafka import configuration
    #[command(flatten)]
    config: kafka::Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    tracing::debug!("Import configuration: {:?}", cli.config);

    kafka::run_import(cli.config).await?;
    Ok(())
}

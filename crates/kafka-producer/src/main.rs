use clap::Parser;
use kafka_importer_kafka_producer::{publish_test_events, KafkaTestProducer};

/// Seed a Kafka topic with the sample JSON events used by the kafka-importer tests
///
/// To run this producer:
/// 1. Start Kafka with Docker:
///    docker run -d --name kafka -p 9092:9092 apache/kafka:latest
/// 2. Run the producer:
///    cargo run -p kafka-importer-kafka-producer -- --topic user-events
/// 3. Export the topic:
///    cargo run -- --bootstrap-servers localhost:9092 --topic user-events
#[derive(Parser)]
#[command(name = "kafka-producer")]
struct Args {
    /// Kafka broker address
    #[arg(long, default_value = "localhost:9092", env = "KAFKA_BOOTSTRAP_SERVERS")]
    brokers: String,

    /// Topic to create and publish to
    #[arg(long, default_value = "user-events")]
    topic: String,

    /// Number of partitions to create the topic with
    #[arg(long, default_value_t = 3)]
    partitions: i32,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    match run_main(Args::parse()).await {
        Ok(_) => println!("Producer finished successfully"),
        Err(e) => {
            eprintln!("Error: {e:?}");
            std::process::exit(1);
        }
    }
}

async fn run_main(args: Args) -> anyhow::Result<()> {
    let producer = KafkaTestProducer::new(&args.brokers).await?;

    println!("Creating topic '{}' if it doesn't exist...", args.topic);
    producer
        .create_topic_if_not_exists(&args.topic, args.partitions)
        .await?;

    let published = publish_test_events(&producer, &args.topic, args.partitions).await?;
    for event in &published {
        println!(
            "Published to partition {}: key={}, value={}",
            event.partition,
            event.key,
            String::from_utf8_lossy(&event.payload)
        );
    }

    println!(
        "\nSuccessfully published {} messages to '{}'",
        published.len(),
        args.topic
    );
    Ok(())
}

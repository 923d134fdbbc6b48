//! kafka-importer library
//!
//! Exports every message of a Kafka topic into a folder of numbered files,
//! one file per message value.
//!
//! # Features
//!
//! - Full re-scan: every partition is read from its earliest offset on every run
//! - Deterministic output: partitions are drained one at a time in id order,
//!   files are numbered `1.json`, `2.json`, ... in write order
//! - Key filter: optionally keep only messages whose key matches exactly
//! - No state: offsets are never committed, nothing is remembered between runs
//!
//! # Crates
//!
//! - `kafka_importer_kafka_source` - consumer and the import run
//! - `kafka_types` - shared message types and the key filter
//! - `kafka_importer_file` - destination folder and numbered files
//!
//! # CLI Usage
//!
//! ```bash
//! # Export a whole topic into ./orders
//! kafka-importer --bootstrap-servers localhost:9092 --topic orders
//!
//! # Export only messages keyed "user_001" into /tmp/user_001
//! kafka-importer --bootstrap-servers localhost:9092 --topic orders \
//!   --key user_001 --destFolder /tmp/user_001
//! ```

pub mod testing;

// Re-export the library crates for convenience
pub use kafka_importer_file as file;
pub use kafka_importer_kafka_source as kafka;
pub use kafka_types as types;

pub use kafka::{run_import, Config, ImportReport};

//! Kafka consumer and topic export library for kafka-importer.
//!
//! This crate provides:
//! - A Kafka consumer that reads one manually assigned partition at a time
//!   from its earliest offset and reports end-of-partition
//! - The import run that drains a whole topic into numbered files
//!
//! # Dependency Direction
//!
//! This crate depends on `kafka-types` for the shared message types
//! (Message, Polled, KeyFilter) and on `kafka-importer-file` for output.

/// Low-level consumer with manual partition assignment
///
/// Created from a [`ConsumerConfig`]; implements [`MessageSource`].
pub mod consumer;
pub mod duration;
pub mod error;
pub mod source;
pub mod sync;

// Re-export from kafka-types for convenience
pub use kafka_types::{KeyFilter, Message, Polled};

// Re-export sync functions
pub use sync::{import_with, run_import, Config, ImportReport, Importer};

// Re-export consumer types
pub use consumer::{Consumer, ConsumerConfig, IMPORT_GROUP_ID};
pub use error::{Error, Result};
pub use source::MessageSource;

//! Kafka message types for kafka-importer.
//!
//! This crate holds the broker-independent types shared between the consumer
//! crate and the importer:
//!
//! - [`Message`] - a consumed record with its raw key and value bytes
//! - [`Polled`] - the outcome of a single poll against an assigned partition
//! - [`KeyFilter`] - the exact-match key predicate applied before writing
//!
//! # Examples
//!
//! ```
//! use kafka_types::{KeyFilter, Message};
//!
//! let filter = KeyFilter::new(Some("user_001".to_string()));
//! let message = Message {
//!     topic: "events".to_string(),
//!     partition: 0,
//!     offset: 42,
//!     key: Some(b"user_001".to_vec()),
//!     payload: Some(br#"{"id":1}"#.to_vec()),
//!     timestamp: None,
//! };
//! assert!(filter.matches(&message));
//! ```

pub mod filter;
pub mod message;

pub use filter::KeyFilter;
pub use message::{Message, Polled};

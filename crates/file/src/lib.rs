//! Local filesystem output for kafka-importer
//!
//! Every exported message becomes one file in a destination folder. Files are
//! named by a 1-based counter with a fixed `.json` extension: `1.json`,
//! `2.json`, ... The content is the raw message value; nothing is parsed or
//! re-serialized, so the extension is a naming convention only.
//!
//! # Example
//!
//! ```ignore
//! use kafka_importer_file::MessageFileWriter;
//!
//! let writer = MessageFileWriter::create("orders").await?;
//! writer.write(1, br#"{"id": 1}"#).await?; // orders/1.json
//! ```

mod local;

pub use local::{prepare_destination, MessageFileWriter};

/// Extension given to every exported message file
pub const FILE_EXTENSION: &str = "json";

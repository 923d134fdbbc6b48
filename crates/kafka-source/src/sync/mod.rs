//! Kafka topic export to the local filesystem.
//!
//! This module drains every partition of a topic from the beginning and
//! writes each retained message value to its own numbered file.

mod import;

pub use import::{
    import_with, run_import, Config, ImportReport, Importer, DEFAULT_PROGRESS_INTERVAL,
};

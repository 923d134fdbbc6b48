//! Test infrastructure for kafka-importer
//!
//! Helpers shared by the end-to-end tests: unique naming, reading back an
//! export folder, and driving the CLI binary.

pub mod cli;
pub mod test_helpers;

pub use test_helpers::{generate_test_id, read_exported_files, ExportedFile};

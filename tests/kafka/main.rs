//! Kafka import E2E tests
//!
//! Tests for exporting Kafka topics into numbered files. The broker-backed
//! tests expect a Kafka broker at `kafka:9092` (the devcontainer setup) and are
//! ignored by default; run them with `cargo test -- --ignored`.

mod import_cli;
mod import_lib;

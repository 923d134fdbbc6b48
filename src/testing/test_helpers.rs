//! Shared test helpers for E2E and CLI integration tests

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

// Generate unique test identifiers for parallel execution
static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique test identifier for parallel test execution
pub fn generate_test_id() -> u64 {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let counter = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    timestamp.wrapping_add(counter)
}

/// A numbered file found in an export folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub number: u64,
    pub contents: Vec<u8>,
}

/// Read every `<n>.json` file of `dir`, ordered by `n`
///
/// Files that do not follow the naming scheme are ignored.
pub fn read_exported_files(dir: &Path) -> Result<Vec<ExportedFile>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(number) = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.parse::<u64>().ok())
        else {
            continue;
        };
        files.push(ExportedFile {
            number,
            contents: std::fs::read(&path)?,
        });
    }
    files.sort_by_key(|f| f.number);
    Ok(files)
}

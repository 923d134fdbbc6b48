use std::path::Path;
use std::process::{Command, Output};

/// Execute the kafka-importer binary and return the output
///
/// Integration tests pass `env!("CARGO_BIN_EXE_kafka-importer")` as `binary`.
pub fn execute_kafka_importer(
    binary: &Path,
    args: &[&str],
) -> Result<Output, Box<dyn std::error::Error>> {
    let output = Command::new(binary)
        .args(args)
        .env("RUST_LOG", "info,kafka_importer_kafka_source=debug")
        .output()?;
    Ok(output)
}

/// Verify CLI command succeeded
pub fn assert_cli_success(output: &Output, command_desc: &str) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!(
            "{} failed!\nExit code: {:?}\nStdout: {}\nStderr: {}",
            command_desc,
            output.status.code(),
            stdout,
            stderr
        );
    }
}

/// Verify CLI command failed with a non-zero exit code
pub fn assert_cli_failure(output: &Output, command_desc: &str) {
    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!("{command_desc} unexpectedly succeeded!\nStdout: {stdout}");
    }
}

/*!
 * Common test utilities for the subtool test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;
use subtool::Segment;

/// Initialize logging for tests (safe to call repeatedly)
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample SRT file for testing
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = "1
0:00:01,000 --> 0:00:04,000
This is a test subtitle.

2
0:00:05,000 --> 0:00:09,000
It contains multiple entries.

3
0:00:10,000 --> 0:00:14,000
For testing purposes.
";
    create_test_file(dir, filename, content)
}

/// Creates a sample segments JSON file shaped like a transcription response
pub fn create_test_segments_json(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = r#"{
  "text": "Hello. How are you?",
  "segments": [
    {"id": 0, "start": 0.0, "end": 2.5, "text": "Hello."},
    {"id": 1, "start": 3.0, "end": 5.25, "text": "How are you?"}
  ]
}"#;
    create_test_file(dir, filename, content)
}

/// A small ordered sequence used across tests
pub fn sample_segments() -> Vec<Segment> {
    vec![
        Segment::new(0.0, 2.5, "Hello"),
        Segment::new(3.0, 5.25, "How are you?"),
        Segment::new(6.5, 9.0, "Fine, thanks.\nAnd you?"),
    ]
}

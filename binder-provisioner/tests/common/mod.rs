use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `contents` to a fresh `.toml` file; it is removed when the handle drops.
pub fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("binder_test_")
        .suffix(".toml")
        .tempfile()
        .expect("failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp config");
    file
}

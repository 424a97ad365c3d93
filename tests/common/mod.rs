use std::io::Write;

use assert_cmd::{assert::Assert, Command};
use tempfile::NamedTempFile;

/// Run the lox binary with the given subcommand over a temp file holding
/// `source`.
pub fn lox(subcommand: &str, source: &str) -> Assert {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(source.as_bytes())
        .expect("failed to write source");

    Command::new(env!("CARGO_BIN_EXE_lox"))
        .arg(subcommand)
        .arg(file.path())
        .assert()
}

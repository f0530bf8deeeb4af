//! Reading transcript sources.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

/// Path that selects standard input.
const STDIN_PATH: &str = "-";

/// Returns true when `path` selects standard input.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Returns the name shown for a source in output.
pub fn source_label(path: &Path) -> String {
    if is_stdin(path) {
        String::from("<stdin>")
    } else {
        path.display().to_string()
    }
}

/// Reads a transcript from a file or, for `-`, from standard input.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_source(path: &Path) -> io::Result<String> {
    let bytes = if is_stdin(path) {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(path)?
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads a source, printing an error when it cannot be read.
pub fn read_source_or_report(path: &Path) -> Option<String> {
    match read_source(path) {
        Ok(text) => Some(text),
        Err(e) => {
            eprintln!("error: failed to read {}: {e}", source_label(path));
            None
        }
    }
}

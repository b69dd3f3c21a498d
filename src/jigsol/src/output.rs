//! Output writers for the analysis directory

use crate::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Create the output directory and any missing parents
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

/// Write UTF-8 text, replacing any existing file
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote text");
    Ok(())
}

/// Write a value as pretty-printed JSON (2-space indent)
///
/// Non-ASCII text is written as raw UTF-8, not `\uXXXX` escapes.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::json(path.display().to_string(), e))?;
    write_text(path, &json)
}

/// `header`, then each line, newline-separated with no trailing newline
pub fn join_with_header<'a, I>(header: &str, lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let body: Vec<&str> = lines.into_iter().collect();
    format!("{}\n{}", header, body.join("\n"))
}

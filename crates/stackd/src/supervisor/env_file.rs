//! Sources the external environment file and resolves argument overrides.
//!
//! `/etc/stackd` is a plain `KEY=VALUE` file, one assignment per line, with
//! shell-style comments and an optional `export` prefix tolerated. Rather
//! than mutating the supervisor's own environment, the sourced entries form
//! an overlay that is handed to every launched daemon and consulted before
//! the process environment when reading the per-daemon override variables.

use std::env;
use std::fs;
use std::io;
use std::path::Path;

use super::errors::SupervisorError;

/// Reads the environment file into an overlay of `(key, value)` pairs.
///
/// A missing file is not an error; the startup sequence simply continues
/// with an empty overlay. Entries keep file order, so a later assignment to
/// the same key shadows an earlier one.
pub(super) fn source_env_file(path: &Path) -> Result<Vec<(String, String)>, SupervisorError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(SupervisorError::EnvRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    parse(path, &contents)
}

fn parse(path: &Path, contents: &str) -> Result<Vec<(String, String)>, SupervisorError> {
    let mut entries = Vec::new();
    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").map_or(line, str::trim_start);
        let malformed = || SupervisorError::EnvParse {
            path: path.to_path_buf(),
            line: index + 1,
            entry: raw.trim().to_owned(),
        };
        let Some((key, value)) = line.split_once('=') else {
            return Err(malformed());
        };
        let key = key.trim_end();
        if !is_valid_key(key) {
            return Err(malformed());
        }
        entries.push((key.to_owned(), unquote(value.trim()).to_owned()));
    }
    Ok(entries)
}

fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Resolves the whitespace-delimited extra arguments for a daemon.
///
/// The overlay sourced from the environment file wins over the process
/// environment; within the overlay the last assignment wins. An unset or
/// empty value yields no extra arguments.
pub(super) fn override_arguments(name: &str, overlay: &[(String, String)]) -> Vec<String> {
    let value = overlay
        .iter()
        .rev()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
        .or_else(|| env::var(name).ok());
    value
        .map(|value| value.split_whitespace().map(str::to_owned).collect())
        .unwrap_or_default()
}

//! Env file appending and parsing.
//!
//! Exports and the Next.js variable block land in line-oriented KEY=value
//! files. Appends never truncate and never deduplicate; re-running the
//! step appends again.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{BuildprepError, Result};

/// Append raw content to an env file, creating it if absent.
pub fn append_raw(path: &Path, content: &str) -> Result<()> {
    let append = |path: &Path| -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(content.as_bytes())
    };

    append(path).map_err(|source| BuildprepError::EnvFileAppend {
        path: path.to_path_buf(),
        source,
    })
}

/// Append a single `NAME=value` line.
pub fn append_var(path: &Path, name: &str, value: &str) -> Result<()> {
    append_raw(path, &format!("{}={}\n", name, value))
}

/// Parse env file content into a map of variables.
///
/// Supports `KEY=value`, quoted values, comments, whitespace around the
/// equals sign, and values containing further equals signs. Later
/// occurrences of a key win, matching how consumers read these files.
pub fn parse(content: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = parse_line(line) {
            vars.insert(key, value);
        }
    }

    vars
}

/// Load and parse an env file, returning an empty map if it doesn't exist.
pub fn load_optional(path: &Path) -> Result<HashMap<String, String>> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        Ok(parse(&content))
    } else {
        Ok(HashMap::new())
    }
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim().to_string();
    let value = unquote(line[eq_pos + 1..].trim());

    Some((key, value))
}

fn unquote(value: &str) -> String {
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        value[1..value.len() - 1].to_string()
    } else {
        value.to_string()
    }
}

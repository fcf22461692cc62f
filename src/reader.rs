//! Splits a SQL file into one string per `CREATE TABLE` statement.
use crate::*;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// A `;` that ends one statement because another `CREATE TABLE` follows.
static STATEMENT_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i);\s*CREATE\s+TABLE\b").expect("statement boundary pattern is valid")
});

/// Each returned statement is trimmed and ends with exactly one `;`.
pub fn split_statements(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for boundary in STATEMENT_BOUNDARY.find_iter(text) {
        pieces.push(&text[start..boundary.start()]);
        // Next statement starts at its CREATE, the `;` stays behind.
        start = boundary.start() + 1;
    }
    pieces.push(&text[start..]);

    pieces
        .into_iter()
        .map(|piece| piece.trim().trim_end_matches(';').trim_end())
        .filter(|piece| !piece.is_empty())
        .map(|piece| format!("{piece};"))
        .collect()
}

pub fn read_statements(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    let statements = split_statements(&text);
    debug!("Read {} statements from {}", statements.len(), path.display());
    Ok(statements)
}

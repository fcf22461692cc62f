//! TypeScript generation driven by parsed `TableMetadata`.
//!
//! Every generator is a pure function of the tables (plus the inheritance
//! map for classes) and returns `GeneratedFile`s; writing them out is the
//! job of `output`.
crate::reexport!(enums);
crate::reexport!(inheritance);
crate::reexport!(class);
crate::reexport!(router);

use crate::*;
use std::path::PathBuf;

/// A file to be written, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Produce `enums.ts`, one class per table and one router per table.
pub fn generate_all(tables: &[TableMetadata], inheritance: &Inheritance) -> Vec<GeneratedFile> {
    let catalog = EnumCatalog::collect(tables);
    debug!("Collected {} enums from {} tables", catalog.len(), tables.len());

    let mut files = vec![GeneratedFile::new(ENUMS_FILE, catalog.render())];
    files.extend(ClassGenerator::new(tables, inheritance, &catalog).generate());
    files.extend(tables.iter().map(|t| RouterGenerator::new(t).generate()));
    files
}

/// `'...'` TypeScript string literal.
fn single_quoted(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// `"..."` TypeScript string literal.
fn double_quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

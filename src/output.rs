use crate::*;
use std::path::Path;

pub const METADATA_FILE: &str = "metadata.json";

/// Write every file below `out_dir`, creating directories as needed.
pub fn write_files(out_dir: &Path, files: &[GeneratedFile]) -> Result {
    for file in files {
        let path = out_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &file.contents)?;
        info!("Generated {}", path.display());
    }
    Ok(())
}

/// Pretty-printed JSON array of the parsed tables.
pub fn metadata_json(tables: &[TableMetadata]) -> Result<GeneratedFile> {
    let mut contents = serde_json::to_string_pretty(tables)?;
    contents.push('\n');
    Ok(GeneratedFile::new(METADATA_FILE, contents))
}
